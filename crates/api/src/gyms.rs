use crate::{connection::Connection, error::ApiError};
use model::{
    gym::{Gym, GymPayload},
    ids::GymId,
    page::{ListQuery, Paged},
};

#[derive(Clone)]
pub struct Gyms {
    conn: Connection,
}

impl Gyms {
    pub(crate) fn new(conn: Connection) -> Self {
        Gyms { conn }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paged<Gym>, ApiError> {
        self.conn.get_query("/api/gyms", query).await
    }

    pub async fn get(&self, id: &GymId) -> Result<Gym, ApiError> {
        self.conn.get(&format!("/api/gyms/{id}")).await
    }

    pub async fn create(&self, payload: &GymPayload) -> Result<Gym, ApiError> {
        self.conn.post("/api/gyms", payload).await
    }

    pub async fn update(&self, id: &GymId, payload: &GymPayload) -> Result<Gym, ApiError> {
        self.conn.put(&format!("/api/gyms/{id}"), payload).await
    }

    /// Soft delete: the gym stays in storage and in `includeInactive` lists.
    pub async fn delete(&self, id: &GymId) -> Result<(), ApiError> {
        self.conn.delete(&format!("/api/gyms/{id}")).await
    }
}
