use crate::{connection::Connection, error::ApiError};
use model::{
    admin_user::{AdminUser, AdminUserPayload},
    ids::AdminUserId,
    page::{ListQuery, Paged},
};

#[derive(Clone)]
pub struct AdminUsers {
    conn: Connection,
}

impl AdminUsers {
    pub(crate) fn new(conn: Connection) -> Self {
        AdminUsers { conn }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paged<AdminUser>, ApiError> {
        self.conn.get_query("/api/admin-users", query).await
    }

    pub async fn get(&self, id: &AdminUserId) -> Result<AdminUser, ApiError> {
        self.conn.get(&format!("/api/admin-users/{id}")).await
    }

    pub async fn create(&self, payload: &AdminUserPayload) -> Result<AdminUser, ApiError> {
        self.conn.post("/api/admin-users", payload).await
    }

    pub async fn update(
        &self,
        id: &AdminUserId,
        payload: &AdminUserPayload,
    ) -> Result<AdminUser, ApiError> {
        self.conn
            .put(&format!("/api/admin-users/{id}"), payload)
            .await
    }

    pub async fn delete(&self, id: &AdminUserId) -> Result<(), ApiError> {
        self.conn.delete(&format!("/api/admin-users/{id}")).await
    }
}
