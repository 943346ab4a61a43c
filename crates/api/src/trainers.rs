use crate::{connection::Connection, error::ApiError};
use model::{
    ids::{GymId, TrainerId},
    page::{ListQuery, Paged},
    trainer::{Trainer, TrainerPayload},
};
use std::future::Future;

#[derive(Clone)]
pub struct Trainers {
    conn: Connection,
}

impl Trainers {
    pub(crate) fn new(conn: Connection) -> Self {
        Trainers { conn }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paged<Trainer>, ApiError> {
        self.conn.get_query("/api/trainers", query).await
    }

    pub async fn get(&self, id: &TrainerId) -> Result<Trainer, ApiError> {
        self.conn.get(&format!("/api/trainers/{id}")).await
    }

    pub async fn create(&self, payload: &TrainerPayload) -> Result<Trainer, ApiError> {
        self.conn.post("/api/trainers", payload).await
    }

    pub async fn update(
        &self,
        id: &TrainerId,
        payload: &TrainerPayload,
    ) -> Result<Trainer, ApiError> {
        self.conn.put(&format!("/api/trainers/{id}"), payload).await
    }

    pub async fn delete(&self, id: &TrainerId) -> Result<(), ApiError> {
        self.conn.delete(&format!("/api/trainers/{id}")).await
    }

    /// Trainers currently attached to a gym. The list endpoint has no gym
    /// filter, so this walks every page and filters locally; a truncated
    /// snapshot here would corrupt the association diff later.
    pub async fn list_by_gym(&self, gym_id: &GymId) -> Result<Vec<Trainer>, ApiError> {
        let query = ListQuery {
            page_size: 100,
            include_inactive: true,
            ..ListQuery::default()
        };
        let trainers = all_pages(query, |q| async move { self.list(&q).await }).await?;
        Ok(trainers
            .into_iter()
            .filter(|t| t.gym_id.as_ref() == Some(gym_id))
            .collect())
    }
}

/// Drains a paged endpoint, advancing `page` until the reported total is
/// exhausted. An empty page ends the walk even if the total claims more.
async fn all_pages<T, F, Fut>(mut query: ListQuery, fetch: F) -> Result<Vec<T>, ApiError>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Paged<T>, ApiError>>,
{
    let mut items = Vec::new();
    loop {
        let page = fetch(query.clone()).await?;
        let last = query.page >= page.total_pages() || page.items.is_empty();
        items.extend(page.items);
        if last {
            return Ok(items);
        }
        query.page += 1;
    }
}
