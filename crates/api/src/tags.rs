use crate::{connection::Connection, error::ApiError};
use model::{
    ids::TagId,
    page::{ListQuery, Paged},
    tag::{Tag, TagPayload},
};

#[derive(Clone)]
pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub(crate) fn new(conn: Connection) -> Self {
        Tags { conn }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paged<Tag>, ApiError> {
        self.conn.get_query("/api/tags", query).await
    }

    pub async fn get(&self, id: &TagId) -> Result<Tag, ApiError> {
        self.conn.get(&format!("/api/tags/{id}")).await
    }

    pub async fn create(&self, payload: &TagPayload) -> Result<Tag, ApiError> {
        self.conn.post("/api/tags", payload).await
    }

    pub async fn update(&self, id: &TagId, payload: &TagPayload) -> Result<Tag, ApiError> {
        self.conn.put(&format!("/api/tags/{id}"), payload).await
    }

    pub async fn delete(&self, id: &TagId) -> Result<(), ApiError> {
        self.conn.delete(&format!("/api/tags/{id}")).await
    }

    /// Search-by-slug lookup. The backend matches the slug via the search
    /// term; only an exact slug hit counts.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, ApiError> {
        let query = ListQuery {
            search_term: slug.to_owned(),
            include_inactive: true,
            ..ListQuery::default()
        };
        let page = self.list(&query).await?;
        Ok(page.items.into_iter().find(|t| t.slug == slug))
    }
}
