use crate::{connection::Connection, error::ApiError};
use model::province::Province;

#[derive(Clone)]
pub struct Provinces {
    conn: Connection,
}

impl Provinces {
    pub(crate) fn new(conn: Connection) -> Self {
        Provinces { conn }
    }

    /// The full static reference list; the backend returns a plain array.
    pub async fn list(&self) -> Result<Vec<Province>, ApiError> {
        self.conn.get("/api/provinces").await
    }
}
