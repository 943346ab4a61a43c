use crate::{connection::Connection, error::ApiError};
use model::dashboard::{DashboardStats, DashboardSummary};

#[derive(Clone)]
pub struct Dashboard {
    conn: Connection,
}

impl Dashboard {
    pub(crate) fn new(conn: Connection) -> Self {
        Dashboard { conn }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        self.conn.get("/api/dashboard/summary").await
    }

    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.conn.get("/api/dashboard/stats").await
    }
}
