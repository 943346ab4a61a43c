use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_gyms: u64,
    pub active_gyms: u64,
    pub total_trainers: u64,
    pub active_trainers: u64,
    pub total_tags: u64,
    pub total_admin_users: u64,
}

/// One point of the monthly registrations chart, month as `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub gym_registrations: Vec<MonthlyCount>,
    #[serde(default)]
    pub trainer_registrations: Vec<MonthlyCount>,
}
