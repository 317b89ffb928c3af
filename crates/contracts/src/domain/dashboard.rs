use serde::{Deserialize, Serialize};

/// Headline figures shown on the dashboard; refreshed on a fixed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tenants: i64,
    pub active_users: i64,
    pub monthly_revenue: f64,
    pub pending_payouts: f64,
    pub open_invoices: i64,
}

/// A single row in the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub period: String,
    pub signups: i64,
    pub churned: i64,
    pub conversion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListing {
    pub id: uuid::Uuid,
    pub title: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub ready: bool,
}
