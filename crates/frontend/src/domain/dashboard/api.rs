use contracts::domain::dashboard::{ActivityEntry, AnalyticsSummary, DashboardStats, ReportListing};

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_stats() -> Result<DashboardStats, String> {
    let token = storage::get_token();
    call("GET", "/api/dashboard/stats", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_activity() -> Result<Vec<ActivityEntry>, String> {
    let token = storage::get_token();
    call("GET", "/api/dashboard/activity", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_analytics() -> Result<Vec<AnalyticsSummary>, String> {
    let token = storage::get_token();
    call("GET", "/api/analytics/summary", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_reports() -> Result<Vec<ReportListing>, String> {
    let token = storage::get_token();
    call("GET", "/api/reports", None, token.as_deref())
        .await
        .decode()
}
