use contracts::domain::payments::{FinanceOverview, PayoutRecord, PayoutSchedule, Transaction};

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_overview() -> Result<FinanceOverview, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/finance/overview", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, String> {
    let token = storage::get_token();
    call(
        "GET",
        "/api/tenant/finance/transactions",
        None,
        token.as_deref(),
    )
    .await
    .decode()
}

pub async fn fetch_payouts() -> Result<Vec<PayoutRecord>, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/finance/payouts", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_settings() -> Result<PayoutSchedule, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/finance/settings", None, token.as_deref())
        .await
        .decode()
}
