use contracts::domain::payments::{
    FeeConfig, PaymentAnalytics, PayoutFrequency, PayoutSchedule, Transaction,
};
use serde_json::json;

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_schedule() -> Result<PayoutSchedule, String> {
    let token = storage::get_token();
    call("GET", "/api/admin/payments/schedule", None, token.as_deref())
        .await
        .decode()
}

pub async fn update_schedule(
    frequency: PayoutFrequency,
    minimum_amount: f64,
) -> Result<(), String> {
    let token = storage::get_token();
    let envelope = call(
        "PUT",
        "/api/admin/payments/schedule",
        Some(json!({ "frequency": frequency, "minimum_amount": minimum_amount })),
        token.as_deref(),
    )
    .await;
    if envelope.success {
        Ok(())
    } else {
        Err(envelope
            .error
            .unwrap_or_else(|| "request failed".to_string()))
    }
}

pub async fn fetch_fees() -> Result<FeeConfig, String> {
    let token = storage::get_token();
    call("GET", "/api/admin/payments/fees", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, String> {
    let token = storage::get_token();
    call(
        "GET",
        "/api/admin/payments/transactions",
        None,
        token.as_deref(),
    )
    .await
    .decode()
}

pub async fn fetch_analytics() -> Result<Vec<PaymentAnalytics>, String> {
    let token = storage::get_token();
    call(
        "GET",
        "/api/admin/payments/analytics",
        None,
        token.as_deref(),
    )
    .await
    .decode()
}
