use contracts::domain::billing::PaymentMethod;
use contracts::domain::payments::{ServiceSubscription, Transaction, UserPaymentOverview};
use serde_json::json;

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_overview() -> Result<UserPaymentOverview, String> {
    let token = storage::get_token();
    call("GET", "/api/user/payments/overview", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_methods() -> Result<Vec<PaymentMethod>, String> {
    let token = storage::get_token();
    call("GET", "/api/user/payments/methods", None, token.as_deref())
        .await
        .decode()
}

pub async fn set_default_method(id: uuid::Uuid) -> Result<(), String> {
    let token = storage::get_token();
    let envelope = call(
        "POST",
        "/api/user/payments/methods/default",
        Some(json!({ "id": id })),
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

pub async fn fetch_services() -> Result<Vec<ServiceSubscription>, String> {
    let token = storage::get_token();
    call("GET", "/api/user/payments/services", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_history() -> Result<Vec<Transaction>, String> {
    let token = storage::get_token();
    call("GET", "/api/user/payments/history", None, token.as_deref())
        .await
        .decode()
}
