use contracts::domain::billing::{BillingOverview, ConnectStatus, Invoice, PaymentMethod};
use serde_json::json;

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_overview() -> Result<BillingOverview, String> {
    let token = storage::get_token();
    call("GET", "/api/billing/overview", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_payment_methods() -> Result<Vec<PaymentMethod>, String> {
    let token = storage::get_token();
    call("GET", "/api/billing/payment-methods", None, token.as_deref())
        .await
        .decode()
}

pub async fn set_default_payment_method(id: uuid::Uuid) -> Result<(), String> {
    let token = storage::get_token();
    let envelope = call(
        "POST",
        "/api/billing/payment-methods/default",
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

pub async fn fetch_invoices() -> Result<Vec<Invoice>, String> {
    let token = storage::get_token();
    call("GET", "/api/billing/invoices", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_connect_status() -> Result<ConnectStatus, String> {
    let token = storage::get_token();
    call("GET", "/api/billing/connect", None, token.as_deref())
        .await
        .decode()
}
