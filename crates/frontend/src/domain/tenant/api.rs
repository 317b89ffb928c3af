use contracts::domain::tenant::{TenantBranding, TenantProfile, TenantSettings};
use serde_json::json;

use crate::shared::api::call;
use crate::system::auth::storage;

pub async fn fetch_profile() -> Result<TenantProfile, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/profile", None, token.as_deref())
        .await
        .decode()
}

pub async fn update_profile(name: String, contact_email: String) -> Result<(), String> {
    let token = storage::get_token();
    let envelope = call(
        "PUT",
        "/api/tenant/profile",
        Some(json!({ "name": name, "contact_email": contact_email })),
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

pub async fn fetch_settings() -> Result<TenantSettings, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/settings", None, token.as_deref())
        .await
        .decode()
}

pub async fn fetch_branding() -> Result<TenantBranding, String> {
    let token = storage::get_token();
    call("GET", "/api/tenant/branding", None, token.as_deref())
        .await
        .decode()
}
