use serde_json::{json, Value};

use crate::shared::api::call;
use crate::system::auth::storage;

async fn submit(method: &str, path: &str, params: Value) -> Result<(), String> {
    let token = storage::get_token();
    let envelope = call(method, path, Some(params), token.as_deref()).await;
    if envelope.success {
        Ok(())
    } else {
        Err(envelope
            .error
            .unwrap_or_else(|| "request failed".to_string()))
    }
}

pub async fn update_personal(full_name: String, email: String) -> Result<(), String> {
    submit(
        "PUT",
        "/api/profile/personal",
        json!({ "full_name": full_name, "email": email }),
    )
    .await
}

pub async fn change_password(current: String, replacement: String) -> Result<(), String> {
    submit(
        "POST",
        "/api/profile/password",
        json!({ "current": current, "new": replacement }),
    )
    .await
}

pub async fn update_preferences(locale: String, email_digest: bool) -> Result<(), String> {
    submit(
        "PUT",
        "/api/profile/preferences",
        json!({ "locale": locale, "email_digest": email_digest }),
    )
    .await
}
