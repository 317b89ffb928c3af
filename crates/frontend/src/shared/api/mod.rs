//! Single entry point for backend communication.
//!
//! Every view goes through [`call`]. In demo mode the call is answered
//! synchronously from the fixture table; otherwise it is an HTTP request
//! against the gateway backend. Both paths produce the same envelope, so
//! components never branch on the operating mode.

pub mod mock;

use contracts::shared::api::ApiEnvelope;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

pub async fn call(
    method: &str,
    path: &str,
    params: Option<Value>,
    token: Option<&str>,
) -> ApiEnvelope {
    if storage::demo_mode_enabled() {
        return mock::respond(method, path);
    }
    match http_call(method, path, params, token).await {
        Ok(envelope) => envelope,
        Err(e) => ApiEnvelope::err(e),
    }
}

async fn http_call(
    method: &str,
    path: &str,
    params: Option<Value>,
    token: Option<&str>,
) -> Result<ApiEnvelope, String> {
    let url = match (&params, method) {
        (Some(params), "GET") => format!("{}?{}", api_url(path), query_string(params)),
        _ => api_url(path),
    };

    let mut builder = match method {
        "GET" => Request::get(&url),
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "DELETE" => Request::delete(&url),
        other => return Err(format!("Unsupported method: {}", other)),
    };
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = match (params, method) {
        (Some(body), m) if m != "GET" => builder
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await,
        _ => builder.send().await,
    }
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Flatten a JSON object into an encoded query string. Non-object params
/// produce an empty string.
fn query_string(params: &Value) -> String {
    let Value::Object(map) = params else {
        return String::new();
    };
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_string_encodes_values() {
        let qs = query_string(&json!({"period": "2025-06", "q": "a b"}));
        assert!(qs.contains("period=2025-06"));
        assert!(qs.contains("q=a%20b"));
    }

    #[test]
    fn query_string_stringifies_non_string_values() {
        assert_eq!(query_string(&json!({"limit": 50})), "limit=50");
    }

    #[test]
    fn non_object_params_yield_empty_query() {
        assert_eq!(query_string(&json!([1, 2, 3])), "");
    }
}
