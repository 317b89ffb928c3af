//! Uniform API response envelope.
//!
//! Every endpoint — real backend or demo-mode fixture — answers with the same
//! `{success, data?, error?}` shape, so view components never branch on the
//! operating mode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiEnvelope {
    /// Successful response carrying a payload.
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying an error message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Deserialize the payload into a concrete DTO.
    ///
    /// Fails with the envelope's own error message when `success` is false,
    /// and with a decode error when the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .error
                .clone()
                .unwrap_or_else(|| "request failed".to_string()));
        }
        match &self.data {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| format!("unexpected response shape: {}", e)),
            None => Err("response carried no data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_omits_error_field() {
        let env = ApiEnvelope::ok(json!({"value": 1}));
        let text = serde_json::to_string(&env).unwrap();
        assert!(text.contains("\"success\":true"));
        assert!(!text.contains("error"));
    }

    #[test]
    fn err_envelope_omits_data_field() {
        let env = ApiEnvelope::err("nope");
        let text = serde_json::to_string(&env).unwrap();
        assert!(text.contains("\"success\":false"));
        assert!(!text.contains("data"));
    }

    #[test]
    fn decode_success_payload() {
        #[derive(serde::Deserialize)]
        struct Payload {
            value: i64,
        }
        let env = ApiEnvelope::ok(json!({"value": 42}));
        let payload: Payload = env.decode().unwrap();
        assert_eq!(payload.value, 42);
    }

    #[test]
    fn decode_failure_returns_error_message() {
        let env = ApiEnvelope::err("billing service unavailable");
        let result = env.decode::<serde_json::Value>();
        assert_eq!(result.unwrap_err(), "billing service unavailable");
    }

    #[test]
    fn envelope_roundtrip() {
        let env = ApiEnvelope::ok(json!({"items": [1, 2, 3]}));
        let back: ApiEnvelope =
            serde_json::from_str(&serde_json::to_string(&env).unwrap()).unwrap();
        assert_eq!(back, env);
    }
}
