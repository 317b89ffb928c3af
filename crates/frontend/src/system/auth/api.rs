use contracts::shared::api::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, Role, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login against the real backend.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    envelope.decode::<LoginResponse>()
}

/// Validate a persisted token by fetching the current user.
pub async fn current_user(token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Session check failed: {}", response.status()));
    }

    let envelope = response
        .json::<ApiEnvelope>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    envelope.decode::<UserInfo>()
}

/// Provision a demo session locally: a fake token plus canned user info.
/// No network involved.
pub fn demo_login(role: Role) -> LoginResponse {
    LoginResponse {
        token: format!("demo-{}", uuid::Uuid::new_v4()),
        user: demo_user(role),
    }
}

/// Canned demo account per role.
pub fn demo_user(role: Role) -> UserInfo {
    match role {
        Role::SuperAdmin => UserInfo {
            id: "6b1f6c2e-0f68-4c3e-9f1a-2a6d4f8b9c01".to_string(),
            username: "ava.ops".to_string(),
            full_name: Some("Ava Sandoval".to_string()),
            email: Some("ava@platform-gateway.test".to_string()),
            role,
            tenant: None,
        },
        Role::TenantOwner => UserInfo {
            id: "9d2c7a41-53be-4e9b-8a70-1c5f0e3d6b22".to_string(),
            username: "nora.owner".to_string(),
            full_name: Some("Nora Whitfield".to_string()),
            email: Some("nora@acme.test".to_string()),
            role,
            tenant: Some("acme".to_string()),
        },
        Role::RegularUser => UserInfo {
            id: "2f8e5b90-7d14-4a6c-b3e2-8c1a9f0d4e33".to_string(),
            username: "sam.chen".to_string(),
            full_name: Some("Sam Chen".to_string()),
            email: Some("sam@acme.test".to_string()),
            role,
            tenant: Some("acme".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_users_carry_their_role() {
        for role in Role::all() {
            assert_eq!(demo_user(role).role, role);
        }
    }

    #[test]
    fn platform_admin_has_no_tenant() {
        assert_eq!(demo_user(Role::SuperAdmin).tenant, None);
        assert!(demo_user(Role::TenantOwner).tenant.is_some());
    }
}
