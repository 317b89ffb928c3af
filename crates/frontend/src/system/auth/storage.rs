//! localStorage-backed session and demo-mode flags.
//!
//! All access is read-then-write with no transactional guarantee; a single
//! tab is the only writer in the intended usage.

use contracts::system::auth::Role;
use web_sys::window;

const AUTH_TOKEN_KEY: &str = "auth_token";
const DEMO_MODE_KEY: &str = "demo_mode";
const DEMO_BANNER_HIDDEN_KEY: &str = "demo_banner_hidden";
const DEMO_ROLE_KEY: &str = "demo_user_role";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

pub fn demo_mode_enabled() -> bool {
    local_storage()
        .and_then(|s| s.get_item(DEMO_MODE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

pub fn set_demo_mode(enabled: bool) {
    if let Some(storage) = local_storage() {
        if enabled {
            let _ = storage.set_item(DEMO_MODE_KEY, "true");
        } else {
            let _ = storage.remove_item(DEMO_MODE_KEY);
        }
    }
}

pub fn demo_banner_hidden() -> bool {
    local_storage()
        .and_then(|s| s.get_item(DEMO_BANNER_HIDDEN_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

pub fn set_demo_banner_hidden(hidden: bool) {
    if let Some(storage) = local_storage() {
        if hidden {
            let _ = storage.set_item(DEMO_BANNER_HIDDEN_KEY, "true");
        } else {
            let _ = storage.remove_item(DEMO_BANNER_HIDDEN_KEY);
        }
    }
}

/// Stored demo role; unknown or missing values fall back to the most
/// restricted role.
pub fn demo_role() -> Role {
    local_storage()
        .and_then(|s| s.get_item(DEMO_ROLE_KEY).ok().flatten())
        .map(|v| Role::parse(&v))
        .unwrap_or_default()
}

pub fn save_demo_role(role: Role) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(DEMO_ROLE_KEY, role.as_str());
    }
}
