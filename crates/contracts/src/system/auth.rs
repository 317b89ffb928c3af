use serde::{Deserialize, Serialize};

/// Access role of the signed-in user.
///
/// Determines which navigation tree and which pages are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    TenantOwner,
    #[default]
    RegularUser,
}

impl Role {
    /// Stable identifier used in storage and over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::TenantOwner => "tenant-owner",
            Role::RegularUser => "regular-user",
        }
    }

    /// Parse a stored role value. Unknown input falls back to the most
    /// restricted role rather than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "super-admin" => Role::SuperAdmin,
            "tenant-owner" => Role::TenantOwner,
            _ => Role::RegularUser,
        }
    }

    /// Display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::TenantOwner => "Tenant Owner",
            Role::RegularUser => "User",
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::SuperAdmin, Role::TenantOwner, Role::RegularUser]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    /// Tenant the user belongs to; absent for platform-level accounts.
    pub tenant: Option<String>,
}

impl UserInfo {
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_roundtrip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_falls_back_to_regular_user() {
        assert_eq!(Role::parse("root"), Role::RegularUser);
        assert_eq!(Role::parse(""), Role::RegularUser);
    }

    #[test]
    fn role_serializes_as_kebab_case() {
        let text = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(text, "\"super-admin\"");
        let back: Role = serde_json::from_str("\"tenant-owner\"").unwrap();
        assert_eq!(back, Role::TenantOwner);
    }
}
