//! Session User Model

use serde::{Deserialize, Serialize};

/// Authenticated user flag, persisted verbatim under `auth_user`
///
/// Presence of this entry in the store IS the authenticated state; no
/// password or token is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    /// Display name shown in the dashboard header
    pub name: String,
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_wire_layout() {
        let user = AuthUser {
            username: "admin".to_string(),
            name: "admin".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["username"], "admin");
        assert_eq!(value["name"], "admin");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
