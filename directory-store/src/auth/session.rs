//! Session Service
//!
//! Handles login, logout and the current-user lookup

use shared::models::AuthUser;

use crate::db::storage::AppStorage;
use crate::utils::{AppError, AppResult};

/// Session state over the shared store
///
/// The persisted `auth_user` entry is the only evidence of "logged in";
/// its presence is the whole contract.
#[derive(Clone)]
pub struct SessionService {
    storage: AppStorage,
}

impl SessionService {
    pub fn new(storage: AppStorage) -> Self {
        Self { storage }
    }

    /// Authenticate and persist the session flag
    ///
    /// Accepts any non-empty username/password pair; there is deliberately
    /// no credential policy behind this. Nothing is persisted on failure.
    pub fn login(&self, username: &str, password: &str) -> AppResult<AuthUser> {
        if username.is_empty() || password.is_empty() {
            tracing::warn!(username = %username, "Login failed - empty credentials");
            return Err(AppError::invalid_credentials());
        }

        let user = AuthUser {
            username: username.to_string(),
            name: username.to_string(),
        };
        self.storage.save_auth_user(&user)?;

        tracing::info!(username = %user.username, "User logged in");
        Ok(user)
    }

    /// Remove the session flag; idempotent
    pub fn logout(&self) -> AppResult<()> {
        self.storage.clear_auth_user()?;
        tracing::info!("User logged out");
        Ok(())
    }

    /// The session flag's value, if anyone is logged in
    pub fn current_user(&self) -> AppResult<Option<AuthUser>> {
        Ok(self.storage.load_auth_user()?)
    }

    /// True iff a session flag is present
    pub fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.storage.load_auth_user()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sessions() -> SessionService {
        SessionService::new(AppStorage::open_in_memory().unwrap())
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let sessions = test_sessions();

        assert!(sessions.login("", "x").is_err());
        assert!(sessions.login("admin", "").is_err());
        assert!(sessions.login("", "").is_err());

        // nothing persisted on failure
        assert!(!sessions.is_authenticated().unwrap());
        assert!(sessions.current_user().unwrap().is_none());
    }

    #[test]
    fn test_login_accepts_any_non_empty_credentials() {
        let sessions = test_sessions();

        let user = sessions.login("admin", "admin123").unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.name, "admin");

        assert!(sessions.is_authenticated().unwrap());
        assert_eq!(sessions.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let sessions = test_sessions();
        sessions.login("admin", "admin123").unwrap();

        sessions.logout().unwrap();
        assert!(!sessions.is_authenticated().unwrap());

        // logging out while logged out is fine
        sessions.logout().unwrap();
        assert!(!sessions.is_authenticated().unwrap());
    }

    #[test]
    fn test_relogin_replaces_session_flag() {
        let sessions = test_sessions();
        sessions.login("admin", "admin123").unwrap();
        sessions.login("manager", "secret").unwrap();

        let user = sessions.current_user().unwrap().unwrap();
        assert_eq!(user.username, "manager");
    }
}
