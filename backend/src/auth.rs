//! Authentication collaborator.
//!
//! A single shared password guards the whole dashboard. On success the
//! caller gets the display name to assert as the acting user; the domain
//! services trust that string for audit fields and never re-check it.

use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("senha incorreta")]
    InvalidPassword,
}

#[derive(Clone)]
pub struct AuthService {
    password: String,
    display_name: String,
}

impl AuthService {
    pub fn new(password: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            display_name: display_name.into(),
        }
    }

    /// Check the shared password, returning the display name on success.
    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        if password == self.password {
            info!("Login succeeded for {}", self.display_name);
            Ok(self.display_name.clone())
        } else {
            warn!("Login attempt with wrong password");
            Err(AuthError::InvalidPassword)
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new("admin", "Administrador")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_correct_password() {
        let auth = AuthService::default();
        assert_eq!(auth.login("admin").unwrap(), "Administrador");
    }

    #[test]
    fn test_login_with_wrong_password() {
        let auth = AuthService::default();
        assert_eq!(auth.login("nope"), Err(AuthError::InvalidPassword));
    }

    #[test]
    fn test_custom_credentials() {
        let auth = AuthService::new("s3cret", "Coordenação");
        assert_eq!(auth.login("s3cret").unwrap(), "Coordenação");
        assert!(auth.login("admin").is_err());
    }
}
