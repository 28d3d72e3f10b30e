//! # Session Gate
//!
//! A single static credential pair guards the mutating operations. There is no
//! ambient "logged in" flag: callers hold a [`Session`] value and hand it to
//! every operation that changes the collection.

use crate::error::{RosterError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "anggun";
pub const DEFAULT_PASSWORD: &str = "123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
        }
    }

    /// Exact match on both fields. The error does not say which one was wrong.
    pub fn login(credentials: &Credentials, username: &str, password: &str) -> Result<Self> {
        if credentials.matches(username, password) {
            log::info!("login ok for user {}", username);
            Ok(Self {
                authenticated: true,
            })
        } else {
            log::warn!("login rejected");
            Err(RosterError::AuthenticationFailed)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn require(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(RosterError::Unauthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_default_pair() {
        let session = Session::login(&Credentials::default(), "anggun", "123").unwrap();
        assert!(session.is_authenticated());
        assert!(session.require().is_ok());
    }

    #[test]
    fn rejects_anything_else() {
        let creds = Credentials::default();
        for (user, pass) in [
            ("anggun", "1234"),
            ("Anggun", "123"),
            ("anggun ", "123"),
            ("", ""),
        ] {
            assert!(matches!(
                Session::login(&creds, user, pass),
                Err(RosterError::AuthenticationFailed)
            ));
        }
    }

    #[test]
    fn anonymous_session_is_refused() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.require(),
            Err(RosterError::Unauthenticated)
        ));
    }

    #[test]
    fn custom_credentials_replace_defaults() {
        let creds = Credentials::new("admin", "s3cret");
        assert!(Session::login(&creds, "admin", "s3cret").is_ok());
        assert!(Session::login(&creds, "anggun", "123").is_err());
    }
}
