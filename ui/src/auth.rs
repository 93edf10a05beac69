//! Authentication collaborator seam.
//!
//! The session container never validates credentials itself; it hands them
//! to an [`Authenticator`] and records whatever identity comes back.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::state::UserIdentity;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait(?Send)]
pub trait Authenticator {
    async fn log_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;
    async fn log_out(&self) -> Result<(), AuthError>;
}

struct Account {
    uid: String,
    email: String,
    password: String,
}

/// Fixed account table held in memory.
#[derive(Default)]
pub struct MemoryAuthenticator {
    accounts: HashMap<String, Account>,
}

impl MemoryAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account; emails match case-insensitively.
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        let email = email.trim();
        self.accounts.insert(
            email.to_lowercase(),
            Account {
                uid: Uuid::new_v4().simple().to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait(?Send)]
impl Authenticator for MemoryAuthenticator {
    async fn log_in(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        match self.accounts.get(&credentials.email.trim().to_lowercase()) {
            Some(account) if account.password == credentials.password => Ok(UserIdentity {
                uid: account.uid.clone(),
                email: account.email.clone(),
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn log_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn known_account_logs_in() {
        let auth = MemoryAuthenticator::new().with_account("Officer@umb.edu", "hunter2");
        let user = block_on(auth.log_in(&Credentials::new(" officer@UMB.edu", "hunter2"))).unwrap();
        assert_eq!(user.email, "Officer@umb.edu");
        assert!(!user.uid.is_empty());
    }

    #[test]
    fn uid_is_stable_per_account() {
        let auth = MemoryAuthenticator::new().with_account("a@umb.edu", "pw");
        let creds = Credentials::new("a@umb.edu", "pw");
        let first = block_on(auth.log_in(&creds)).unwrap();
        let second = block_on(auth.log_in(&creds)).unwrap();
        assert_eq!(first.uid, second.uid);
    }

    #[test]
    fn wrong_password_and_unknown_email_are_rejected() {
        let auth = MemoryAuthenticator::new().with_account("a@umb.edu", "pw");
        assert_eq!(
            block_on(auth.log_in(&Credentials::new("a@umb.edu", "nope"))),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            block_on(auth.log_in(&Credentials::new("b@umb.edu", "pw"))),
            Err(AuthError::InvalidCredentials)
        );
    }
}
