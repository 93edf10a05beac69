//! Authentication session state.
//!
//! The state only mirrors what the [`Authenticator`] reports. Failed logins
//! leave the current identity untouched; logging out always lands on
//! [`Identity::Anonymous`], even when the collaborator reports an error.

use tracing::{info, warn};

use crate::auth::{AuthError, Authenticator, Credentials};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub uid: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated(UserIdentity),
}

impl Identity {
    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Identity,
    revision: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> &Identity {
        &self.identity
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.identity.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    /// Number of identity changes since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adopt an identity reported by the collaborator (e.g. a restored
    /// session). Returns whether anything changed.
    pub fn observe(&mut self, identity: Identity) -> bool {
        if self.identity == identity {
            return false;
        }
        match &identity {
            Identity::Authenticated(user) => info!(uid = %user.uid, "session authenticated"),
            Identity::Anonymous => info!("session anonymous"),
        }
        self.identity = identity;
        self.revision += 1;
        true
    }

    /// Record the outcome of a login attempt.
    pub fn record_login(
        &mut self,
        outcome: Result<UserIdentity, AuthError>,
    ) -> Result<(), AuthError> {
        match outcome {
            Ok(user) => {
                self.observe(Identity::Authenticated(user));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "login rejected");
                Err(err)
            }
        }
    }

    pub fn log_out(&mut self) {
        self.observe(Identity::Anonymous);
    }
}

/// Somewhere a [`SessionState`] lives and can be updated in place.
pub trait SessionStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R;
}

impl SessionStore for SessionState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(self)
    }
}

/// Ask `auth` to log in and record the outcome in `store`.
pub async fn log_in<S: SessionStore>(
    store: &mut S,
    auth: &dyn Authenticator,
    credentials: &Credentials,
) -> Result<UserIdentity, AuthError> {
    let outcome = auth.log_in(credentials).await;
    store.update(|session| session.record_login(outcome.clone()))?;
    outcome
}

/// Reset `store` to anonymous, then tell `auth`.
pub async fn log_out<S: SessionStore>(store: &mut S, auth: &dyn Authenticator) {
    store.update(SessionState::log_out);
    if let Err(err) = auth.log_out().await {
        warn!(error = %err, "collaborator failed to end session");
    }
}
