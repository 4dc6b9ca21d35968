//! Authentication context
//!
//! Owns the current session and is the only writer of it. Consumers receive
//! the context explicitly; reads go through [`AuthContext::current`] and
//! writes through login, logout and update.

use crate::access_control::{Role, role_satisfies};
use crate::auth::{BoxedCredentialProvider, check_login_form};
use crate::error::{AppError, Result, SessionError};
use crate::session::store::BoxedSessionStore;
use crate::session::types::{User, UserUpdate};
use crate::util::simulate_latency;
use std::time::Duration;
use tracing::{info, warn};

/// Session context
pub struct AuthContext {
    credentials: BoxedCredentialProvider,
    store: BoxedSessionStore,
    current: Option<User>,
    login_delay: Duration,
}

impl AuthContext {
    /// Create a logged-out context
    pub fn new(credentials: BoxedCredentialProvider, store: BoxedSessionStore) -> Self {
        Self {
            credentials,
            store,
            current: None,
            login_delay: Duration::ZERO,
        }
    }

    /// Set the simulated latency applied to every login attempt
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Pick up a session mirrored by an earlier run.
    ///
    /// Returns the restored user, if any.
    pub fn restore(&mut self) -> Result<Option<&User>> {
        self.current = self.store.load()?;
        if let Some(user) = &self.current {
            info!(user = %user.username, role = %user.role, "Restored session");
        }
        Ok(self.current.as_ref())
    }

    /// Log in with a username and password.
    ///
    /// Blank fields are rejected before the simulated latency; wrong
    /// credentials leave any existing session untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&User> {
        check_login_form(username, password)?;

        simulate_latency(self.login_delay).await;

        let user = self
            .credentials
            .authenticate(username, password)
            .await
            .inspect_err(|e| warn!(username, error = %e, "Login failed"))?;

        self.store.save(&user)?;
        info!(user = %user.username, role = %user.role, "Logged in");
        Ok(self.current.insert(user))
    }

    /// End the session and remove the stored copy
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(user) = self.current.take() {
            info!(user = %user.username, "Logged out");
        }
        Ok(())
    }

    /// Merge profile changes into the current session
    pub fn update(&mut self, update: &UserUpdate) -> Result<&User> {
        let Some(current) = self.current.as_ref() else {
            return Err(AppError::Session(SessionError::NotLoggedIn));
        };

        // The in-memory session only changes once the store has the new copy
        let mut user = current.clone();
        update.apply_to(&mut user);
        self.store.save(&user)?;
        info!(user = %user.username, "Updated session");
        Ok(self.current.insert(user))
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Check the current role against a set of roles.
    ///
    /// Same rule as the route gate; false when logged out.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| role_satisfies(u.role, roles))
    }
}
