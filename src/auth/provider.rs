//! Credential provider trait
//!
//! Verifies submitted credentials and produces the session record.

use crate::error::AuthError;
use crate::session::User;
// async_trait required for dyn-compatibility with Box<dyn CredentialProvider>
use async_trait::async_trait;

/// Credential provider trait
///
/// Implementations check a username/password pair and return the user
/// record to start a session with. The returned record never contains the
/// password.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Authenticate a username/password pair
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Get a description of the provider (for logging)
    fn provider_type(&self) -> &'static str;
}

/// Box type alias for credential providers
pub type BoxedCredentialProvider = Box<dyn CredentialProvider>;

/// Reject a login form with a blank field before consulting any provider
pub fn check_login_form(username: &str, password: &str) -> Result<(), AuthError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}
