//! Authentication module
//!
//! Verifies login credentials against an allow-list. There is no backend:
//! the built-in list holds one test account per role, and configuration may
//! replace it.

pub mod allow_list;
pub mod provider;

pub use allow_list::StaticCredentials;
pub use provider::{BoxedCredentialProvider, CredentialProvider, check_login_form};

use crate::config::AuthConfig;
use tracing::info;

/// Create a credential provider from configuration
pub fn create_credential_provider(config: &AuthConfig) -> BoxedCredentialProvider {
    let provider = if config.users.is_empty() {
        StaticCredentials::kuhub()
    } else {
        StaticCredentials::new(&config.users)
    };

    info!(
        provider = provider.provider_type(),
        accounts = provider.len(),
        "Created credential provider"
    );

    Box::new(provider)
}
