//! Profile operations
//!
//! Avatar changes go through the session context. Password changes are
//! validated and acknowledged after a simulated delay; nothing is stored.

use crate::error::{AppError, Result, ValidationErrors};
use crate::session::{AuthContext, User, UserUpdate};
use crate::util::simulate_latency;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Change the avatar of the logged-in user
pub fn change_avatar<'a>(ctx: &'a mut AuthContext, url: &str) -> Result<&'a User> {
    if url.trim().is_empty() {
        let mut errors = ValidationErrors::new();
        errors.add("avatar", "An avatar must be selected");
        return Err(AppError::Validation(errors));
    }

    ctx.update(&UserUpdate::avatar(url))
}

/// Password change form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// Check every rule and report all violations at once
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.current_password.is_empty() {
            errors.add("current_password", "The current password is required");
        }

        if self.new_password.is_empty() {
            errors.add("new_password", "The new password is required");
        } else if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "new_password",
                format!("The password must be at least {MIN_PASSWORD_LEN} characters long"),
            );
        }

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "The new password must be confirmed");
        } else if self.new_password != self.confirm_password {
            errors.add("confirm_password", "The passwords do not match");
        }

        debug!(errors = errors.len(), "Validated password change form");
        errors.into_result()
    }
}

/// Validate a password change and acknowledge it after `delay`.
///
/// The form is cleared on success.
pub async fn change_password(form: &mut PasswordChangeForm, delay: Duration) -> Result<()> {
    form.validate()?;
    simulate_latency(delay).await;
    *form = PasswordChangeForm::default();
    info!("Password change accepted");
    Ok(())
}
