//! Session record types

use crate::access_control::Role;
use serde::{Deserialize, Serialize};

/// The logged-in user
///
/// This is the record mirrored to the session store. It never carries the
/// password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    /// Display name
    pub name: String,
    pub role: Role,
    /// Avatar image reference
    #[serde(default)]
    pub avatar: String,
}

/// Partial update applied to the current session
///
/// Only the supplied fields change; identity and role are fixed at login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl UserUpdate {
    pub fn avatar(url: impl Into<String>) -> Self {
        Self {
            avatar: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }

    /// Merge into a user record
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
    }
}
