//! Durable session storage
//!
//! A session store holds at most one serialized [`User`] under a fixed key.
//! Absence of the entry means "logged out".

use crate::error::SessionResult;
use crate::session::types::User;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Key-value store for the mirrored session
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any
    fn load(&self) -> SessionResult<Option<User>>;

    /// Replace the stored session
    fn save(&self, user: &User) -> SessionResult<()>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> SessionResult<()>;
}

/// Box type alias for session stores
pub type BoxedSessionStore = Box<dyn SessionStore>;

/// Session store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session for `key` inside `dir`
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> SessionResult<Option<User>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // A corrupt entry is treated the same as a missing one
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session");
                Ok(None)
            }
        }
    }

    fn save(&self, user: &User) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), user = %user.username, "Saved session");
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared session");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entry: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry is currently stored
    pub fn is_empty(&self) -> bool {
        self.entry.lock().map(|e| e.is_none()).unwrap_or(true)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> SessionResult<Option<User>> {
        let entry = self.entry.lock().unwrap_or_else(|p| p.into_inner());
        match entry.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, user: &User) -> SessionResult<()> {
        let json = serde_json::to_string(user)?;
        *self.entry.lock().unwrap_or_else(|p| p.into_inner()) = Some(json);
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        *self.entry.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}
