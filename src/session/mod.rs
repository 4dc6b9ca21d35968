//! Session module
//!
//! The session is created at login, mirrored to a durable store so it
//! survives restarts, and destroyed on logout.

pub mod context;
pub mod store;
pub mod types;

pub use context::AuthContext;
pub use store::{BoxedSessionStore, FileSessionStore, MemorySessionStore, SessionStore};
pub use types::{User, UserUpdate};
