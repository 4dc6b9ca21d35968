//! Configuration module
//!
//! Session storage, the login allow-list, the route table and logging are
//! read from a TOML file and `KUHUB__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::*;
