//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (KUHUB__*, e.g. KUHUB__SESSION__STORAGE_KEY)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::access_control::RouteTable;
use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::collections::HashSet;
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "kuhub.toml",
    ".kuhub.toml",
    "~/.config/kuhub/config.toml",
    "/etc/kuhub/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g., KUHUB__SESSION__STORAGE_KEY, KUHUB__AUTH__LOGIN_DELAY_MS
    builder = builder.add_source(
        Environment::with_prefix("KUHUB")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let key = &config.session.storage_key;
    if key.is_empty() {
        return Err(ConfigError::Missing {
            field: "session.storage_key".to_string(),
        });
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::Invalid {
            message: format!(
                "session.storage_key may only contain [A-Za-z0-9_-], got: {}",
                key
            ),
        });
    }

    if config.session.storage_dir.is_empty() {
        return Err(ConfigError::Missing {
            field: "session.storage_dir".to_string(),
        });
    }

    validate_users(config)?;

    // Compile once so bad route templates fail at load time
    RouteTable::new(&config.effective_routes())?;

    Ok(())
}

/// Validate the configured allow-list
fn validate_users(config: &AppConfig) -> Result<(), ConfigError> {
    let mut usernames = HashSet::new();
    let mut ids = HashSet::new();

    for (index, user) in config.auth.users.iter().enumerate() {
        if user.username.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: format!("auth.users[{}].username", index),
            });
        }

        if user.password.expose_secret().is_empty() {
            return Err(ConfigError::Missing {
                field: format!("auth.users[{}].password", index),
            });
        }

        if !usernames.insert(user.username.as_str()) {
            return Err(ConfigError::Invalid {
                message: format!("Duplicate username in auth.users: {}", user.username),
            });
        }

        if !ids.insert(user.id) {
            return Err(ConfigError::Invalid {
                message: format!("Duplicate user id in auth.users: {}", user.id),
            });
        }
    }

    Ok(())
}
