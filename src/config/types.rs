//! Configuration types for kuhub
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use crate::access_control::Role;
use crate::util::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Session persistence settings
    pub session: SessionConfig,

    /// Login and credential settings
    pub auth: AuthConfig,

    /// Guarded pages (defaults to the KuHub page set)
    pub routes: Vec<RouteConfig>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Configured routes, or the built-in table when none are configured
    pub fn effective_routes(&self) -> Vec<RouteConfig> {
        if self.routes.is_empty() {
            default_routes()
        } else {
            self.routes.clone()
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the session document (`~` is expanded)
    pub storage_dir: String,

    /// Key the session is stored under
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let storage_dir = dirs::data_local_dir()
            .map(|d| d.join("kuhub"))
            .unwrap_or_else(|| PathBuf::from(".kuhub"));

        Self {
            storage_dir: storage_dir.to_string_lossy().into_owned(),
            storage_key: "kuhub_user".to_string(),
        }
    }
}

impl SessionConfig {
    /// Storage directory with `~` expanded
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.storage_dir).as_ref())
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated latency before a login attempt is answered
    pub login_delay_ms: u64,

    /// Simulated latency before a password change is acknowledged
    pub password_change_delay_ms: u64,

    /// Replaces the built-in allow-list when non-empty
    pub users: Vec<UserCredentialConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 800,
            password_change_delay_ms: 1000,
            users: Vec::new(),
        }
    }
}

/// One allow-list entry
#[derive(Debug, Clone, Deserialize)]
pub struct UserCredentialConfig {
    pub id: u32,
    pub username: String,
    pub password: SecretString,
    /// Display name
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: String,
}

/// Guarded page descriptor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    /// Route template, `:name` segments match one path segment
    pub path: String,

    /// Menu label
    pub label: String,

    /// Roles admitted to the page (empty admits every session)
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Whether the page appears in the navigation menu
    #[serde(default = "default_true")]
    pub menu: bool,

    /// Match only the template itself; otherwise deeper paths match too
    #[serde(default)]
    pub exact: bool,
}

fn default_true() -> bool {
    true
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, label: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            roles,
            menu: true,
            exact: false,
        }
    }

    /// Match only the template, not paths below it
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Keep the page out of the navigation menu
    pub fn hidden(mut self) -> Self {
        self.menu = false;
        self
    }
}

/// The KuHub page set
pub fn default_routes() -> Vec<RouteConfig> {
    use Role::*;

    vec![
        RouteConfig::new("/dashboard", "Dashboard", vec![]).exact(),
        RouteConfig::new(
            "/solicitud",
            "Solicitud",
            vec![ProfesorACargo, Admin, CoAdmin],
        ),
        RouteConfig::new("/ramos-admin", "Asignaturas", vec![Admin, CoAdmin]),
        RouteConfig::new(
            "/inventario",
            "Inventario",
            vec![Admin, CoAdmin, EncargadoDeBodega],
        ),
        RouteConfig::new(
            "/gestion-pedidos",
            "Gestión Pedidos",
            vec![Admin, CoAdmin, GestorDePedidos],
        ),
        RouteConfig::new(
            "/conglomerado-pedidos",
            "Conglomerado",
            vec![Admin, CoAdmin, GestorDePedidos],
        ),
        RouteConfig::new(
            "/gestion-proveedores",
            "Proveedores",
            vec![Admin, CoAdmin, GestorDePedidos],
        ),
        RouteConfig::new(
            "/bodega-transito",
            "Bodega Tránsito",
            vec![Admin, CoAdmin, AsistenteDeBodega],
        ),
        RouteConfig::new("/gestion-roles", "Gestión Roles", vec![Admin]),
        RouteConfig::new(
            "/gestion-recetas",
            "Recetas",
            vec![Admin, CoAdmin, ProfesorACargo],
        ),
        RouteConfig::new("/perfil", "Mi Perfil", vec![]).hidden(),
        RouteConfig::new(
            "/producto/:id/movimientos",
            "Movimientos",
            vec![Admin, CoAdmin, EncargadoDeBodega],
        )
        .hidden(),
    ]
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
