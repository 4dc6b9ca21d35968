//! KuHub access gate and customs declaration
//!
//! Two independent pieces of a warehouse management front end:
//!
//! - **Role-based access gate** deciding, for the current session and a
//!   requested path, whether to render the page, send the user to the login
//!   screen or bounce them to the dashboard.
//! - **Joint SAG and customs declaration** with conditional fields, blocking
//!   validation and a read-only review summary.
//!
//! ## Access Model
//!
//! ```text
//! no session -> /login
//! session, role in route roles (or Admin / Co-Admin) -> render
//! session, role not allowed -> /dashboard
//! ```
//!
//! A route with no required roles is open to any authenticated session.
//!
//! ## Example Configuration
//!
//! ```toml
//! [session]
//! storage_dir = "~/.local/share/kuhub"
//! storage_key = "kuhub_user"
//!
//! [auth]
//! login_delay_ms = 800
//!
//! [[routes]]
//! path = "/inventario"
//! label = "Inventario"
//! roles = ["Admin", "Co-Admin", "Encargado de Bodega"]
//! ```

pub mod access_control;
pub mod auth;
pub mod config;
pub mod declaration;
pub mod error;
pub mod profile;
pub mod session;
pub mod util;

// Re-export main types
pub use access_control::{AccessDecision, Navigation, Role, RouteTable, can_access};
pub use config::{AppConfig, load_config};
pub use declaration::{DeclarationForm, DeclarationSession};
pub use error::{AppError, Result};
pub use session::{AuthContext, User};
