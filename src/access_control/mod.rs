//! Access control module
//!
//! Role-based route guarding for the KuHub pages.
//!
//! ## Access Model
//!
//! Every guarded page carries a (possibly empty) list of required roles.
//! A navigation is decided as follows:
//!
//! 1. **No session** - redirect to `/login`
//! 2. **Empty requirement** - any authenticated session may view the page
//! 3. **Listed role** - the session's role appears in the requirement
//! 4. **Universal role** - `Admin` and `Co-Admin` pass every requirement
//! 5. Otherwise redirect to `/dashboard`
//!
//! Paths match ignoring case and a trailing `/`. A route also covers deeper
//! paths (`/inventario/123`) unless it is marked `exact`.
//!
//! ## Example
//!
//! ```toml
//! [[routes]]
//! path = "/inventario"
//! label = "Inventario"
//! roles = ["Admin", "Co-Admin", "Encargado de Bodega"]
//! ```

pub mod patterns;
pub mod resolver;
pub mod types;

pub use patterns::PathPattern;
pub use resolver::{
    DEFAULT_PATH, LOGIN_PATH, MenuEntry, Navigation, Route, RouteMatch, RouteTable, can_access,
};
pub use types::{AccessDecision, Role, role_satisfies};
