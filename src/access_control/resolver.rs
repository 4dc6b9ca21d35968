//! Route resolution
//!
//! Maps a request path to a navigation outcome:
//! 1. `/login` always renders the login page
//! 2. `/` redirects to the default page or to login
//! 3. A path matching a route descriptor goes through the access gate
//! 4. Anything else is not found

use crate::access_control::patterns::{PathPattern, normalize};
use crate::access_control::types::{AccessDecision, Role, role_satisfies};
use crate::config::{RouteConfig, default_routes};
use crate::error::ConfigError;
use crate::session::User;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Public login page
pub const LOGIN_PATH: &str = "/login";

/// Page users land on after login or when a route denies their role
pub const DEFAULT_PATH: &str = "/dashboard";

/// Decide whether a session may view a route.
///
/// Re-evaluated on every navigation; nothing is cached.
pub fn can_access(session: Option<&User>, required_roles: &[Role]) -> AccessDecision {
    let Some(user) = session else {
        return AccessDecision::RedirectToLogin;
    };

    if role_satisfies(user.role, required_roles) {
        AccessDecision::Allow
    } else {
        AccessDecision::RedirectToDefault
    }
}

/// Compiled route descriptor
#[derive(Debug, Clone)]
pub struct Route {
    pattern: PathPattern,
    label: String,
    required_roles: Vec<Role>,
    in_menu: bool,
}

impl Route {
    pub fn path(&self) -> &str {
        self.pattern.source()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    pub fn in_menu(&self) -> bool {
        self.in_menu
    }
}

/// A route that matched a request path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Route template (e.g. `/producto/:id/movimientos`)
    pub route: String,
    pub label: String,
    /// Captured `:param` segments
    pub params: HashMap<String, String>,
}

/// Result of navigating to a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Navigation {
    /// Render the public login page
    Login,
    /// Render a guarded page
    Render(RouteMatch),
    /// Redirect to another path
    Redirect { to: String },
    /// No route matches
    NotFound,
}

/// Navigation menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub path: String,
    pub label: String,
}

/// Static route table
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compile a route table from descriptors
    pub fn new(routes: &[RouteConfig]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(routes.len());

        for route in routes {
            let path = normalize(&route.path);
            if path.eq_ignore_ascii_case(LOGIN_PATH) || path == "/" {
                return Err(ConfigError::Invalid {
                    message: format!("Route '{}' is reserved", route.path),
                });
            }
            if compiled
                .iter()
                .any(|r: &Route| normalize(r.path()).eq_ignore_ascii_case(path))
            {
                return Err(ConfigError::Invalid {
                    message: format!("Duplicate route: {}", route.path),
                });
            }

            compiled.push(Route {
                pattern: PathPattern::new(&route.path, route.exact)?,
                label: route.label.clone(),
                required_roles: route.roles.clone(),
                in_menu: route.menu,
            });
        }

        Ok(Self { routes: compiled })
    }

    /// The KuHub page set
    pub fn kuhub() -> Result<Self, ConfigError> {
        Self::new(&default_routes())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching a request path
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.pattern.matches(path))
    }

    /// Resolve a navigation for the given session.
    ///
    /// `/login` and `/` match exactly, ignoring case and a trailing `/`.
    pub fn navigate(&self, session: Option<&User>, path: &str) -> Navigation {
        let normalized = normalize(path);
        if normalized.eq_ignore_ascii_case(LOGIN_PATH) {
            return Navigation::Login;
        }

        if normalized == "/" || normalized.is_empty() {
            let to = if session.is_some() {
                DEFAULT_PATH
            } else {
                LOGIN_PATH
            };
            return Navigation::Redirect { to: to.to_string() };
        }

        let Some(route) = self.find(path) else {
            debug!(path, "No route matched");
            return Navigation::NotFound;
        };

        let decision = can_access(session, &route.required_roles);
        debug!(
            path,
            route = route.path(),
            role = ?session.map(|u| u.role),
            decision = %decision,
            "Checked route access"
        );

        match decision {
            AccessDecision::Allow => Navigation::Render(RouteMatch {
                route: route.path().to_string(),
                label: route.label.clone(),
                params: route.pattern.captures(path).unwrap_or_default(),
            }),
            AccessDecision::RedirectToLogin => Navigation::Redirect {
                to: LOGIN_PATH.to_string(),
            },
            AccessDecision::RedirectToDefault => Navigation::Redirect {
                to: DEFAULT_PATH.to_string(),
            },
        }
    }

    /// Menu entries visible to the session, in table order
    pub fn menu(&self, session: Option<&User>) -> Vec<MenuEntry> {
        self.routes
            .iter()
            .filter(|r| r.in_menu)
            .filter(|r| can_access(session, &r.required_roles).is_allowed())
            .inspect(|r| trace!(route = r.path(), "Menu entry visible"))
            .map(|r| MenuEntry {
                path: r.path().to_string(),
                label: r.label.clone(),
            })
            .collect()
    }
}
