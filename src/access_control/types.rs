//! Access control types
//!
//! Core types used by the access control gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission tier attached to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Co-Admin")]
    CoAdmin,
    #[serde(rename = "Profesor A Cargo")]
    ProfesorACargo,
    #[serde(rename = "Encargado de Bodega")]
    EncargadoDeBodega,
    #[serde(rename = "Asistente de Bodega")]
    AsistenteDeBodega,
    #[serde(rename = "Gestor de Pedidos")]
    GestorDePedidos,
}

impl Role {
    /// Get the role name as displayed to users
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::CoAdmin => "Co-Admin",
            Role::ProfesorACargo => "Profesor A Cargo",
            Role::EncargadoDeBodega => "Encargado de Bodega",
            Role::AsistenteDeBodega => "Asistente de Bodega",
            Role::GestorDePedidos => "Gestor de Pedidos",
        }
    }

    /// Try to parse a role from its display name
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "Co-Admin" => Some(Role::CoAdmin),
            "Profesor A Cargo" => Some(Role::ProfesorACargo),
            "Encargado de Bodega" => Some(Role::EncargadoDeBodega),
            "Asistente de Bodega" => Some(Role::AsistenteDeBodega),
            "Gestor de Pedidos" => Some(Role::GestorDePedidos),
            _ => None,
        }
    }

    /// Whether this role passes every route requirement
    pub const fn has_universal_access(&self) -> bool {
        match self {
            Role::Admin | Role::CoAdmin => true,
            Role::ProfesorACargo
            | Role::EncargadoDeBodega
            | Role::AsistenteDeBodega
            | Role::GestorDePedidos => false,
        }
    }

    /// Get all roles
    pub fn all() -> &'static [Role] {
        &[
            Role::Admin,
            Role::CoAdmin,
            Role::ProfesorACargo,
            Role::EncargadoDeBodega,
            Role::AsistenteDeBodega,
            Role::GestorDePedidos,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the access gate for one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the requested page
    Allow,
    /// No active session
    RedirectToLogin,
    /// Logged in but the role does not satisfy the route
    RedirectToDefault,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessDecision::Allow => "allow",
            AccessDecision::RedirectToLogin => "redirect_to_login",
            AccessDecision::RedirectToDefault => "redirect_to_default",
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a role satisfies a route requirement.
///
/// An empty requirement admits every role; Admin and Co-Admin are admitted
/// regardless of the listed roles.
pub fn role_satisfies(role: Role, required_roles: &[Role]) -> bool {
    required_roles.is_empty() || required_roles.contains(&role) || role.has_universal_access()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in Role::all() {
            let parsed = Role::try_parse(role.as_str()).unwrap();
            assert_eq!(*role, parsed);
        }
    }

    #[test]
    fn test_role_serde_uses_display_names() {
        let json = serde_json::to_string(&Role::ProfesorACargo).unwrap();
        assert_eq!(json, "\"Profesor A Cargo\"");

        let role: Role = serde_json::from_str("\"Co-Admin\"").unwrap();
        assert_eq!(role, Role::CoAdmin);
    }

    #[test]
    fn test_unknown_role() {
        assert!(Role::try_parse("admin").is_none());
        assert!(serde_json::from_str::<Role>("\"Root\"").is_err());
    }

    #[test]
    fn test_universal_roles() {
        let universal: Vec<_> = Role::all()
            .iter()
            .filter(|r| r.has_universal_access())
            .collect();
        assert_eq!(universal, vec![&Role::Admin, &Role::CoAdmin]);
    }

    #[test]
    fn test_role_satisfies() {
        assert!(role_satisfies(Role::GestorDePedidos, &[]));
        assert!(role_satisfies(
            Role::GestorDePedidos,
            &[Role::GestorDePedidos]
        ));
        assert!(!role_satisfies(Role::GestorDePedidos, &[Role::Admin]));
        assert!(role_satisfies(Role::CoAdmin, &[Role::Admin]));
    }
}
