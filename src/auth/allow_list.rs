//! Static credential allow-list
//!
//! Matches submitted credentials against a fixed list of users.

use crate::access_control::Role;
use crate::auth::provider::CredentialProvider;
use crate::config::UserCredentialConfig;
use crate::error::AuthError;
use crate::session::User;
use crate::util::SecretString;
use async_trait::async_trait;
use tracing::debug;

const AVATAR_BASE: &str = "https://img.heroui.chat/image/avatar?w=200&h=200&u=";

/// One allow-listed account
#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: SecretString,
}

/// Allow-list credential provider
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    accounts: Vec<Account>,
}

impl StaticCredentials {
    /// Build from configured users
    pub fn new(users: &[UserCredentialConfig]) -> Self {
        let accounts = users
            .iter()
            .map(|u| Account {
                user: User {
                    id: u.id,
                    username: u.username.clone(),
                    name: u.name.clone(),
                    role: u.role,
                    avatar: u.avatar.clone(),
                },
                password: u.password.clone(),
            })
            .collect();

        Self { accounts }
    }

    /// The KuHub test accounts, one per role
    pub fn kuhub() -> Self {
        let entries: [(u32, &str, &str, Role); 6] = [
            (1, "admin", "Administrador", Role::Admin),
            (2, "coadmin", "Barbara", Role::CoAdmin),
            (3, "profesor", "Profesor", Role::ProfesorACargo),
            (4, "bodega", "Encargado Bodega", Role::EncargadoDeBodega),
            (5, "asistente", "Asistente Bodega", Role::AsistenteDeBodega),
            (6, "gestor", "Gestor Pedidos", Role::GestorDePedidos),
        ];

        let accounts = entries
            .into_iter()
            .map(|(id, username, name, role)| Account {
                user: User {
                    id,
                    username: username.to_string(),
                    name: name.to_string(),
                    role,
                    avatar: format!("{AVATAR_BASE}{id}"),
                },
                // Test accounts use the username as password
                password: SecretString::new(username),
            })
            .collect();

        Self { accounts }
    }

    /// Number of allow-listed accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.username == username && a.password.matches(password));

        match account {
            Some(account) => Ok(account.user.clone()),
            None => {
                debug!(username, "Credentials did not match the allow-list");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    fn provider_type(&self) -> &'static str {
        "static allow-list"
    }
}
