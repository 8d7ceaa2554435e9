use serde::{Deserialize, Serialize};

/// Id of the synthetic administrator record.
pub const ADMIN_ID: &str = "admin";
/// Display name of the synthetic administrator record.
pub const ADMIN_NAME: &str = "Administrador";

/// User record as persisted in the directory.
///
/// Field names on disk follow the existing on-device data:
/// `{ "id", "nome", "login", "senha"? }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub login: String,
    #[serde(rename = "senha", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Built-in administrator used by the sentinel login. Never stored in
    /// the directory and carries no password.
    pub fn administrator(login: impl Into<String>) -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            login: login.into(),
            password: None,
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_deref() == Some(candidate)
    }
}
