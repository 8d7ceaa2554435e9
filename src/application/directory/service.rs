//! User directory service — application-layer orchestration
//!
//! The directory is a single JSON array under [`USERS_KEY`]; every mutation
//! reads the whole array, changes it and writes it back. The session pointer
//! is a copy of one user under [`CURRENT_USER_KEY`].

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{DecodePolicy, IdStrategy, StorageConfig};
use crate::domain::{CreateUserDto, DomainError, DomainResult, UpdateUserDto, User};
use crate::infrastructure::KeyValueStore;
use crate::shared::InfraError;

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Behavior switches for [`UserDirectory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub decode_policy: DecodePolicy,
    pub id_strategy: IdStrategy,
}

impl From<&StorageConfig> for DirectoryOptions {
    fn from(config: &StorageConfig) -> Self {
        Self {
            decode_policy: config.on_decode_error,
            id_strategy: config.id_strategy,
        }
    }
}

/// User directory — the only component that reads or writes users and the
/// session pointer.
///
/// Assumes a single active caller: two mutations running at the same time
/// can overwrite each other's changes.
pub struct UserDirectory<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    options: DirectoryOptions,
}

impl<S: KeyValueStore + ?Sized> UserDirectory<S> {
    pub fn new(store: Arc<S>, options: DirectoryOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> DirectoryOptions {
        self.options
    }

    // ── Queries ─────────────────────────────────────────────────

    /// All stored users in insertion order. Nothing stored means no users.
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        Ok(self.read_json(USERS_KEY).await?.unwrap_or_default())
    }

    pub async fn get_user(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.list_users().await?.into_iter().find(|u| u.id == id))
    }

    /// First user whose login is exactly `login`.
    pub async fn find_by_login(&self, login: &str) -> DomainResult<Option<User>> {
        Ok(self.list_users().await?.into_iter().find(|u| u.login == login))
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Register a new user. The login must not be taken.
    pub async fn add_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        dto.ensure_valid()?;

        let mut users = self.list_users().await?;
        if users.iter().any(|u| u.login == dto.login) {
            return Err(DomainError::Conflict(format!(
                "login '{}' is already registered",
                dto.login
            )));
        }

        let user = User {
            id: self.next_id(&users),
            name: dto.name,
            login: dto.login,
            password: Some(dto.password),
        };
        users.push(user.clone());
        self.write_json(USERS_KEY, &users).await?;

        info!(user_id = %user.id, login = %user.login, "User created");
        Ok(user)
    }

    /// Merge `dto` into the user with `id`. Returns `None`, without writing
    /// anything, when no such user exists.
    pub async fn update_user(&self, id: &str, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        dto.ensure_valid()?;

        let mut users = self.list_users().await?;
        let Some(index) = users.iter().position(|u| u.id == id) else {
            debug!(user_id = id, "Update skipped, user not found");
            return Ok(None);
        };

        if let Some(login) = &dto.login {
            if users.iter().any(|u| u.id != id && &u.login == login) {
                return Err(DomainError::Conflict(format!(
                    "login '{}' is already registered",
                    login
                )));
            }
        }

        dto.apply_to(&mut users[index]);
        let updated = users[index].clone();
        self.write_json(USERS_KEY, &users).await?;

        info!(
            user_id = id,
            password_changed = dto.new_password().is_some(),
            "User updated"
        );
        Ok(Some(updated))
    }

    /// Remove the user with `id`. Returns whether a record was removed.
    pub async fn delete_user(&self, id: &str) -> DomainResult<bool> {
        let mut users = self.list_users().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            debug!(user_id = id, "Delete skipped, user not found");
            return Ok(false);
        }

        self.write_json(USERS_KEY, &users).await?;
        info!(user_id = id, "User deleted");
        Ok(true)
    }

    // ── Session pointer ─────────────────────────────────────────

    pub async fn set_current_session(&self, user: &User) -> DomainResult<()> {
        self.write_json(CURRENT_USER_KEY, user).await
    }

    pub async fn get_current_session(&self) -> DomainResult<Option<User>> {
        self.read_json(CURRENT_USER_KEY).await
    }

    pub async fn clear_session(&self) -> DomainResult<()> {
        self.store.remove(CURRENT_USER_KEY).await?;
        Ok(())
    }

    // ── Helpers ─────────────────────────────────────────────────

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => return self.unreadable(key, e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => self.unreadable(
                key,
                DomainError::Decode {
                    key: key.to_string(),
                    reason: e.to_string(),
                },
            ),
        }
    }

    fn unreadable<T>(&self, key: &str, err: DomainError) -> DomainResult<Option<T>> {
        match self.options.decode_policy {
            DecodePolicy::ReturnEmpty => {
                warn!(key, error = %err, "Unreadable stored value treated as empty");
                Ok(None)
            }
            DecodePolicy::Propagate => Err(err),
        }
    }

    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> DomainResult<()> {
        let raw = serde_json::to_string(value).map_err(InfraError::from)?;
        self.store.set(key, raw).await?;
        Ok(())
    }

    fn next_id(&self, users: &[User]) -> String {
        match self.options.id_strategy {
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            IdStrategy::Timestamp => {
                let now = Utc::now().timestamp_millis();
                let after_last = users
                    .iter()
                    .filter_map(|u| u.id.parse::<i64>().ok())
                    .max()
                    .map(|max| max.saturating_add(1));
                after_last.map_or(now, |next| next.max(now)).to_string()
            }
        }
    }
}
