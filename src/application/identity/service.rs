//! Authentication service — application-layer orchestration

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::directory::UserDirectory;
use crate::config::AuthConfig;
use crate::domain::{DomainError, DomainResult, User};
use crate::infrastructure::KeyValueStore;

/// Signs users in and out on top of a [`UserDirectory`].
pub struct AuthService<S: KeyValueStore + ?Sized> {
    directory: Arc<UserDirectory<S>>,
    config: AuthConfig,
}

impl<S: KeyValueStore + ?Sized> AuthService<S> {
    pub fn new(directory: Arc<UserDirectory<S>>, config: AuthConfig) -> Self {
        if !config.verify_password {
            warn!("Password verification is disabled; a matching login is enough to sign in");
        }
        Self { directory, config }
    }

    pub fn directory(&self) -> &Arc<UserDirectory<S>> {
        &self.directory
    }

    // ── Authentication ──────────────────────────────────────────

    /// Sign in and store the session pointer.
    ///
    /// The sentinel pair (login and password both equal to
    /// `admin_sentinel`) signs in as the built-in administrator without
    /// looking at the directory. Otherwise the first user with this exact
    /// login is used, and its stored password must match unless
    /// `verify_password` is off.
    pub async fn login(&self, login: &str, password: &str) -> DomainResult<User> {
        if login.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "login and password are required".into(),
            ));
        }

        if login == self.config.admin_sentinel && password == self.config.admin_sentinel {
            let admin = User::administrator(login);
            self.directory.set_current_session(&admin).await?;
            info!(user_id = %admin.id, "Administrator signed in");
            return Ok(admin);
        }

        let Some(user) = self.directory.find_by_login(login).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if self.config.verify_password && !user.password_matches(password) {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        self.directory.set_current_session(&user).await?;
        info!(user_id = %user.id, login = %user.login, "User signed in");
        Ok(user)
    }

    pub async fn logout(&self) -> DomainResult<()> {
        self.directory.clear_session().await?;
        info!("Signed out");
        Ok(())
    }

    pub async fn current_user(&self) -> DomainResult<Option<User>> {
        self.directory.get_current_session().await
    }

    /// The signed-in user, or `Unauthorized` when nobody is signed in.
    pub async fn require_session(&self) -> DomainResult<User> {
        self.current_user()
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Not signed in".into()))
    }
}
