//! Service wiring
//!
//! Builds the configured store and the services on top of it.

use std::sync::Arc;

use tracing::info;

use crate::application::{AuthService, DirectoryOptions, UserDirectory};
use crate::config::AppConfig;
use crate::domain::DomainResult;
use crate::infrastructure::{open_store, KeyValueStore};

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Fully wired services, ready for a front-end to call.
pub struct App {
    pub directory: Arc<UserDirectory<dyn KeyValueStore>>,
    pub auth: AuthService<dyn KeyValueStore>,
}

impl App {
    /// Open the store selected in `config` and build the services.
    pub async fn start(config: &AppConfig) -> DomainResult<Self> {
        let store = open_store(&config.storage).await?;
        Ok(Self::with_store(store, config))
    }

    /// Build the services over an already opened store.
    pub fn with_store(store: SharedStore, config: &AppConfig) -> Self {
        let options = DirectoryOptions::from(&config.storage);
        info!(
            decode_policy = ?options.decode_policy,
            id_strategy = ?options.id_strategy,
            "User directory ready"
        );
        let directory = Arc::new(UserDirectory::new(store, options));
        let auth = AuthService::new(directory.clone(), config.auth.clone());
        Self { directory, auth }
    }
}
