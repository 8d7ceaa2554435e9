//! Storage traits and implementations

mod file;
mod memory;
mod traits;

use std::sync::Arc;

use tracing::info;

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::KeyValueStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::shared::InfraResult;

/// Build the store selected in the configuration.
pub async fn open_store(config: &StorageConfig) -> InfraResult<Arc<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::File => {
            let store = FileStore::open(&config.data_dir).await?;
            info!(data_dir = %config.data_dir.display(), "Using file storage");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; nothing will be persisted");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
