//! Storage trait definitions

use async_trait::async_trait;

use crate::shared::InfraResult;

/// Persistent key-value store holding JSON documents under string keys.
///
/// Each call is atomic on its own; nothing spans a read followed by a write.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, or `None` if the key was never set.
    async fn get(&self, key: &str) -> InfraResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> InfraResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> InfraResult<()>;
}
