//! Storage trait definitions

use async_trait::async_trait;

use crate::domain::StorageError;

/// String key-value persistence, the seam between the booking log and its
/// backing medium.
///
/// The interface is intentionally minimal: the booking store keeps its whole
/// collection serialized under a single key, so `get`/`set`/`remove` is all
/// it ever needs. Implementations must be safe to share across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any prior value entirely.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
