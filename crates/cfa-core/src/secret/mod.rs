//! Key-value credential storage injected into the session and transport.

use std::sync::Arc;

use thiserror::Error;

mod file;
pub use file::FileStore;

mod memory;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt store at {path}: {reason}")]
    Corrupt { path: String, reason: String },
    #[error("store lock poisoned")]
    Poisoned,
}

/// Small secret store keyed by string.
pub trait SecretStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or overwrite `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; missing keys are not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> SecretStore for Arc<S>
where
    S: SecretStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}
