use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use super::{SecretStore, StoreError};

/// Process-local store; contents vanish with the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get("userToken").unwrap(), None);

        store.put("userToken", "abc").unwrap();
        store.put("userToken", "def").unwrap();
        assert_eq!(store.get("userToken").unwrap().as_deref(), Some("def"));

        store.delete("userToken").unwrap();
        store.delete("userToken").unwrap();
        assert_eq!(store.get("userToken").unwrap(), None);
    }

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.put("userId", "tech-7").unwrap();
        assert_eq!(other.get("userId").unwrap().as_deref(), Some("tech-7"));
    }
}
