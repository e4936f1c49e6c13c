/// In-memory cache store
use crate::backend::{CacheError, CacheStore, Lookup};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local cache store backed by a `HashMap`
///
/// Used by tests and by deployments that run without Redis. Not shared
/// across instances.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries, for test assertions
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a key is currently present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Lookup {
        match self.entries.lock().unwrap().get(key) {
            Some(value) => Lookup::Hit(value.clone()),
            None => Lookup::Miss,
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
