//! In-memory key-value store.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// A `HashMap`-backed store.
///
/// With a quota set, writes that would push the total size of keys and values
/// past the quota fail with [`StorageError::QuotaExceeded`] and leave the
/// store unchanged, like a full browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store limited to `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Seed a value without quota checks.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Total bytes held, counting keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let existing = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - existing + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
