//! File-backed key-value store.
//!
//! The whole store is one JSON object (`{"key": "value", ...}`) rewritten on
//! every `set` through a sibling `.tmp` file and a rename. That's the native equivalent of browser local storage: small,
//! string-valued, read rarely.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// A store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a write goes to before it replaces the store.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(e)) => {
                tracing::warn!(path = %self.path.display(), "Replacing corrupt storage file: {e}");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Rename over the old file so a failed write never leaves it half-written
        let staging = self.staging_path();
        fs::write(&staging, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("gallery-store-{}", uuid::Uuid::new_v4()))
            .join("local-storage.json")
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = FileStore::new(temp_path());
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_creates_file_and_keeps_other_keys() {
        let path = temp_path();
        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();
        store.set("cart", "[]").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[]"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_corrupt_file_fails_read_and_is_replaced_on_write() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.get("cart"), Err(StorageError::Corrupt(_))));

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_interrupted_write_leaves_store_intact() {
        let path = temp_path();
        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();
        assert!(!store.staging_path().exists());

        // A write that died before the rename only leaves the staging file
        fs::write(store.staging_path(), "{\"theme\": \"li").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.set("cart", "[]").unwrap();
        assert!(!store.staging_path().exists());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            store.staging_path().file_name().unwrap(),
            "local-storage.json.tmp"
        );

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
