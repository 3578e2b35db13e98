//! Local key-value storage.
//!
//! The cart is the only thing the storefront persists. It goes through the
//! [`KeyValueStore`] trait so the backing store can be swapped:
//!
//! - [`MemoryStore`] - in-process map with an optional byte quota (tests, previews)
//! - [`FileStore`] - JSON object on disk, one string value per key

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data isn't valid JSON.
    #[error("Corrupt storage: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The write would exceed the store's quota.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} available")]
    QuotaExceeded {
        /// Bytes the store would hold after the write.
        needed: usize,
        /// Maximum bytes the store accepts.
        quota: usize,
    },
}

/// A string key-value store with browser local-storage semantics.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store can't be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails or exceeds a quota.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
