//! The client-side shopping cart.
//!
//! The cart is an ordered list of photo copies. Adding the same photo twice
//! gives two entries; there are no quantities. Every mutation writes the full
//! list back to the key-value store as JSON. Storage failures never reach the
//! caller: a bad read starts an empty cart, a failed write is logged and the
//! in-memory cart stays authoritative.

use gallery_core::Price;
use tracing::instrument;

use crate::catalog::PhotoRecord;
use crate::storage::KeyValueStore;

/// A cart line: a copy of the photo as it was when added.
pub type CartEntry = PhotoRecord;

/// Serialize cart entries to the persisted JSON array.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode_cart(entries: &[CartEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Parse a persisted JSON array back into cart entries.
///
/// # Errors
///
/// Returns `serde_json::Error` if `raw` isn't a JSON array of photo records.
pub fn decode_cart(raw: &str) -> Result<Vec<CartEntry>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Cart contents bound to the store they persist to.
#[derive(Debug)]
pub struct CartStore<S> {
    entries: Vec<CartEntry>,
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate the cart stored under `key`.
    ///
    /// Missing, unreadable or corrupt data yields an empty cart.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match store.get(&key) {
            Ok(Some(raw)) => decode_cart(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %key, "Discarding corrupt cart data: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, "Failed to read cart from storage: {e}");
                Vec::new()
            }
        };
        tracing::debug!(key = %key, entries = entries.len(), "Cart loaded");

        Self {
            entries,
            store,
            key,
        }
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (the header badge count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of entry prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(|e| e.price).sum()
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Append a copy of `photo`.
    #[instrument(skip(self, photo), fields(photo_id = %photo.id))]
    pub fn add(&mut self, photo: &PhotoRecord) {
        self.entries.push(photo.clone());
        tracing::debug!(entries = self.entries.len(), "Added to cart");
        self.persist();
    }

    /// Remove the entry at `index`. Out-of-range indexes do nothing.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        if index >= self.entries.len() {
            tracing::debug!(entries = self.entries.len(), "Ignoring out-of-range removal");
            return None;
        }
        let removed = self.entries.remove(index);
        self.persist();
        Some(removed)
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        let encoded = match encode_cart(&self.entries) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to encode cart: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &encoded) {
            tracing::warn!(key = %self.key, "Failed to persist cart: {e}");
        }
    }
}
