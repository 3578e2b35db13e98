//! Unified error handling.
//!
//! The storefront itself never fails: storage problems are logged and
//! swallowed inside the cart. Errors only surface from the edges (loading
//! configuration, rendering the page, reading the store directly).

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Page template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Input didn't name a known category, sort mode or photo.
    #[error("Bad input: {0}")]
    BadInput(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::BadInput("sort by vibes".to_string());
        assert_eq!(err.to_string(), "Bad input: sort by vibes");

        let err = StorefrontError::from(StorageError::QuotaExceeded {
            needed: 12,
            quota: 10,
        });
        assert_eq!(
            err.to_string(),
            "Storage error: Storage quota exceeded: 12 bytes needed, 10 available"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: StorefrontError =
            ConfigError::InvalidEnvVar("GALLERY_PAGE_SIZE".to_string(), "nope".to_string()).into();
        assert!(matches!(err, StorefrontError::Config(_)));
    }
}
