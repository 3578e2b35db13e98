//! CLI command implementations.

pub mod browse;
pub mod cart;

use gallery_storefront::StorefrontError;
use gallery_storefront::config::StorefrontConfig;
use gallery_storefront::state::Storefront;
use gallery_storefront::storage::FileStore;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Storefront operation failed.
    #[error("{0}")]
    Storefront(#[from] StorefrontError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open a storefront session over the configured local store.
pub fn open(config: &StorefrontConfig) -> Storefront<FileStore> {
    Storefront::new(config, FileStore::new(&config.storage_path))
}
