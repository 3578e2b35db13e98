//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GALLERY_STORAGE_PATH` - Local storage file (default: .gallery/local-storage.json)
//! - `GALLERY_CART_KEY` - Storage key holding the cart (default: `bejamas_cart`)
//! - `GALLERY_VIEWPORT_WIDTH` - Initial viewport width in pixels (default: 1280)
//! - `GALLERY_NARROW_WIDTH` - Widths below this use the narrow page size (default: 480)
//! - `GALLERY_NARROW_PAGE_SIZE` - Photos per page on narrow viewports (default: 4)
//! - `GALLERY_PAGE_SIZE` - Photos per page otherwise (default: 6)
//! - `GALLERY_SIDEBAR_BREAKPOINT` - Width at which the sidebar is always shown (default: 768)

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Default storage key for the persisted cart.
pub const DEFAULT_CART_KEY: &str = "bejamas_cart";

const DEFAULT_STORAGE_PATH: &str = ".gallery/local-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the local key-value store
    pub storage_path: PathBuf,
    /// Key the cart is stored under
    pub cart_key: String,
    /// Viewport width the storefront starts with
    pub viewport_width: u32,
    /// Responsive layout thresholds
    pub layout: LayoutConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            cart_key: DEFAULT_CART_KEY.to_string(),
            viewport_width: 1280,
            layout: LayoutConfig::default(),
        }
    }
}

/// Responsive layout thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Widths strictly below this are "narrow"
    pub narrow_width: u32,
    /// Page size for narrow viewports
    pub narrow_page_size: usize,
    /// Page size for everything else
    pub page_size: usize,
    /// Widths at or above this always show the sidebar
    pub sidebar_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_width: 480,
            narrow_page_size: 4,
            page_size: 6,
            sidebar_breakpoint: 768,
        }
    }
}

impl LayoutConfig {
    /// Page size for a viewport width.
    #[must_use]
    pub const fn page_size_for(&self, width: u32) -> usize {
        if width < self.narrow_width {
            self.narrow_page_size
        } else {
            self.page_size
        }
    }

    /// Whether the sidebar is pinned open at this width.
    #[must_use]
    pub const fn is_wide(&self, width: u32) -> bool {
        width >= self.sidebar_breakpoint
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric variable doesn't parse or a page
    /// size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let layout_defaults = LayoutConfig::default();

        let layout = LayoutConfig {
            narrow_width: parse_var(&lookup, "GALLERY_NARROW_WIDTH", layout_defaults.narrow_width)?,
            narrow_page_size: parse_page_size(
                &lookup,
                "GALLERY_NARROW_PAGE_SIZE",
                layout_defaults.narrow_page_size,
            )?,
            page_size: parse_page_size(&lookup, "GALLERY_PAGE_SIZE", layout_defaults.page_size)?,
            sidebar_breakpoint: parse_var(
                &lookup,
                "GALLERY_SIDEBAR_BREAKPOINT",
                layout_defaults.sidebar_breakpoint,
            )?,
        };

        Ok(Self {
            storage_path: lookup("GALLERY_STORAGE_PATH")
                .filter(|v| !v.trim().is_empty())
                .map_or(defaults.storage_path, PathBuf::from),
            cart_key: get_or_default(&lookup, "GALLERY_CART_KEY", DEFAULT_CART_KEY),
            viewport_width: parse_var(&lookup, "GALLERY_VIEWPORT_WIDTH", defaults.viewport_width)?,
            layout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse a variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Parse a page size, rejecting zero.
fn parse_page_size<F>(lookup: &F, key: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let size = parse_var(lookup, key, default)?;
    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(size)
}
