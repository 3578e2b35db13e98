//! Core types for the Gallery storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod price_range;
pub mod sort;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::Price;
pub use price_range::{PriceBound, PriceRange};
pub use sort::{SortMode, SortModeError};
