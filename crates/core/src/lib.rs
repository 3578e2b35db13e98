//! Gallery Core - Shared types library.
//!
//! This crate provides the domain types used across the Gallery workspace:
//! - `storefront` - Catalog, filter pipeline, cart store and page rendering
//! - `cli` - Developer driver for the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and pure predicates - no I/O, no storage,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for photo IDs, prices, categories, price ranges and sort modes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
