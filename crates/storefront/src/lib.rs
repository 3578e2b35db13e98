//! Gallery Storefront library.
//!
//! A single-page photo storefront as a state container: a static catalog,
//! the filter/sort/paginate pipeline, a cart persisted to a local key-value
//! store, panel layout state, and an askama-rendered page.
//!
//! # Example
//!
//! ```rust
//! use gallery_core::{Category, PhotoId};
//! use gallery_storefront::config::StorefrontConfig;
//! use gallery_storefront::state::{Event, Storefront};
//! use gallery_storefront::storage::MemoryStore;
//!
//! let mut storefront = Storefront::new(&StorefrontConfig::default(), MemoryStore::new());
//! storefront.dispatch(Event::ToggleCategory(Category::People));
//! storefront.dispatch(Event::AddToCart(PhotoId::new(3)));
//! assert_eq!(storefront.cart().total().display(), "$93.89");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod state;
pub mod storage;
pub mod view;

pub use error::{Result, StorefrontError};
