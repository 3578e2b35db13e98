//! Integration tests for the Gallery storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gallery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browsing` - Filter, sort and pagination properties over the whole catalog
//! - `cart_persistence` - Cart behavior across sessions and backing stores
