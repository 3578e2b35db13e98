//! Cart commands against the configured local store.
//!
//! # Usage
//!
//! ```bash
//! gallery cart add 3
//! gallery cart add-featured
//! gallery cart remove 0
//! gallery cart clear
//! gallery cart show
//! ```

use gallery_core::PhotoId;
use gallery_storefront::config::StorefrontConfig;
use gallery_storefront::state::Event;

use super::{CommandError, open};

/// List the cart.
///
/// # Errors
///
/// Currently infallible; returns `Result` for symmetry with other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn show(config: &StorefrontConfig) -> Result<(), CommandError> {
    let storefront = open(config);
    let cart = storefront.cart();

    #[allow(clippy::print_stdout)]
    {
        if cart.is_empty() {
            println!("Your cart is empty");
        }
        for (index, entry) in cart.entries().iter().enumerate() {
            println!("  [{index}] {:<24} {:>8}", entry.title, entry.price.display());
        }
        println!("Total: {}", cart.total().display());
    }
    Ok(())
}

/// Add a catalog photo.
///
/// # Errors
///
/// Returns `CommandError` if listing the cart afterwards fails.
pub fn add(config: &StorefrontConfig, id: PhotoId) -> Result<(), CommandError> {
    apply(config, Event::AddToCart(id))
}

/// Add the photo of the day.
///
/// # Errors
///
/// Returns `CommandError` if listing the cart afterwards fails.
pub fn add_featured(config: &StorefrontConfig) -> Result<(), CommandError> {
    apply(config, Event::AddFeaturedToCart)
}

/// Remove the entry at `index`.
///
/// # Errors
///
/// Returns `CommandError` if listing the cart afterwards fails.
pub fn remove(config: &StorefrontConfig, index: usize) -> Result<(), CommandError> {
    apply(config, Event::RemoveFromCart(index))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CommandError` if listing the cart afterwards fails.
pub fn clear(config: &StorefrontConfig) -> Result<(), CommandError> {
    apply(config, Event::ClearCart)
}

fn apply(config: &StorefrontConfig, event: Event) -> Result<(), CommandError> {
    let mut storefront = open(config);
    let before = storefront.cart().len();
    storefront.dispatch(event);
    tracing::info!(before, after = storefront.cart().len(), "Cart updated");
    show(config)
}
