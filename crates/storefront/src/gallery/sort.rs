//! Applying a [`SortMode`] to filtered photos.

use gallery_core::SortMode;

use crate::catalog::PhotoRecord;

/// Stable-sort photos in place. [`SortMode::None`] keeps the input order.
pub fn sort_photos(photos: &mut [&PhotoRecord], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::PriceAscending => photos.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDescending => photos.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Newest => photos.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}
