//! The filter, sort and paginate pipeline.
//!
//! Everything here is a pure derivation from the catalog plus UI selection
//! state. Nothing is cached: the catalog is small enough that re-deriving on
//! every read is simpler than invalidating.

mod filter;
mod pagination;
mod sort;

use gallery_core::SortMode;

use crate::catalog::PhotoRecord;

pub use filter::FilterState;
pub use pagination::{Pagination, total_pages};
pub use sort::sort_photos;

/// The visible slice of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage<'a> {
    /// Photos on the current page, in display order.
    pub items: Vec<&'a PhotoRecord>,
    /// 1-based current page.
    pub current_page: usize,
    /// Total pages, at least one.
    pub total_pages: usize,
    /// Photos passing the filters across all pages.
    pub total_count: usize,
}

/// Filter then sort the catalog.
#[must_use]
pub fn filter_and_sort<'a>(
    photos: &'a [PhotoRecord],
    filters: &FilterState,
    sort: SortMode,
) -> Vec<&'a PhotoRecord> {
    let mut matched = filters.apply(photos);
    sort_photos(&mut matched, sort);
    matched
}

/// Run the whole pipeline and cut out the current page.
#[must_use]
pub fn derive_page<'a>(
    photos: &'a [PhotoRecord],
    filters: &FilterState,
    sort: SortMode,
    pagination: &Pagination,
) -> GalleryPage<'a> {
    let matched = filter_and_sort(photos, filters, sort);
    GalleryPage {
        items: pagination.window(&matched).to_vec(),
        current_page: pagination.current_page(),
        total_pages: pagination.total_pages(matched.len()),
        total_count: matched.len(),
    }
}
