//! Category and price-range selection.

use std::collections::BTreeSet;

use gallery_core::{Category, PriceRange};

use crate::catalog::PhotoRecord;

/// The sidebar's checkbox selection.
///
/// An empty set places no restriction on that dimension. Selected price
/// ranges are OR-ed together; the two dimensions are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: BTreeSet<Category>,
    price_ranges: BTreeSet<PriceRange>,
}

impl FilterState {
    /// Selection the storefront opens with: People, Pets, Food and Landmarks.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            categories: [
                Category::People,
                Category::Pets,
                Category::Food,
                Category::Landmarks,
            ]
            .into_iter()
            .collect(),
            price_ranges: BTreeSet::new(),
        }
    }

    /// Build a selection from explicit sets.
    #[must_use]
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        price_ranges: impl IntoIterator<Item = PriceRange>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            price_ranges: price_ranges.into_iter().collect(),
        }
    }

    /// Selected categories.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Selected price ranges.
    #[must_use]
    pub const fn price_ranges(&self) -> &BTreeSet<PriceRange> {
        &self.price_ranges
    }

    /// Whether the category checkbox is ticked.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Whether the price-range checkbox with this label is ticked.
    #[must_use]
    pub fn has_price_range(&self, label: &str) -> bool {
        self.price_ranges.iter().any(|r| r.label() == label)
    }

    /// Flip a category checkbox. Returns whether it is now selected.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.categories.remove(&category) {
            false
        } else {
            self.categories.insert(category);
            true
        }
    }

    /// Flip a price-range checkbox. Returns whether it is now selected.
    pub fn toggle_price_range(&mut self, range: PriceRange) -> bool {
        if self.price_ranges.remove(&range) {
            false
        } else {
            self.price_ranges.insert(range);
            true
        }
    }

    /// Whether a photo passes the current selection.
    #[must_use]
    pub fn matches(&self, photo: &PhotoRecord) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&photo.category);
        let price_ok = self.price_ranges.is_empty()
            || self.price_ranges.iter().any(|r| r.contains(photo.price));
        category_ok && price_ok
    }

    /// Photos passing the selection, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, photos: &'a [PhotoRecord]) -> Vec<&'a PhotoRecord> {
        photos.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn titles(photos: &[&PhotoRecord]) -> Vec<String> {
        photos.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_empty_selection_passes_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(FilterState::default().apply(catalog.photos()).len(), 7);
    }

    #[test]
    fn test_initial_selection_hides_nothing_in_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(FilterState::initial().apply(catalog.photos()).len(), 7);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::builtin();
        let filter = FilterState::new([Category::Food], []);
        assert_eq!(
            titles(&filter.apply(catalog.photos())),
            vec!["Egg Balloon", "Egg Balloon 2"]
        );
    }

    #[test]
    fn test_price_ranges_are_ored() {
        let catalog = Catalog::builtin();
        let filter = FilterState::new(
            [],
            [
                PriceRange::parse("Lower than $20"),
                PriceRange::parse("More than $200"),
            ],
        );
        assert_eq!(
            titles(&filter.apply(catalog.photos())),
            vec!["Samurai King Resting", "Red Bench"]
        );
    }

    #[test]
    fn test_category_and_price_are_anded() {
        let catalog = Catalog::builtin();
        let filter = FilterState::new([Category::People], [PriceRange::parse("$20 - $100")]);
        assert_eq!(titles(&filter.apply(catalog.photos())), vec!["Man"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut filter = FilterState::initial();
        assert!(!filter.toggle_category(Category::Food));
        assert!(!filter.has_category(Category::Food));
        assert!(filter.toggle_category(Category::Food));
        assert_eq!(filter, FilterState::initial());

        assert!(filter.toggle_price_range(PriceRange::parse("$100 - $200")));
        assert!(filter.has_price_range("$100 - $200"));
        assert!(!filter.toggle_price_range(PriceRange::parse("$100 - $200")));
        assert!(filter.price_ranges().is_empty());
    }

    #[test]
    fn test_unmatched_category_selection_yields_nothing() {
        let catalog = Catalog::builtin();
        let filter = FilterState::new([Category::Nature], []);
        assert!(filter.apply(catalog.photos()).is_empty());
    }
}
