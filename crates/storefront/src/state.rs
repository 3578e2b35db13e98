//! The storefront state container.
//!
//! [`Storefront`] owns all UI state for one session. Input events go through
//! [`Storefront::dispatch`]; everything shown on screen is derived from the
//! state on read.

use gallery_core::{Category, PhotoId, PriceRange, SortMode};
use tracing::instrument;

use crate::cart::CartStore;
use crate::catalog::{Catalog, HeroContent};
use crate::config::StorefrontConfig;
use crate::gallery::{self, FilterState, GalleryPage, Pagination};
use crate::layout::LayoutState;
use crate::storage::KeyValueStore;

/// A user input the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Category checkbox toggled.
    ToggleCategory(Category),
    /// Price-range checkbox toggled.
    TogglePriceRange(PriceRange),
    /// Sort control changed.
    SetSort(SortMode),
    /// Numbered pagination button.
    GoToPage(usize),
    /// The ‹ button.
    PreviousPage,
    /// The › button.
    NextPage,
    /// Window resized to this width.
    Resize(u32),
    /// "Add to Cart" on a gallery card.
    AddToCart(PhotoId),
    /// "Add to Cart" in the hero.
    AddFeaturedToCart,
    /// "Remove" on a cart line.
    RemoveFromCart(usize),
    /// The cart's "Clear" button.
    ClearCart,
    /// The "Filters" button.
    OpenSidebar,
    /// The header cart icon.
    OpenCart,
    /// The cart's × button.
    CloseCart,
    /// Click on the dimmed backdrop.
    BackdropClick,
}

/// All state for one storefront session.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    hero: HeroContent,
    filters: FilterState,
    sort: SortMode,
    pagination: Pagination,
    layout: LayoutState,
    cart: CartStore<S>,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Open the storefront with the built-in catalog, rehydrating the cart
    /// from `store`.
    pub fn new(config: &StorefrontConfig, store: S) -> Self {
        Self::with_catalog(Catalog::builtin(), config, store)
    }

    /// Open the storefront over a custom catalog.
    pub fn with_catalog(catalog: Catalog, config: &StorefrontConfig, store: S) -> Self {
        let layout = LayoutState::new(config.layout, config.viewport_width);
        let cart = CartStore::load(store, config.cart_key.clone());
        tracing::debug!(
            photos = catalog.len(),
            cart_entries = cart.len(),
            viewport_width = config.viewport_width,
            "Storefront opened"
        );

        Self {
            catalog,
            hero: HeroContent::default(),
            filters: FilterState::initial(),
            sort: SortMode::None,
            pagination: Pagination::new(layout.page_size()),
            layout,
            cart,
        }
    }

    /// Replace the opening filter selection.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self.pagination.reset();
        self
    }

    /// Apply one input event.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::ToggleCategory(category) => {
                let selected = self.filters.toggle_category(category);
                self.pagination.reset();
                tracing::debug!(%category, selected, "Category toggled");
            }
            Event::TogglePriceRange(range) => {
                let label = range.label().to_string();
                let selected = self.filters.toggle_price_range(range);
                self.pagination.reset();
                tracing::debug!(%label, selected, "Price range toggled");
            }
            Event::SetSort(mode) => {
                self.sort = mode;
                self.pagination.reset();
            }
            Event::GoToPage(page) => {
                let count = self.matched_count();
                self.pagination.go_to(page, count);
            }
            Event::PreviousPage => self.pagination.previous(),
            Event::NextPage => {
                let count = self.matched_count();
                self.pagination.next(count);
            }
            Event::Resize(width) => {
                let page_size = self.layout.resize(width);
                let count = self.matched_count();
                if self.pagination.set_page_size(page_size, count) {
                    tracing::debug!(width, page_size, "Page size changed");
                }
            }
            Event::AddToCart(id) => match self.catalog.get(id) {
                Some(photo) => self.cart.add(photo),
                None => tracing::debug!(%id, "Ignoring add for unknown photo"),
            },
            Event::AddFeaturedToCart => {
                if let Some(photo) = self.catalog.featured() {
                    self.cart.add(photo);
                }
            }
            Event::RemoveFromCart(index) => {
                self.cart.remove(index);
            }
            Event::ClearCart => self.cart.clear(),
            Event::OpenSidebar => self.layout.open_sidebar(),
            Event::OpenCart => self.layout.open_cart(),
            Event::CloseCart => self.layout.close_cart(),
            Event::BackdropClick => self.layout.dismiss_overlays(),
        }
    }

    /// The visible gallery page.
    #[must_use]
    pub fn page(&self) -> GalleryPage<'_> {
        gallery::derive_page(
            self.catalog.photos(),
            &self.filters,
            self.sort,
            &self.pagination,
        )
    }

    fn matched_count(&self) -> usize {
        self.catalog
            .photos()
            .iter()
            .filter(|p| self.filters.matches(p))
            .count()
    }

    /// The catalog being browsed.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Static hero copy.
    #[must_use]
    pub const fn hero(&self) -> &HeroContent {
        &self.hero
    }

    /// Current filter selection.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Active sort mode.
    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Pagination state.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Panel and viewport state.
    #[must_use]
    pub const fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Close the session and give back the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.cart.into_store()
    }
}
