//! Page rendering.
//!
//! Templates never see domain types. Each render builds flat view structs
//! with preformatted strings (prices as `$x.yy`, checkbox state as bools) and
//! hands them to askama. The full page is [`PageTemplate`]; the cart drawer
//! and gallery can be rendered on their own for partial updates.

use askama::Template;
use gallery_core::types::price_range::STANDARD_LABELS;
use gallery_core::{Category, SortMode};

use crate::catalog::PhotoRecord;
use crate::error::Result;
use crate::state::Storefront;
use crate::storage::KeyValueStore;

/// A gallery card.
#[derive(Debug, Clone)]
pub struct PhotoCardView {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image_ref: String,
    pub best_seller: bool,
}

impl From<&PhotoRecord> for PhotoCardView {
    fn from(photo: &PhotoRecord) -> Self {
        Self {
            id: photo.id.as_i32(),
            title: photo.title.clone(),
            category: photo.category.to_string(),
            price: photo.price.display(),
            image_ref: photo.image_ref.clone(),
            best_seller: photo.best_seller,
        }
    }
}

/// A sidebar checkbox.
#[derive(Debug, Clone)]
pub struct CheckboxView {
    pub label: String,
    pub checked: bool,
}

/// An option in the sort control.
#[derive(Debug, Clone)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A numbered pagination button.
#[derive(Debug, Clone)]
pub struct PageButtonView {
    pub number: usize,
    pub active: bool,
}

/// A "People also buy" thumbnail.
#[derive(Debug, Clone)]
pub struct RecommendationView {
    pub image_ref: String,
    pub alt: String,
}

/// The hero banner for the photo of the day.
#[derive(Debug, Clone)]
pub struct HeroView {
    pub title: String,
    pub category: String,
    pub image_ref: String,
    pub about: String,
    pub recommendations: Vec<RecommendationView>,
    pub dimensions: String,
    pub file_size: String,
}

/// A line in the cart drawer.
#[derive(Debug, Clone)]
pub struct CartLineView {
    /// Position in the cart, used by the Remove button.
    pub index: usize,
    pub title: String,
    pub price: String,
    pub image_ref: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: String,
    pub count: usize,
}

/// Gallery grid plus its sort control and pagination.
#[derive(Debug, Clone)]
pub struct GalleryView {
    pub photos: Vec<PhotoCardView>,
    pub sort_options: Vec<SortOptionView>,
    pub pages: Vec<PageButtonView>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Full page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub hero: Option<HeroView>,
    pub categories: Vec<CheckboxView>,
    pub price_ranges: Vec<CheckboxView>,
    pub gallery: GalleryView,
    pub cart: CartView,
    pub sidebar_open: bool,
    pub cart_open: bool,
    pub backdrop_visible: bool,
}

/// Cart drawer fragment template.
#[derive(Template)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
    pub cart_open: bool,
}

/// Gallery fragment template.
#[derive(Template)]
#[template(path = "partials/gallery.html")]
pub struct GalleryTemplate {
    pub gallery: GalleryView,
}

// =============================================================================
// Building Views
// =============================================================================

fn hero_view<S: KeyValueStore>(storefront: &Storefront<S>) -> Option<HeroView> {
    let featured = storefront.catalog().featured()?;
    let content = storefront.hero();
    Some(HeroView {
        title: featured.title.clone(),
        category: featured.category.to_string(),
        image_ref: featured.image_ref.clone(),
        about: content.about.to_string(),
        recommendations: content
            .recommendations
            .iter()
            .map(|r| RecommendationView {
                image_ref: r.image_ref.to_string(),
                alt: r.alt.to_string(),
            })
            .collect(),
        dimensions: content.dimensions.to_string(),
        file_size: content.file_size.to_string(),
    })
}

fn category_checkboxes<S: KeyValueStore>(storefront: &Storefront<S>) -> Vec<CheckboxView> {
    Category::ALL
        .iter()
        .map(|&c| CheckboxView {
            label: c.to_string(),
            checked: storefront.filters().has_category(c),
        })
        .collect()
}

fn price_range_checkboxes<S: KeyValueStore>(storefront: &Storefront<S>) -> Vec<CheckboxView> {
    STANDARD_LABELS
        .iter()
        .map(|&label| CheckboxView {
            label: label.to_string(),
            checked: storefront.filters().has_price_range(label),
        })
        .collect()
}

/// Build the gallery view for the current page.
#[must_use]
pub fn gallery_view<S: KeyValueStore>(storefront: &Storefront<S>) -> GalleryView {
    let page = storefront.page();
    GalleryView {
        photos: page.items.iter().map(|p| PhotoCardView::from(*p)).collect(),
        sort_options: SortMode::ALL
            .iter()
            .map(|&mode| SortOptionView {
                value: mode.as_str(),
                label: mode.label(),
                selected: mode == storefront.sort(),
            })
            .collect(),
        pages: (1..=page.total_pages)
            .map(|number| PageButtonView {
                number,
                active: number == page.current_page,
            })
            .collect(),
        current_page: page.current_page,
        total_pages: page.total_pages,
    }
}

/// Build the cart drawer view.
#[must_use]
pub fn cart_view<S: KeyValueStore>(storefront: &Storefront<S>) -> CartView {
    let cart = storefront.cart();
    CartView {
        items: cart
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| CartLineView {
                index,
                title: entry.title.clone(),
                price: entry.price.display(),
                image_ref: entry.image_ref.clone(),
            })
            .collect(),
        total: cart.total().display(),
        count: cart.len(),
    }
}

impl PageTemplate {
    /// Snapshot the storefront into a renderable page.
    #[must_use]
    pub fn from_storefront<S: KeyValueStore>(storefront: &Storefront<S>) -> Self {
        let layout = storefront.layout();
        Self {
            hero: hero_view(storefront),
            categories: category_checkboxes(storefront),
            price_ranges: price_range_checkboxes(storefront),
            gallery: gallery_view(storefront),
            cart: cart_view(storefront),
            sidebar_open: layout.sidebar_open(),
            cart_open: layout.cart_open(),
            backdrop_visible: layout.backdrop_visible(),
        }
    }
}

/// Render the full page.
///
/// # Errors
///
/// Returns `StorefrontError::Render` if the template fails.
pub fn render_page<S: KeyValueStore>(storefront: &Storefront<S>) -> Result<String> {
    Ok(PageTemplate::from_storefront(storefront).render()?)
}

/// Render only the cart drawer.
///
/// # Errors
///
/// Returns `StorefrontError::Render` if the template fails.
pub fn render_cart<S: KeyValueStore>(storefront: &Storefront<S>) -> Result<String> {
    let template = CartDrawerTemplate {
        cart: cart_view(storefront),
        cart_open: storefront.layout().cart_open(),
    };
    Ok(template.render()?)
}

/// Render only the gallery grid and pagination.
///
/// # Errors
///
/// Returns `StorefrontError::Render` if the template fails.
pub fn render_gallery<S: KeyValueStore>(storefront: &Storefront<S>) -> Result<String> {
    Ok(GalleryTemplate {
        gallery: gallery_view(storefront),
    }
    .render()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gallery_core::PhotoId;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::state::Event;
    use crate::storage::MemoryStore;

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(&StorefrontConfig::default(), MemoryStore::new())
    }

    #[test]
    fn test_page_renders_sections() {
        let html = render_page(&storefront()).unwrap();
        assert!(html.contains("Samurai King Resting"));
        assert!(html.contains("Photo of the day"));
        assert!(html.contains("People also buy"));
        assert!(html.contains("1020 x 1020 pixel"));
        assert!(html.contains("Photography / "));
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("Best Seller"));
        assert!(html.contains("$93.89"));
    }

    #[test]
    fn test_checkbox_state_follows_filters() {
        let view = PageTemplate::from_storefront(&storefront());
        let checked: Vec<_> = view
            .categories
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(checked, vec!["People", "Pets", "Food", "Landmarks"]);
        assert!(view.price_ranges.iter().all(|r| !r.checked));
    }

    #[test]
    fn test_pagination_buttons() {
        let mut sf = storefront();
        sf.dispatch(Event::NextPage);
        let gallery = gallery_view(&sf);
        let active: Vec<_> = gallery.pages.iter().map(|p| p.active).collect();
        assert_eq!(active, vec![false, true]);
        assert_eq!(gallery.photos.len(), 1);
    }

    #[test]
    fn test_sort_option_selected() {
        let mut sf = storefront();
        sf.dispatch(Event::SetSort(SortMode::PriceDescending));
        let gallery = gallery_view(&sf);
        let selected: Vec<_> = gallery
            .sort_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["price-desc"]);
    }

    #[test]
    fn test_cart_drawer_lists_entries_and_total() {
        let mut sf = storefront();
        sf.dispatch(Event::AddToCart(PhotoId::new(3)));
        sf.dispatch(Event::AddToCart(PhotoId::new(4)));
        sf.dispatch(Event::OpenCart);

        let cart = cart_view(&sf);
        assert_eq!(cart.count, 2);
        assert_eq!(cart.total, "$187.78");
        assert_eq!(cart.items[1].index, 1);

        let html = render_cart(&sf).unwrap();
        assert!(html.contains("Egg Balloon 2"));
        assert!(html.contains("$187.78"));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_badge_only_with_items() {
        let mut sf = storefront();
        let html = render_page(&sf).unwrap();
        assert!(!html.contains("cart-badge"));
        sf.dispatch(Event::AddFeaturedToCart);
        let html = render_page(&sf).unwrap();
        assert!(html.contains("cart-badge"));
    }

    #[test]
    fn test_backdrop_only_when_panel_open() {
        let mut sf = storefront();
        assert!(!render_page(&sf).unwrap().contains("class=\"backdrop\""));
        sf.dispatch(Event::OpenSidebar);
        assert!(render_page(&sf).unwrap().contains("class=\"backdrop\""));
    }

    #[test]
    fn test_titles_are_escaped() {
        let catalog = crate::catalog::Catalog::new(vec![PhotoRecord::new(
            1,
            "<script>alert(1)</script>",
            Category::Nature,
            gallery_core::Price::ZERO,
            "x.png",
        )]);
        let sf = Storefront::with_catalog(catalog, &StorefrontConfig::default(), MemoryStore::new())
            .with_filters(crate::gallery::FilterState::default());
        let html = render_gallery(&sf).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
