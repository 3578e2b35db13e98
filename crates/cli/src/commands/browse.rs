//! Browsing and rendering the gallery.
//!
//! # Usage
//!
//! ```bash
//! gallery browse -c People -c Food --page 2
//! gallery browse --all-categories -s newest
//! gallery render -o storefront.html
//! ```

use std::fs;
use std::path::Path;

use clap::Args;
use gallery_core::{Category, PriceRange, SortMode};
use gallery_storefront::config::StorefrontConfig;
use gallery_storefront::gallery::FilterState;
use gallery_storefront::state::{Event, Storefront};
use gallery_storefront::storage::KeyValueStore;
use gallery_storefront::view;

use super::{CommandError, open};

/// Filter, sort and paging options shared by `browse` and `render`.
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Category to include (repeatable; defaults to People, Pets, Food, Landmarks)
    #[arg(short, long = "category")]
    pub categories: Vec<Category>,

    /// Show every category
    #[arg(long, conflicts_with = "categories")]
    pub all_categories: bool,

    /// Price range label to include, e.g. '$20 - $100' (repeatable)
    #[arg(short = 'p', long = "price-range", value_parser = parse_price_range)]
    pub price_ranges: Vec<PriceRange>,

    /// Sort mode: none, price-asc, price-desc, newest
    #[arg(short, long, default_value = "none")]
    pub sort: SortMode,

    /// Page to show (1-based, clamped)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Viewport width in pixels (defaults to GALLERY_VIEWPORT_WIDTH)
    #[arg(short, long)]
    pub width: Option<u32>,
}

#[allow(clippy::unnecessary_wraps)]
fn parse_price_range(label: &str) -> Result<PriceRange, String> {
    Ok(PriceRange::parse(label))
}

impl BrowseArgs {
    /// The filter selection these options describe.
    #[must_use]
    pub fn filters(&self) -> FilterState {
        if self.all_categories {
            FilterState::new(std::iter::empty(), self.price_ranges.clone())
        } else if self.categories.is_empty() {
            let mut filters = FilterState::initial();
            for range in &self.price_ranges {
                filters.toggle_price_range(range.clone());
            }
            filters
        } else {
            FilterState::new(self.categories.clone(), self.price_ranges.clone())
        }
    }

    /// Events that move a fresh storefront to the requested view.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(width) = self.width {
            events.push(Event::Resize(width));
        }
        events.push(Event::SetSort(self.sort));
        events.push(Event::GoToPage(self.page));
        events
    }

    /// Apply these options to a storefront.
    pub fn apply<S: KeyValueStore>(&self, storefront: Storefront<S>) -> Storefront<S> {
        let mut storefront = storefront.with_filters(self.filters());
        for event in self.events() {
            storefront.dispatch(event);
        }
        storefront
    }
}

/// Overlay panels to open before rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panels {
    pub cart: bool,
    pub sidebar: bool,
}

/// Print the current gallery page.
///
/// # Errors
///
/// Currently infallible; returns `Result` for symmetry with other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn browse(config: &StorefrontConfig, args: &BrowseArgs) -> Result<(), CommandError> {
    let storefront = args.apply(open(config));
    let page = storefront.page();

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Page {}/{} ({} photos, sort: {})",
            page.current_page,
            page.total_pages,
            page.total_count,
            storefront.sort().label()
        );
        for photo in &page.items {
            let badge = if photo.best_seller { "  [Best Seller]" } else { "" };
            println!(
                "  #{:<3} {:<24} {:<10} {:>8}{badge}",
                photo.id.as_i32(),
                photo.title,
                photo.category.as_str(),
                photo.price.display()
            );
        }
        println!("Cart: {} item(s)", storefront.cart().len());
    }
    Ok(())
}

/// Render the page to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns `CommandError` if rendering or writing fails.
pub fn render(
    config: &StorefrontConfig,
    args: &BrowseArgs,
    panels: Panels,
    output: Option<&Path>,
) -> Result<(), CommandError> {
    let mut storefront = args.apply(open(config));
    if panels.sidebar {
        storefront.dispatch(Event::OpenSidebar);
    }
    if panels.cart {
        storefront.dispatch(Event::OpenCart);
    }

    let html = view::render_page(&storefront)?;
    match output {
        Some(path) => {
            fs::write(path, html)?;
            tracing::info!(path = %path.display(), "Page rendered");
        }
        None => {
            #[allow(clippy::print_stdout)]
            {
                println!("{html}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gallery_storefront::storage::MemoryStore;

    use super::*;

    fn args() -> BrowseArgs {
        BrowseArgs {
            categories: Vec::new(),
            all_categories: false,
            price_ranges: Vec::new(),
            sort: SortMode::None,
            page: 1,
            width: None,
        }
    }

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(&StorefrontConfig::default(), MemoryStore::new())
    }

    #[test]
    fn test_defaults_use_initial_selection() {
        assert_eq!(args().filters(), FilterState::initial());
    }

    #[test]
    fn test_explicit_categories_replace_defaults() {
        let args = BrowseArgs {
            categories: vec![Category::Food],
            ..args()
        };
        let sf = args.apply(storefront());
        assert_eq!(sf.page().total_count, 2);
    }

    #[test]
    fn test_all_categories_clears_selection() {
        let args = BrowseArgs {
            all_categories: true,
            ..args()
        };
        assert!(args.filters().categories().is_empty());
    }

    #[test]
    fn test_page_applied_after_sort() {
        let args = BrowseArgs {
            sort: SortMode::Newest,
            page: 2,
            ..args()
        };
        let sf = args.apply(storefront());
        assert_eq!(sf.page().current_page, 2);
        assert_eq!(sf.page().items[0].id.as_i32(), 1);
    }

    #[test]
    fn test_width_changes_page_size() {
        let args = BrowseArgs {
            width: Some(320),
            ..args()
        };
        let sf = args.apply(storefront());
        assert_eq!(sf.pagination().page_size(), 4);
    }
}
