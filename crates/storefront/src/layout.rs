//! Panel visibility and responsive layout.

use crate::config::LayoutConfig;

/// Viewport width and overlay panel state.
///
/// The sidebar and the cart drawer overlay the page and share one dimmed
/// backdrop. Clicking the backdrop closes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    config: LayoutConfig,
    viewport_width: u32,
    sidebar_open: bool,
    cart_open: bool,
}

impl LayoutState {
    /// Start with both panels closed.
    #[must_use]
    pub const fn new(config: LayoutConfig, viewport_width: u32) -> Self {
        Self {
            config,
            viewport_width,
            sidebar_open: false,
            cart_open: false,
        }
    }

    /// Current viewport width.
    #[must_use]
    pub const fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Layout thresholds in effect.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Record a new viewport width and return the page size it calls for.
    pub const fn resize(&mut self, width: u32) -> usize {
        self.viewport_width = width;
        self.page_size()
    }

    /// Page size for the current width.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.config.page_size_for(self.viewport_width)
    }

    /// Whether the viewport is wide enough to pin the sidebar.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.config.is_wide(self.viewport_width)
    }

    /// Open the sidebar overlay (the "Filters" button).
    pub const fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Open the cart drawer (the header cart icon).
    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Close the cart drawer (its × button).
    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Backdrop click: close both panels.
    pub const fn dismiss_overlays(&mut self) {
        self.sidebar_open = false;
        self.cart_open = false;
    }

    /// Whether the sidebar is open as an overlay.
    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the sidebar is on screen, pinned or overlaid.
    #[must_use]
    pub const fn sidebar_visible(&self) -> bool {
        self.sidebar_open || self.is_wide()
    }

    /// Whether the dimmed backdrop is shown.
    #[must_use]
    pub const fn backdrop_visible(&self) -> bool {
        self.sidebar_open || self.cart_open
    }
}
