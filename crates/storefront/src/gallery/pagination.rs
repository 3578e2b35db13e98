//! Page window over the filtered, sorted gallery.

/// Total pages for `count` items, never less than one.
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = count.div_ceil(size);
    if pages == 0 { 1 } else { pages }
}

/// Current page and page size.
///
/// Pages are 1-based. Callers re-clamp after anything that changes the item
/// count or page size, so `current_page` always lies in `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

impl Pagination {
    /// Start on page one. A zero page size is treated as one.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// The 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for `count` items at the current page size.
    #[must_use]
    pub const fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    /// Jump back to the first page.
    pub const fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Change the page size without leaving the current page. Re-clamps
    /// against `count`. Returns whether the size changed.
    pub fn set_page_size(&mut self, page_size: usize, count: usize) -> bool {
        let page_size = page_size.max(1);
        let changed = page_size != self.page_size;
        self.page_size = page_size;
        self.clamp(count);
        changed
    }

    /// Pull the current page into `[1, total_pages(count)]`.
    pub fn clamp(&mut self, count: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(count));
    }

    /// Go to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize, count: usize) {
        self.current_page = page.clamp(1, self.total_pages(count));
    }

    /// Previous page, stopping at the first.
    pub const fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }

    /// Next page, stopping at the last.
    pub fn next(&mut self, count: usize) {
        self.go_to(self.current_page.saturating_add(1), count);
    }

    /// The slice of `items` on the current page.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(7, 4), 2);
        assert_eq!(total_pages(9, 4), 3);
    }

    #[test]
    fn test_total_pages_covers_count() {
        for size in 1..=8 {
            for count in 0..=40 {
                let pages = total_pages(count, size);
                assert!(pages * size >= count);
                assert!(pages >= 1);
                if count > 0 {
                    assert!((pages - 1) * size < count);
                }
            }
        }
    }

    #[test]
    fn test_window_slices() {
        let items: Vec<u32> = (1..=7).collect();
        let mut pagination = Pagination::new(6);
        assert_eq!(pagination.window(&items), &[1, 2, 3, 4, 5, 6]);
        pagination.next(items.len());
        assert_eq!(pagination.window(&items), &[7]);
    }

    #[test]
    fn test_window_of_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(Pagination::new(6).window(&items).is_empty());
    }

    #[test]
    fn test_navigation_saturates() {
        let mut pagination = Pagination::new(4);
        pagination.previous();
        assert_eq!(pagination.current_page(), 1);
        pagination.next(7);
        pagination.next(7);
        assert_eq!(pagination.current_page(), 2);
        pagination.go_to(99, 7);
        assert_eq!(pagination.current_page(), 2);
        pagination.go_to(0, 7);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_growing_page_size_reclamps() {
        let mut pagination = Pagination::new(4);
        pagination.go_to(2, 7);
        assert!(pagination.set_page_size(6, 7));
        assert_eq!(pagination.current_page(), 2);
        assert!(pagination.set_page_size(8, 7));
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_same_page_size_is_unchanged() {
        let mut pagination = Pagination::new(6);
        assert!(!pagination.set_page_size(6, 7));
    }
}
