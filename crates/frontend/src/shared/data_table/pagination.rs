//! Page arithmetic and the page-number strip shown under the table.

/// Page sizes offered by the page size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Above this many pages the strip collapses with ellipses
const MAX_PLAIN_PAGES: usize = 7;

/// Pages shown on each side of the current one
const WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Row range of the current page within `total` rows
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE_OPTIONS[0])
    }
}

/// `ceil(total / page_size)`
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Clamps a requested page index into `[0, page_count - 1]` (0 when there are no pages)
pub fn clamp_page(page_index: usize, page_count: usize) -> usize {
    page_index.min(page_count.saturating_sub(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 0-based page index
    Page(usize),
    Ellipsis,
}

/// Page-number strip for `current` (0-based) out of `page_count` pages.
///
/// Up to 7 pages are listed in full. Otherwise: the first page, an ellipsis
/// when the window does not reach it, up to five pages centred on the current
/// one, an ellipsis when pages are skipped before the end, and the last page.
pub fn page_items(current: usize, page_count: usize) -> Vec<PageItem> {
    if page_count <= MAX_PLAIN_PAGES {
        return (0..page_count).map(PageItem::Page).collect();
    }

    let last = page_count - 1;
    let current = current.min(last);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(last - 1);

    let mut items = vec![PageItem::Page(0)];
    if start > 1 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < last - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(last));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis as E, Page as P};

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }

    #[test]
    fn test_clamp_holds_for_many_inputs() {
        for total in 0..60 {
            for size in 1..12 {
                let count = page_count(total, size);
                for requested in 0..20 {
                    let page = clamp_page(requested, count);
                    if count == 0 {
                        assert_eq!(page, 0);
                    } else {
                        assert!(page < count);
                    }
                }
            }
        }
    }

    #[test]
    fn test_range_of_last_page() {
        let state = PaginationState { page_index: 2, page_size: 10 };
        assert_eq!(state.range(25), 20..25);
        assert_eq!(PaginationState::new(10).range(0), 0..0);
    }

    #[test]
    fn test_small_counts_list_every_page() {
        assert_eq!(page_items(0, 0), vec![]);
        assert_eq!(page_items(3, 7), (0..7).map(P).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(page_items(0, 20), vec![P(0), P(1), P(2), E, P(19)]);
        assert_eq!(page_items(3, 20), vec![P(0), P(1), P(2), P(3), P(4), P(5), E, P(19)]);
        assert_eq!(page_items(4, 20), vec![P(0), E, P(2), P(3), P(4), P(5), P(6), E, P(19)]);
    }

    #[test]
    fn test_window_in_middle_and_end() {
        assert_eq!(
            page_items(10, 20),
            vec![P(0), E, P(8), P(9), P(10), P(11), P(12), E, P(19)]
        );
        assert_eq!(page_items(19, 20), vec![P(0), E, P(17), P(18), P(19)]);
        assert_eq!(page_items(16, 20), vec![P(0), E, P(14), P(15), P(16), P(17), P(18), P(19)]);
    }

    #[test]
    fn test_eight_pages() {
        assert_eq!(page_items(0, 8), vec![P(0), P(1), P(2), E, P(7)]);
    }

    #[test]
    fn test_leading_ellipsis_only_when_pages_are_hidden() {
        // page 4 (1-based): the window already touches page 2
        assert_eq!(
            page_items(3, 20),
            vec![P(0), P(1), P(2), P(3), P(4), P(5), E, P(19)]
        );
        assert_eq!(
            page_items(4, 20),
            vec![P(0), E, P(2), P(3), P(4), P(5), P(6), E, P(19)]
        );
    }
}
