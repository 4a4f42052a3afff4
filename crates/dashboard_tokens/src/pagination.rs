//! Page window computation for the pagination control.

use serde::Serialize;

use crate::tables::PaginationItemState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// One slot in the rendered page list.
pub enum PageItem {
    /// A page button (1-based).
    Page {
        /// Page number.
        number: usize,
        /// Style state of the button.
        state: PaginationItemState,
    },
    /// A collapsed run of pages.
    Ellipsis,
}

/// Upper bound on the pages shown either side of the current page.
pub const MAX_SIBLINGS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Current position within a paged list, with the current page clamped to `1..=total`.
pub struct PageWindow {
    /// Current page (1-based). Zero only when `total` is zero.
    pub current: usize,
    /// Total number of pages.
    pub total: usize,
}

impl PageWindow {
    /// Clamps `current` into range.
    pub fn new(current: usize, total: usize) -> Self {
        let current = if total == 0 { 0 } else { current.clamp(1, total) };
        Self { current, total }
    }

    /// State of the "previous" control.
    pub fn previous_state(self) -> PaginationItemState {
        if self.current > 1 {
            PaginationItemState::Enabled
        } else {
            PaginationItemState::Disabled
        }
    }

    /// State of the "next" control.
    pub fn next_state(self) -> PaginationItemState {
        if self.current < self.total {
            PaginationItemState::Enabled
        } else {
            PaginationItemState::Disabled
        }
    }

    /// Page items: first and last page, `siblings` pages either side of the current page, and
    /// ellipses for gaps. A gap of exactly one page shows that page instead of an ellipsis.
    ///
    /// `siblings` is capped at [`MAX_SIBLINGS`], so the result never exceeds
    /// `2 * MAX_SIBLINGS + 5` items whatever the page count.
    pub fn items(self, siblings: usize) -> Vec<PageItem> {
        if self.total == 0 {
            return Vec::new();
        }

        let siblings = siblings.min(MAX_SIBLINGS);
        let start = self.current.saturating_sub(siblings).max(1);
        let end = self.current.saturating_add(siblings).min(self.total);

        let mut pages = Vec::new();
        pages.push(1);
        pages.extend(start..=end);
        pages.push(self.total);
        pages.sort_unstable();
        pages.dedup();

        let mut items = Vec::with_capacity(pages.len() + 2);
        let mut previous: Option<usize> = None;
        for page in pages {
            match previous {
                Some(prev) if page - prev == 2 => items.push(self.page(prev + 1)),
                Some(prev) if page - prev > 2 => items.push(PageItem::Ellipsis),
                _ => {}
            }
            items.push(self.page(page));
            previous = Some(page);
        }
        items
    }

    fn page(self, number: usize) -> PageItem {
        let state = if number == self.current {
            PaginationItemState::Current
        } else {
            PaginationItemState::Enabled
        };
        PageItem::Page { number, state }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn empty_range_has_no_items_and_disabled_controls() {
        let window = PageWindow::new(3, 0);
        assert_eq!(window.current, 0);
        assert!(window.items(1).is_empty());
        assert_eq!(window.previous_state(), PaginationItemState::Disabled);
        assert_eq!(window.next_state(), PaginationItemState::Disabled);
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        let items = PageWindow::new(10, 20).items(1);
        assert_eq!(
            numbers(&items),
            vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
        );
        assert_eq!(
            items[3],
            PageItem::Page {
                number: 10,
                state: PaginationItemState::Current
            }
        );
    }

    #[test]
    fn single_page_gap_is_filled_instead_of_elided() {
        let items = PageWindow::new(4, 7).items(1);
        assert_eq!(
            numbers(&items),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn sibling_count_is_capped() {
        let huge = PageWindow::new(usize::MAX / 2, usize::MAX).items(usize::MAX);
        assert!(huge.len() <= 2 * MAX_SIBLINGS + 5, "{} items", huge.len());
        assert_eq!(
            huge.first(),
            Some(&PageItem::Page {
                number: 1,
                state: PaginationItemState::Enabled
            })
        );
        assert_eq!(
            PageWindow::new(50, 100).items(usize::MAX),
            PageWindow::new(50, 100).items(MAX_SIBLINGS)
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        let window = PageWindow::new(99, 5);
        assert_eq!(window.current, 5);
        assert_eq!(window.next_state(), PaginationItemState::Disabled);
        assert_eq!(window.previous_state(), PaginationItemState::Enabled);
        assert_eq!(PageWindow::new(0, 5).current, 1);
    }
}
