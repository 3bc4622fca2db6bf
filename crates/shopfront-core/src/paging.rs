//! Pagination derivation
//!
//! Fixed page size of 9; a 5-wide window of page numbers centered on the
//! current page and clamped to `[1, total]`. The whole control block is
//! suppressed when there is at most one page.

use serde::{Deserialize, Serialize};

/// Items per page. Fixed, not configurable.
pub const PAGE_SIZE: usize = 9;

/// Maximum page numbers shown in the pagination window.
pub const PAGE_WINDOW: u32 = 5;

/// Total page count for an item count: `max(1, ceil(count / PAGE_SIZE))`.
pub fn total_pages(count: usize) -> u32 {
    (count.div_ceil(PAGE_SIZE) as u32).max(1)
}

/// The slice of `items` for a 1-based page index.
///
/// An out-of-range page yields an empty slice; callers treat that as the
/// "no items" state rather than an error.
pub fn page_slice<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Consecutive page numbers to render: at most [`PAGE_WINDOW`] of them,
/// centered on `current` and clamped to `[1, total]`. Always contains
/// `current` when `current` is in range.
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(PAGE_WINDOW / 2).max(1);
    let mut end = start + PAGE_WINDOW - 1;
    if end > total {
        end = total;
        start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    }

    (start..=end).collect()
}

/// Rendering state for the pagination controls.
///
/// Prev/Next are hidden at their boundary; First/Last are always shown but
/// disabled at theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
    pub pages: Vec<u32>,
    pub show_prev: bool,
    pub show_next: bool,
    pub first_disabled: bool,
    pub last_disabled: bool,
}

impl Pagination {
    /// Derive the controls, or `None` when they are suppressed entirely
    /// (a single page, including the empty result set).
    pub fn derive(current: u32, total: u32) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        Some(Self {
            current,
            total,
            pages: page_window(current, total),
            show_prev: current > 1,
            show_next: current < total,
            first_disabled: current == 1,
            last_disabled: current == total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounding() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(18), 2);
        assert_eq!(total_pages(19), 3);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(page_slice(&items, 1), &items[0..9]);
        assert_eq!(page_slice(&items, 2), &items[9..18]);
        assert_eq!(page_slice(&items, 3), &items[18..20]);
        assert!(page_slice(&items, 4).is_empty());
    }

    #[test]
    fn test_page_slice_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(page_slice(&items, 1).is_empty());
    }

    #[test]
    fn test_page_window_centered() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_clamped_low() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_clamped_high() {
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_window_fewer_pages_than_window() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 2), vec![1, 2]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn test_page_window_invariant() {
        for total in 1..=12u32 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert_eq!(window.len() as u32, PAGE_WINDOW.min(total));
                assert!(window.contains(&current), "p={current} t={total}");
            }
        }
    }

    #[test]
    fn test_pagination_suppressed_for_single_page() {
        assert!(Pagination::derive(1, 1).is_none());
        assert!(Pagination::derive(1, 0).is_none());
    }

    #[test]
    fn test_pagination_boundary_flags() {
        let first = Pagination::derive(1, 4).unwrap();
        assert!(!first.show_prev);
        assert!(first.show_next);
        assert!(first.first_disabled);
        assert!(!first.last_disabled);

        let last = Pagination::derive(4, 4).unwrap();
        assert!(last.show_prev);
        assert!(!last.show_next);
        assert!(!last.first_disabled);
        assert!(last.last_disabled);

        let middle = Pagination::derive(2, 4).unwrap();
        assert!(middle.show_prev);
        assert!(middle.show_next);
        assert!(!middle.first_disabled);
        assert!(!middle.last_disabled);
    }
}
