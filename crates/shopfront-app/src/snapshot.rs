//! Render snapshot
//!
//! A serializable projection of the view state, published on the engine's
//! watch channel after every processed message. A rendering layer (or the
//! headless driver's JSON output) consumes these instead of reaching into
//! [`ViewState`] directly.

use serde::{Deserialize, Serialize};

use crate::state::ViewState;
use shopfront_core::{Pagination, Product};

/// Everything a renderer needs for one frame of the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Query string for the committed selection, without a leading `?`.
    pub query: String,

    /// Search box contents (typed, not necessarily committed).
    pub search_input: String,

    /// Expanded sidebar category, if any.
    pub expanded_category: Option<String>,

    /// Count of products matching all active constraints.
    pub filtered_count: usize,

    /// 1-based active page.
    pub page: u32,

    pub total_pages: u32,

    /// Products on the active page. Empty both for no matches and for an
    /// out-of-range page.
    pub items: Vec<Product>,

    /// Pagination controls; `None` when suppressed (single page).
    pub pagination: Option<Pagination>,

    /// True until the one-shot initial-load timer fires.
    pub initial_loading: bool,

    /// True while the filter-settle debounce window is open.
    pub filter_loading: bool,

    /// True when no product matches (the "No items found" state).
    pub no_items: bool,
}

impl Snapshot {
    /// Project the current state into a frame.
    pub fn capture(state: &ViewState) -> Self {
        let items: Vec<Product> = state
            .current_page_items()
            .into_iter()
            .cloned()
            .collect();
        Self {
            query: state.query.to_params().to_query_string(),
            search_input: state.search_input.clone(),
            expanded_category: state.expanded_category.clone(),
            filtered_count: state.filtered_products().len(),
            page: state.query.page_number(),
            total_pages: state.total_pages(),
            items,
            pagination: state.pagination(),
            initial_loading: state.initial_loading,
            filter_loading: state.filter_loading,
            no_items: state.no_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use shopfront_core::{builtin_catalog, QueryParams};

    fn snapshot_for(query: &str) -> Snapshot {
        let state = ViewState::new(Arc::new(builtin_catalog()), &QueryParams::parse(query));
        Snapshot::capture(&state)
    }

    #[test]
    fn test_capture_full_catalog() {
        let snap = snapshot_for("");
        assert_eq!(snap.filtered_count, 9);
        assert_eq!(snap.page, 1);
        assert_eq!(snap.total_pages, 1);
        assert_eq!(snap.items.len(), 9);
        assert!(snap.pagination.is_none());
        assert!(snap.initial_loading);
        assert!(!snap.no_items);
    }

    #[test]
    fn test_capture_no_items() {
        let snap = snapshot_for("search=xyzzy");
        assert_eq!(snap.filtered_count, 0);
        assert!(snap.items.is_empty());
        assert!(snap.no_items);
    }

    #[test]
    fn test_capture_preserves_query_string() {
        let snap = snapshot_for("category=Police&page=2");
        assert_eq!(snap.query, "category=Police&page=2");
        assert_eq!(snap.page, 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = snapshot_for("search=bdu");
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
