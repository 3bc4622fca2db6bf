//! Controller state (Model in TEA pattern)

use std::sync::Arc;

use shopfront_core::{filter_products, page_slice, total_pages, Catalog, Pagination, Product, QueryParams, QueryState};

/// Controller lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Processing messages normally
    #[default]
    Running,

    /// Torn down; timers cancelled, further messages are no-ops
    Disposed,
}

/// Complete state for the catalog view (the Model in TEA)
///
/// The committed query-parameter map is the single source of truth;
/// everything here is either derived from it ([`ViewState::query`]), a UI
/// cache re-derivable from it (`search_input`), or transient loading state.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The immutable catalog, loaded once at initialization.
    pub catalog: Arc<Catalog>,

    /// Filter state derived from the committed query parameters.
    pub query: QueryState,

    /// Search box text. A cache of `query.search`, plus whatever the user
    /// has typed but not yet submitted.
    pub search_input: String,

    /// Which category's subcategory list is expanded in the sidebar.
    /// At most one at a time; independent of the filter selection.
    pub expanded_category: Option<String>,

    /// True until the one-shot initial-load timer fires.
    pub initial_loading: bool,

    /// True while the filter-loading debounce window is open.
    pub filter_loading: bool,

    /// Generation counter for the debounce: bumped on every committed query
    /// change; a `FilterSettled` carrying an older generation is stale.
    pub settle_generation: u64,

    /// Current lifecycle phase.
    pub phase: Phase,
}

impl ViewState {
    /// Create the state from the incoming query-parameter store contents.
    ///
    /// `page` defaults to 1 when absent or non-numeric; the search box is
    /// seeded from the `search` parameter.
    pub fn new(catalog: Arc<Catalog>, params: &QueryParams) -> Self {
        let query = QueryState::from_params(params);
        let search_input = query.search.clone().unwrap_or_default();
        Self {
            catalog,
            query,
            search_input,
            expanded_category: None,
            initial_loading: true,
            filter_loading: false,
            settle_generation: 0,
            phase: Phase::Running,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Committed-State Synchronization
    // ─────────────────────────────────────────────────────────

    /// Re-derive local state from a freshly committed parameter map.
    ///
    /// Called for our own writes and for external navigation alike. The
    /// search box is re-synced because it is a cache of the committed
    /// `search` value, not an authority.
    pub fn apply_committed(&mut self, params: &QueryParams) {
        self.query = QueryState::from_params(params);
        self.search_input = self.query.search.clone().unwrap_or_default();
    }

    // ─────────────────────────────────────────────────────────
    // Local UI Helpers
    // ─────────────────────────────────────────────────────────

    /// Expand this category's subcategory list, collapsing any other; if it
    /// is already expanded, collapse it.
    pub fn toggle_expansion(&mut self, name: &str) {
        if self.expanded_category.as_deref() == Some(name) {
            self.expanded_category = None;
        } else {
            self.expanded_category = Some(name.to_string());
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    // ─────────────────────────────────────────────────────────
    // Derived State
    // ─────────────────────────────────────────────────────────

    /// Products matching all active constraints, source order preserved.
    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.catalog.products, &self.query)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.filtered_products().len())
    }

    /// The slice of filtered products for the active page. Empty for an
    /// out-of-range page (equivalent to the "no items" state).
    pub fn current_page_items(&self) -> Vec<&Product> {
        let filtered = self.filtered_products();
        page_slice(&filtered, self.query.page_number()).to_vec()
    }

    /// Pagination controls, or `None` when suppressed (≤ 1 page).
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::derive(self.query.page_number(), self.total_pages())
    }

    /// First-class empty state: no product matches the active constraints.
    pub fn no_items(&self) -> bool {
        self.filtered_products().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::builtin_catalog;

    fn state_with(params: QueryParams) -> ViewState {
        ViewState::new(Arc::new(builtin_catalog()), &params)
    }

    #[test]
    fn test_new_defaults() {
        let state = state_with(QueryParams::new());
        assert!(state.initial_loading);
        assert!(!state.filter_loading);
        assert_eq!(state.query.page_number(), 1);
        assert_eq!(state.search_input, "");
        assert!(state.expanded_category.is_none());
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_new_seeds_search_input_from_params() {
        let params = QueryParams::parse("search=bdu&page=2");
        let state = state_with(params);
        assert_eq!(state.search_input, "bdu");
        assert_eq!(state.query.page_number(), 2);
    }

    #[test]
    fn test_new_tolerates_malformed_page() {
        let params = QueryParams::parse("page=garbage");
        let state = state_with(params);
        assert_eq!(state.query.page_number(), 1);
    }

    #[test]
    fn test_toggle_expansion() {
        let mut state = state_with(QueryParams::new());
        state.toggle_expansion("Military");
        assert_eq!(state.expanded_category.as_deref(), Some("Military"));

        // A different category replaces the expansion
        state.toggle_expansion("Police");
        assert_eq!(state.expanded_category.as_deref(), Some("Police"));

        // Toggling the expanded one collapses
        state.toggle_expansion("Police");
        assert!(state.expanded_category.is_none());
    }

    #[test]
    fn test_apply_committed_resyncs_search_cache() {
        let mut state = state_with(QueryParams::parse("search=bdu"));
        assert_eq!(state.search_input, "bdu");

        state.apply_committed(&QueryParams::parse("category=Military"));
        assert_eq!(state.search_input, "");
        assert_eq!(state.query.category.as_deref(), Some("Military"));
        assert!(state.query.search.is_none());
    }

    #[test]
    fn test_derived_state_full_catalog() {
        let state = state_with(QueryParams::new());
        assert_eq!(state.filtered_products().len(), 9);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page_items().len(), 9);
        assert!(state.pagination().is_none());
        assert!(!state.no_items());
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let state = state_with(QueryParams::parse("page=2"));
        assert_eq!(state.total_pages(), 1);
        assert!(state.current_page_items().is_empty());
    }

    #[test]
    fn test_no_items_state() {
        let state = state_with(QueryParams::parse("search=xyzzy"));
        assert!(state.no_items());
        assert_eq!(state.total_pages(), 1);
        assert!(state.pagination().is_none());
    }
}
