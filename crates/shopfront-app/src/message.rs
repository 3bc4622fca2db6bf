//! Message types for the controller (TEA pattern)

use shopfront_core::QueryParams;

/// All possible messages/actions in the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Filter Operations (invoked by the sidebar / grid)
    // ─────────────────────────────────────────────────────────
    /// Select or toggle-off a category filter. Clears the subcategory and
    /// any in-flight search, resets to page 1.
    SetCategory { name: String },

    /// Select or toggle-off a subcategory filter. Keeps the category,
    /// clears any in-flight search, resets to page 1.
    SetSubCategory { name: String },

    /// Commit the search box text. Empty text removes the constraint
    /// entirely (no empty-string parameter). Resets to page 1.
    SubmitSearch { text: String },

    /// Jump to a 1-based page. Callers bound it to `[1, total_pages]`.
    ChangePage { page: u32 },

    // ─────────────────────────────────────────────────────────
    // Local UI State
    // ─────────────────────────────────────────────────────────
    /// Expand/collapse a category's subcategory list in the sidebar.
    /// Purely local; never touches the query-parameter store.
    ToggleCategoryExpansion { name: String },

    /// The search box text changed (typing, not yet submitted).
    SearchInputChanged { text: String },

    // ─────────────────────────────────────────────────────────
    // Query Store Synchronization
    // ─────────────────────────────────────────────────────────
    /// The committed query-parameter store changed -- either one of our own
    /// writes or an external navigation. Local state is re-derived from it.
    QueryChanged { params: QueryParams },

    // ─────────────────────────────────────────────────────────
    // Timer Callbacks
    // ─────────────────────────────────────────────────────────
    /// The one-shot initial-load timer fired.
    InitialLoadFinished,

    /// The filter-loading debounce timer fired. Ignored unless `generation`
    /// matches the latest committed change.
    FilterSettled { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Tear the controller down; outstanding timers are cancelled.
    Teardown,
}
