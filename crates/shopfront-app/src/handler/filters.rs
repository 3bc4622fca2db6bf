//! Filter operation handlers
//!
//! Every operation here produces a fresh parameter map and commits it via
//! [`UpdateAction::CommitQuery`]; the engine writes the store and routes a
//! `QueryChanged` back through `update()`, so the state mutation itself
//! happens on the committed-change path shared with external navigation.

use tracing::info;

use crate::state::ViewState;
use shopfront_core::QueryState;

use super::{UpdateAction, UpdateResult};

fn commit(next: QueryState) -> UpdateResult {
    UpdateResult::action(UpdateAction::CommitQuery {
        params: next.to_params(),
        scroll_to_top: false,
    })
}

/// Select a category, or toggle it off when it is already the active filter.
///
/// Always clears the subcategory (one from a previously selected category
/// must never persist under a new one) and any in-flight search, and resets
/// to page 1. The `page` key is dropped entirely; absence means page 1.
pub fn handle_set_category(state: &mut ViewState, name: &str) -> UpdateResult {
    let mut next = state.query.clone();

    if next.category.as_deref() == Some(name) {
        next.category = None;
    } else {
        next.category = Some(name.to_string());
    }
    next.subcategory = None;
    next.search = None;
    next.page = None;

    info!(category = ?next.category, "Category filter changed");
    commit(next)
}

/// Select a subcategory, or toggle it off. Keeps the category constraint,
/// clears any in-flight search, resets to page 1.
pub fn handle_set_subcategory(state: &mut ViewState, name: &str) -> UpdateResult {
    let mut next = state.query.clone();

    if next.subcategory.as_deref() == Some(name) {
        next.subcategory = None;
    } else {
        next.subcategory = Some(name.to_string());
    }
    next.search = None;
    next.page = None;

    info!(subcategory = ?next.subcategory, "Subcategory filter changed");
    commit(next)
}

/// Commit the search box text. Empty text removes the `search` key entirely;
/// absence, not an empty string, is the "no constraint" state. Composes with
/// any active category/subcategory filters. Resets to page 1.
pub fn handle_submit_search(state: &mut ViewState, text: &str) -> UpdateResult {
    let mut next = state.query.clone();

    next.search = if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    };
    next.page = None;

    info!(search = ?next.search, "Search submitted");
    commit(next)
}

/// Jump to a 1-based page. The pagination UI never offers an out-of-range
/// target; if one is requested anyway the page slice simply comes back
/// empty. Scrolls the grid back to the top.
pub fn handle_change_page(state: &mut ViewState, page: u32) -> UpdateResult {
    // The loading placeholder shows immediately, not only once the commit
    // round-trips through the store.
    state.filter_loading = true;

    let mut next = state.query.clone();
    next.page = Some(page.to_string());

    info!(page, "Page changed");
    UpdateResult::action(UpdateAction::CommitQuery {
        params: next.to_params(),
        scroll_to_top: true,
    })
}
