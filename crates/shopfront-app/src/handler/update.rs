//! Main update function - handles state transitions (TEA pattern)
//!
//! Filter operation handlers live in `filters`; everything else is small
//! enough to stay inline.

use tracing::debug;

use crate::message::Message;
use crate::state::{Phase, ViewState};

use super::{filters, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut ViewState, message: Message) -> UpdateResult {
    if state.is_disposed() {
        // Late timer callbacks or queued operations against a torn-down
        // controller are no-ops.
        debug!("Dropping message on disposed controller: {:?}", message);
        return UpdateResult::none();
    }

    match message {
        // ─────────────────────────────────────────────────────────
        // Filter Operations
        // ─────────────────────────────────────────────────────────
        Message::SetCategory { name } => filters::handle_set_category(state, &name),
        Message::SetSubCategory { name } => filters::handle_set_subcategory(state, &name),
        Message::SubmitSearch { text } => filters::handle_submit_search(state, &text),
        Message::ChangePage { page } => filters::handle_change_page(state, page),

        // ─────────────────────────────────────────────────────────
        // Local UI State
        // ─────────────────────────────────────────────────────────
        Message::ToggleCategoryExpansion { name } => {
            state.toggle_expansion(&name);
            UpdateResult::none()
        }

        Message::SearchInputChanged { text } => {
            state.search_input = text;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Query Store Synchronization
        // ─────────────────────────────────────────────────────────
        Message::QueryChanged { params } => {
            state.apply_committed(&params);
            state.filter_loading = true;
            state.settle_generation += 1;
            debug!(
                generation = state.settle_generation,
                query = %params.to_query_string(),
                "Committed query changed"
            );
            UpdateResult::action(UpdateAction::ScheduleFilterSettle {
                generation: state.settle_generation,
            })
        }

        // ─────────────────────────────────────────────────────────
        // Timer Callbacks
        // ─────────────────────────────────────────────────────────
        Message::InitialLoadFinished => {
            state.initial_loading = false;
            UpdateResult::none()
        }

        Message::FilterSettled { generation } => {
            if generation == state.settle_generation {
                state.filter_loading = false;
            } else {
                // A newer change superseded this timer (debounce, not queue).
                debug!(
                    stale = generation,
                    current = state.settle_generation,
                    "Ignoring stale filter-settle timer"
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Teardown => {
            state.phase = Phase::Disposed;
            UpdateResult::none()
        }
    }
}
