//! Handler module - TEA update function and message handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `filters`: Filter operation handlers (category/subcategory/search/page)

pub(crate) mod filters;
pub(crate) mod update;


use crate::message::Message;
use shopfront_core::QueryParams;

// Re-export main entry point
pub use update::update;

/// Actions that the engine should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Commit a new parameter map to the query-parameter store. The engine
    /// writes the store and feeds a `QueryChanged` back through the loop so
    /// own writes and external navigation re-derive state identically.
    CommitQuery {
        params: QueryParams,
        /// Page changes also scroll the grid back to the top.
        scroll_to_top: bool,
    },

    /// (Re)start the filter-loading debounce timer. Cancels any timer from
    /// an earlier generation.
    ScheduleFilterSettle { generation: u64 },
}

/// Result of processing one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
