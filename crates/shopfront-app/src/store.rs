//! Query-parameter store and scroll sink abstractions
//!
//! The store is the externally-owned source of truth for the committed
//! filter selection. In a browser this would be the URL's query string; the
//! engine only ever reads it at startup and replaces it wholesale on commit.

use shopfront_core::QueryParams;

/// Owner of the committed query-parameter map.
///
/// Writes are non-navigating replacements: committing must not itself
/// produce an external change notification, or every commit would be
/// processed twice.
pub trait QueryStore: Send {
    /// Current contents of the store.
    fn read(&self) -> QueryParams;

    /// Replace the store contents wholesale.
    fn replace(&mut self, params: &QueryParams);
}

/// In-memory store, used by the headless driver and in tests.
#[derive(Debug, Default)]
pub struct MemoryQueryStore {
    params: QueryParams,
}

impl MemoryQueryStore {
    pub fn new(params: QueryParams) -> Self {
        Self { params }
    }

    /// Parse an initial query string, e.g. `"?category=Police&page=2"`.
    pub fn from_query_string(query: &str) -> Self {
        Self {
            params: QueryParams::parse(query),
        }
    }
}

impl QueryStore for MemoryQueryStore {
    fn read(&self) -> QueryParams {
        self.params.clone()
    }

    fn replace(&mut self, params: &QueryParams) {
        self.params = params.clone();
    }
}

/// Receiver for scroll-to-top requests issued on page changes.
pub trait ScrollSink: Send {
    fn scroll_to_top(&mut self);
}

/// Discards scroll requests; for headless use.
#[derive(Debug, Default)]
pub struct NoopScroll;

impl ScrollSink for NoopScroll {
    fn scroll_to_top(&mut self) {}
}
