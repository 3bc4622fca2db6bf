//! # shopfront-core - Core Domain Types
//!
//! Foundation crate for the shopfront catalog. Provides the catalog data
//! model, text normalization, the query-state model with its query-string
//! codec, the matching predicate, pagination derivation, error handling, and
//! the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Category`], [`SubCategory`] - the sidebar taxonomy
//! - [`Product`], [`ProductCategory`], [`ProductDetails`] - catalog entries
//! - [`Catalog`] - the immutable collections, loaded once
//!
//! ### Query state (`query`)
//! - [`QueryParams`] - the externally-owned key/value parameter map
//! - [`QueryState`] - the six optional filter dimensions parsed from it
//!
//! ### Filtering (`filter`)
//! - [`is_match()`] - the conjunctive matching predicate
//! - [`filter_products()`] - order-preserving filtered view
//!
//! ### Pagination (`paging`)
//! - [`total_pages()`], [`page_slice()`], [`page_window()`] - derivation
//! - [`Pagination`] - control visibility for a rendering layer
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] / [`ResultExt`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shopfront_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod paging;
pub mod query;
pub mod text;

/// Prelude for common imports used throughout all shopfront crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{builtin_catalog, Catalog, Category, Product, ProductCategory, ProductDetails, SubCategory};
pub use error::{Error, Result, ResultExt};
pub use filter::{filter_products, is_match};
pub use paging::{page_slice, page_window, total_pages, Pagination, PAGE_SIZE, PAGE_WINDOW};
pub use query::{QueryParams, QueryState};
pub use text::{normalize, parse_page};
