//! shopfront-app - Catalog view-state controller
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! catalog view: the view state, the pure update function, and the Engine
//! that owns the timers and the query-parameter store. Configuration
//! loading and the snapshot projection for rendering layers live here too.

pub mod config;
pub mod engine;
pub mod handler;
pub mod message;
pub mod snapshot;
pub mod state;
pub mod store;

// Re-export primary types
pub use config::{Settings, TimingSettings};
pub use engine::{Engine, EngineHandle};
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use snapshot::Snapshot;
pub use state::{Phase, ViewState};
pub use store::{MemoryQueryStore, NoopScroll, QueryStore, ScrollSink};
