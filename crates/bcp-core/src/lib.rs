//! bcp Core - Shared library for the business continuity register
//!
//! This crate provides the core functionality for the `bcp` CLI:
//! - Risk and plan records persisted as one JSON document
//! - Keyword search across risks and plans
//! - Count-based readiness review

pub mod constants;
pub mod error;
pub mod model;
pub mod paths;
pub mod readiness;
pub mod search;
pub mod store;

// Re-exports for convenience
pub use error::StoreError;
pub use model::{Document, Plan, Rating, Risk};
pub use readiness::{review_readiness, Readiness, ReadinessReport};
pub use search::{search, SearchResults};
pub use store::{LoadOutcome, RecoveryReason, SharedStore, Store};
