#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Handicap-index computation engine for a golf-league record keeper.
//!
//! A pure computation library: the surrounding service layer fetches
//! history and score records, calls [`RecomputeService::recompute`], and
//! forwards the emitted [`MemberHandicapUpdate`]s through the
//! [`UpdateDispatcher`] to its member store.

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod ingest;
pub mod repos;
pub mod services;


// Re-exports for public API
pub use config::scoring_method;
pub use domain::{
    compute_index, differential, parse_index, DatedDifferential, HandicapHistoryRecord,
    MemberHandicapUpdate, MemberId, Method, ScoreId, ScoreRecord,
};
pub use error::EngineError;
pub use errors::domain::DomainError;
pub use ingest::{history_batch, score_batch, IngestError, ParsedBatch};
pub use repos::MemberStore;
pub use services::{RecomputeOutcome, RecomputeService, UpdateDispatcher};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
