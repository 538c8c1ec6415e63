//! Normalization of raw upstream rows into typed domain records.
//!
//! Upstream member and score references arrive in more than one shape: a
//! bare numeric id, a numeric string, or an object wrapping an `id`/`_id`
//! field. That shape-sniffing is confined to this boundary; the rest of the
//! engine only ever sees resolved identifiers.

pub mod refs;
pub mod rows;

pub use refs::{member_ref, score_ref};
pub use rows::{history_batch, history_record, score_batch, score_record, ParsedBatch};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    #[error("malformed member reference: {0}")]
    MalformedMemberRef(String),
    #[error("malformed score reference: {0}")]
    MalformedScoreRef(String),
    #[error("missing or invalid date_played: {0}")]
    InvalidDate(String),
}
