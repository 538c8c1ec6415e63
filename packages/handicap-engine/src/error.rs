//! Engine-level error wrapper for embedding callers.
//!
//! The computation core itself never aborts a batch; these variants surface
//! only from the ingestion boundary and from member-store adapters supplied
//! by the caller.

use crate::errors::domain::DomainError;
use crate::ingest::IngestError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),
}
