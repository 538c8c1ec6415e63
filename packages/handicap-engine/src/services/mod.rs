//! Services bridging the pure domain layer with external collaborators.

pub mod dispatch;
pub mod recompute;


pub use dispatch::UpdateDispatcher;
pub use recompute::{RecomputeOutcome, RecomputeService};
