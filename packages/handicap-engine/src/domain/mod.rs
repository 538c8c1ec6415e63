//! Domain layer: pure handicap computation types and helpers.

pub mod differential;
pub mod ids;
pub mod index;
pub mod records;
pub mod tables;

#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_differential;
#[cfg(test)]
mod tests_index;
#[cfg(test)]
mod tests_props_index;

// Re-exports for ergonomics
pub use differential::{differential, round1};
pub use ids::{MemberId, ScoreId};
pub use index::{compute_index, parse_index, DatedDifferential, Method};
pub use records::{HandicapHistoryRecord, MemberHandicapUpdate, ScoreRecord};
pub use tables::num_differentials_to_use;
