//! Store traits for the domain layer.

pub mod members;

pub use members::MemberStore;
