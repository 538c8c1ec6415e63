//! Environment-driven configuration.

pub mod method;

pub use method::scoring_method;
