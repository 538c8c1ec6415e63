//! Engine test support utilities
//!
//! Raw upstream-row fixtures for ingestion tests and unified logging
//! initialization for integration tests of embedding services.

pub mod fixtures;
pub mod logging;
pub mod unique_helpers;
