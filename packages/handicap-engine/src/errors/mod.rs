//! Error types for the engine.

pub mod domain;
