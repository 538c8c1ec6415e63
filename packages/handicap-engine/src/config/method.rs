//! Scoring-method selection from the environment.

use std::env;

use crate::domain::index::Method;

/// Environment variable naming the index-selection method.
pub const METHOD_ENV: &str = "HCAP_METHOD";

/// Resolve the configured scoring method.
///
/// Unset or unrecognized values fall back to `usga`; a bad setting must
/// never stop scoring.
pub fn scoring_method() -> Method {
    match env::var(METHOD_ENV) {
        Ok(value) => value.parse().unwrap_or_default(),
        Err(_) => Method::Usga,
    }
}
