//! Handicap-index selection and formatting.

use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use time::Date;

use crate::domain::differential::round1;
use crate::domain::tables::num_differentials_to_use;

/// Index-selection method. Controls the recency window, the bias factor
/// applied to the averaged differentials, and the published cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Usga,
    Roch,
}

impl Method {
    /// How many of the most recent non-zero differentials are considered.
    pub fn window(self) -> usize {
        match self {
            Method::Usga => 20,
            Method::Roch => 8,
        }
    }

    pub fn bias(self) -> f64 {
        match self {
            Method::Usga => 0.96,
            Method::Roch => 1.0,
        }
    }

    /// Maximum publishable index.
    pub fn cap(self) -> f64 {
        match self {
            Method::Usga => 54.0,
            Method::Roch => 26.0,
        }
    }
}

// Unrecognized method strings fall back to USGA rather than erroring; the
// value comes from configuration and a bad setting must not stop scoring.
impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roch" => Ok(Method::Roch),
            _ => Ok(Method::Usga),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Method::Usga => write!(f, "usga"),
            Method::Roch => write!(f, "roch"),
        }
    }
}

/// A differential paired with the date its round was played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedDifferential {
    pub date: Date,
    pub value: f64,
}

/// Compute the index string for a set of dated differentials.
///
/// Zero differentials are placeholders for missing data and are filtered
/// out before windowing. The result is formatted to one decimal, with a
/// trailing `*` marking an insufficient sample (fewer than three
/// differentials available or used). An empty string means no index was
/// computable at all.
pub fn compute_index(records: &[DatedDifferential], method: Method) -> String {
    let mut recent: Vec<DatedDifferential> =
        records.iter().copied().filter(|d| d.value != 0.0).collect();
    // Stable sort: same-date rounds keep their posted order.
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(method.window());

    let n = recent.len();
    if n == 0 {
        return String::new();
    }
    let num_to_use = num_differentials_to_use(n, method);

    let mut values: Vec<f64> = recent.iter().map(|d| d.value).collect();
    values.sort_by(f64::total_cmp);
    let average: f64 = values[..num_to_use].iter().sum::<f64>() / num_to_use as f64;

    let index = round1(average * method.bias()).min(method.cap());
    if n < 3 || num_to_use < 3 {
        format!("{index:.1}*")
    } else {
        format!("{index:.1}")
    }
}

/// Numeric value of a formatted index, ignoring the insufficient-data
/// marker. `None` for the empty (not computable) string.
pub fn parse_index(formatted: &str) -> Option<f64> {
    let trimmed = formatted.strip_suffix('*').unwrap_or(formatted);
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
