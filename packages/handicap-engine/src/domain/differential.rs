//! Scoring-differential calculation.

/// Round half-away-from-zero to one decimal place. Exact contract: the
/// published index and every differential go through this.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Course-adjusted scoring differential for a single round:
/// `round1((score - rating) * 113 / slope)`.
///
/// Any missing input, or a slope that is not strictly positive, degrades to
/// the neutral value `0.0` rather than failing the batch.
pub fn differential(score: Option<f64>, rating: Option<f64>, slope: Option<f64>) -> f64 {
    match (score, rating, slope) {
        (Some(score), Some(rating), Some(slope)) if slope > 0.0 => {
            round1((score - rating) * 113.0 / slope)
        }
        _ => 0.0,
    }
}
