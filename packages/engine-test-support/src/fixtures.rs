//! Raw upstream-row fixtures.
//!
//! These build rows in the shapes the external record store actually
//! emits: bare numeric identifiers and, for older rows, identifiers
//! wrapped in an object with an `_id` field.

use serde_json::{json, Value};

/// A history row with bare identifiers.
pub fn history_row(
    member_id: i64,
    score_id: Option<i64>,
    date_played: &str,
    posted_score: f64,
    current_hcap: f64,
) -> Value {
    json!({
        "memberId": member_id,
        "scoreId": score_id,
        "datePlayed": date_played,
        "postedScore": posted_score,
        "currentHCap": current_hcap,
    })
}

/// The same history row in the legacy object-wrapped identifier shape.
pub fn wrapped_history_row(
    member_id: i64,
    score_id: Option<i64>,
    date_played: &str,
    posted_score: f64,
    current_hcap: f64,
) -> Value {
    json!({
        "memberId": {"_id": member_id},
        "scoreId": score_id.map(|id| json!({"_id": id})),
        "datePlayed": date_played,
        "postedScore": posted_score,
        "currentHCap": current_hcap,
    })
}

/// A posted-score row with full course data.
pub fn score_row(score_id: i64, score: f64, rating: f64, slope: f64) -> Value {
    json!({
        "scoreId": score_id,
        "score": score,
        "courseRating": rating,
        "courseSlope": slope,
    })
}
