//! Row-level parsing of history and score batches.

use serde_json::Value;
use time::macros::format_description;
use time::Date;
use tracing::warn;

use crate::domain::records::{HandicapHistoryRecord, ScoreRecord};
use crate::ingest::refs::{member_ref, score_ref};
use crate::ingest::IngestError;

/// A parsed batch plus the number of rows that were skipped as malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBatch<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

fn parse_date(row: &Value) -> Result<Date, IngestError> {
    let raw = row
        .get("datePlayed")
        .and_then(Value::as_str)
        .ok_or_else(|| IngestError::InvalidDate(row.to_string()))?;
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, &format).map_err(|_| IngestError::InvalidDate(raw.to_string()))
}

/// Parse one handicap-history row.
///
/// A member reference that resolves to nothing makes the row unusable (there
/// is no group to recompute it under); everything else degrades field by
/// field.
pub fn history_record(row: &Value) -> Result<HandicapHistoryRecord, IngestError> {
    let member_id = row
        .get("memberId")
        .and_then(member_ref)
        .ok_or_else(|| IngestError::MalformedMemberRef(row.to_string()))?;
    let date_played = parse_date(row)?;

    Ok(HandicapHistoryRecord::new(
        member_id,
        score_ref(row.get("scoreId")),
        date_played,
        row.get("postedScore").and_then(Value::as_f64),
        row.get("currentHCap").and_then(Value::as_f64).unwrap_or(0.0),
    ))
}

/// Parse one posted-score row. Missing score/rating/slope stay `None` and
/// later degrade to a zero differential.
pub fn score_record(row: &Value) -> Result<ScoreRecord, IngestError> {
    let score_id = score_ref(row.get("scoreId").or_else(|| row.get("_id")))
        .ok_or_else(|| IngestError::MalformedScoreRef(row.to_string()))?;

    Ok(ScoreRecord {
        score_id,
        score: row.get("score").and_then(Value::as_f64),
        rating: row.get("courseRating").and_then(Value::as_f64),
        slope: row.get("courseSlope").and_then(Value::as_f64),
    })
}

/// Parse a batch of history rows, skipping malformed ones.
pub fn history_batch(rows: &[Value]) -> ParsedBatch<HandicapHistoryRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        match history_record(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "skipping malformed history row");
            }
        }
    }
    ParsedBatch { records, skipped }
}

/// Parse a batch of score rows, skipping malformed ones.
pub fn score_batch(rows: &[Value]) -> ParsedBatch<ScoreRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        match score_record(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "skipping malformed score row");
            }
        }
    }
    ParsedBatch { records, skipped }
}
