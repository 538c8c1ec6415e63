//! Identifier extraction from raw JSON values.

use serde_json::Value;

use crate::domain::ids::{MemberId, ScoreId};

fn raw_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        // One level of wrapping is observed upstream; deeper nesting is not.
        Value::Object(map) => map
            .get("id")
            .or_else(|| map.get("_id"))
            .and_then(|inner| match inner {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            }),
        _ => None,
    }
}

/// Resolve a member reference of any observed shape.
pub fn member_ref(value: &Value) -> Option<MemberId> {
    raw_id(value).map(MemberId::new)
}

/// Resolve an optional score reference. JSON null and absent both mean
/// "no associated round".
pub fn score_ref(value: Option<&Value>) -> Option<ScoreId> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => raw_id(v).map(ScoreId::new),
    }
}
