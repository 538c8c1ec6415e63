//! Domain models for handicap history and posted scores.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::ids::{MemberId, ScoreId};

/// A posted round, owned by the external score store. Read-only to this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score_id: ScoreId,
    /// Gross score for the round; missing data degrades to a zero differential.
    pub score: Option<f64>,
    pub rating: Option<f64>,
    pub slope: Option<f64>,
}

/// One handicap-history entry per member per scoring event.
///
/// `date_played` orders a member's history; records sharing a date keep their
/// original sequence order. Only `new_hcap` and `no_scores` are written by
/// this core, and only by the recompute service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapHistoryRecord {
    pub member_id: MemberId,
    /// Absent means no associated round: the index was carried over manually.
    pub score_id: Option<ScoreId>,
    pub date_played: Date,
    pub posted_score: Option<f64>,
    /// Index stored on the member before this recomputation pass.
    pub current_hcap: f64,
    /// Engine output, formatted to one decimal with an optional trailing `*`
    /// insufficient-data marker. Empty means no index was computable.
    pub new_hcap: String,
    pub no_scores: bool,
}

impl HandicapHistoryRecord {
    pub fn new(
        member_id: MemberId,
        score_id: Option<ScoreId>,
        date_played: Date,
        posted_score: Option<f64>,
        current_hcap: f64,
    ) -> Self {
        Self {
            member_id,
            score_id,
            date_played,
            posted_score,
            current_hcap,
            new_hcap: String::new(),
            no_scores: false,
        }
    }
}

/// Outbound request to patch a member's stored handicap. Pure data: the
/// engine emits these and a separately sequenced dispatcher applies them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberHandicapUpdate {
    pub member_id: MemberId,
    pub handicap: f64,
}
