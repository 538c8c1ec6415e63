//! Rolling recomputation of historical handicap indexes.
//!
//! For every record in a member's history, the index is recomputed using
//! only the rounds that existed up to that record's play date. The as-of
//! window is built incrementally over the date-sorted group rather than by
//! rescanning the whole group per record; selection semantics are identical.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::domain::differential::differential;
use crate::domain::ids::{MemberId, ScoreId};
use crate::domain::index::{compute_index, parse_index, DatedDifferential, Method};
use crate::domain::records::{HandicapHistoryRecord, MemberHandicapUpdate, ScoreRecord};

/// Result of one recomputation pass. Records are mutated in place; updates
/// are pure data for the dispatcher.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecomputeOutcome {
    /// Member-store update requests, one per record whose fresh index
    /// numerically drifted from the stored one.
    pub updates: Vec<MemberHandicapUpdate>,
    /// Total records recomputed across all member groups.
    pub recomputed: usize,
}

#[derive(Debug, Clone, Copy)]
struct SnapshotEntry {
    dated: DatedDifferential,
    has_score: bool,
}

/// Handicap recomputation service.
pub struct RecomputeService;

impl RecomputeService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute `new_hcap`/`no_scores` for every history record, as of each
    /// record's own play date, and collect drift updates.
    ///
    /// Member groups are independent of one another; within a group the walk
    /// is strictly sequential because each record's window is everything
    /// accumulated before or simultaneous with it.
    pub fn recompute(
        &self,
        history: &mut [HandicapHistoryRecord],
        scores: &[ScoreRecord],
        method: Method,
    ) -> RecomputeOutcome {
        let scores_by_id: HashMap<ScoreId, &ScoreRecord> =
            scores.iter().map(|s| (s.score_id, s)).collect();

        // Group record positions per member; BTreeMap keeps pass order
        // deterministic. Positions preserve insertion order inside a group.
        let mut groups: BTreeMap<MemberId, Vec<usize>> = BTreeMap::new();
        for (pos, record) in history.iter().enumerate() {
            groups.entry(record.member_id).or_default().push(pos);
        }

        let mut outcome = RecomputeOutcome::default();
        for (member_id, mut positions) in groups {
            // Stable sort: same-date records keep their insertion order.
            positions.sort_by_key(|&pos| history[pos].date_played);
            debug!(member = %member_id, records = positions.len(), "recomputing member history");
            self.recompute_group(history, &scores_by_id, &positions, method, &mut outcome);
        }

        info!(
            recomputed = outcome.recomputed,
            drifted = outcome.updates.len(),
            "recomputation pass complete"
        );
        outcome
    }

    fn recompute_group(
        &self,
        history: &mut [HandicapHistoryRecord],
        scores_by_id: &HashMap<ScoreId, &ScoreRecord>,
        positions: &[usize],
        method: Method,
        outcome: &mut RecomputeOutcome,
    ) {
        let mut window: Vec<SnapshotEntry> = Vec::with_capacity(positions.len());
        let mut next = 0;
        while next < positions.len() {
            // The as-of window is inclusive of the whole same-date run, so
            // simultaneous rounds see each other regardless of sequence.
            let run_date = history[positions[next]].date_played;
            let run_start = next;
            while next < positions.len() && history[positions[next]].date_played == run_date {
                let record = &history[positions[next]];
                window.push(SnapshotEntry {
                    dated: DatedDifferential {
                        date: record.date_played,
                        value: backing_differential(record, scores_by_id),
                    },
                    has_score: record.score_id.is_some(),
                });
                next += 1;
            }

            for &pos in &positions[run_start..next] {
                let record = &mut history[pos];
                if window.len() == 1 && !window[0].has_score {
                    // Lone manual entry: nothing to average, the stored
                    // index is carried over verbatim.
                    record.new_hcap = format!("{}", record.current_hcap);
                    record.no_scores = true;
                } else {
                    let differentials: Vec<DatedDifferential> =
                        window.iter().map(|e| e.dated).collect();
                    record.new_hcap = compute_index(&differentials, method);
                    record.no_scores = false;
                }
                outcome.recomputed += 1;

                if let Some(fresh) = parse_index(&record.new_hcap) {
                    if fresh != record.current_hcap {
                        debug!(
                            member = %record.member_id,
                            stored = record.current_hcap,
                            fresh,
                            "handicap drift detected"
                        );
                        outcome.updates.push(MemberHandicapUpdate {
                            member_id: record.member_id,
                            handicap: fresh,
                        });
                    }
                }
            }
        }
    }
}

impl Default for RecomputeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Differential for a history record's backing round. An absent or
/// unresolved score reference degrades to the neutral zero value.
fn backing_differential(
    record: &HandicapHistoryRecord,
    scores_by_id: &HashMap<ScoreId, &ScoreRecord>,
) -> f64 {
    match record.score_id.and_then(|id| scores_by_id.get(&id)) {
        Some(score) => differential(record.posted_score, score.rating, score.slope),
        None => {
            if record.score_id.is_some() {
                debug!(member = %record.member_id, "score reference did not resolve");
            }
            0.0
        }
    }
}
