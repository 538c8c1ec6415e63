//! Applies drift updates against the external member store.
//!
//! Dispatch is deliberately separate from recomputation: the engine emits
//! pure update requests and this dispatcher sequences the writes. Writes
//! are best-effort and at-most-once; a rejected write is logged and never
//! retried, and never rolls back the in-memory recomputation.

use tracing::{debug, warn};

use crate::domain::records::MemberHandicapUpdate;
use crate::repos::members::MemberStore;

/// Member-store update dispatcher.
pub struct UpdateDispatcher;

impl UpdateDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Forward each update to the store in order. Returns how many writes
    /// were accepted.
    pub async fn dispatch(
        &self,
        store: &dyn MemberStore,
        updates: &[MemberHandicapUpdate],
    ) -> usize {
        let mut applied = 0;
        for update in updates {
            match store
                .update_handicap(update.member_id, update.handicap)
                .await
            {
                Ok(()) => {
                    applied += 1;
                    debug!(member = %update.member_id, handicap = update.handicap, "handicap updated");
                }
                Err(err) => {
                    warn!(
                        member = %update.member_id,
                        handicap = update.handicap,
                        error = %err,
                        "member handicap update rejected"
                    );
                }
            }
        }
        applied
    }
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
