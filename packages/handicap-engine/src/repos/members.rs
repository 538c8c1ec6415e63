//! Member-store port.

use async_trait::async_trait;

use crate::domain::ids::MemberId;
use crate::errors::domain::DomainError;

/// External member store, implemented by the surrounding service layer.
///
/// `update_handicap` is a partial update by member identifier. The engine
/// treats writes as best-effort and at-most-once; whatever timeout or retry
/// policy applies lives behind this trait.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn update_handicap(&self, member_id: MemberId, handicap: f64)
        -> Result<(), DomainError>;
}
