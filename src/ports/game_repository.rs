//! Game repository port.
//!
//! Persists game sessions and gates lifecycle transitions on the stored
//! status. The status-gated replace is the correctness hinge for concurrent
//! joins: players racing to be admitted both issue it, only the first
//! succeeds, and the loser must re-read to see the new state.

use async_trait::async_trait;

use crate::domain::foundation::{GameId, StoreError};
use crate::domain::game::GameEntity;

/// Repository port for game session persistence.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Persists the session as given (identifier is caller-assigned) and
    /// returns it. No uniqueness guard beyond the primary identifier.
    async fn insert(&self, game: &GameEntity) -> Result<GameEntity, StoreError>;

    /// Finds a session by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: GameId) -> Result<Option<GameEntity>, StoreError>;

    /// Unconditional replace keyed on identifier, for trusted internal
    /// transitions that need no status gating. Silent no-op when absent.
    async fn update(&self, game: &GameEntity) -> Result<(), StoreError>;

    /// Returns at most `limit` sessions whose status is `WaitingToStart`.
    ///
    /// A limit of zero yields an empty list. The order is the backend's
    /// natural order; callers treating this as a FIFO admission queue must
    /// sort explicitly.
    async fn find_waiting_to_start(&self, limit: u32) -> Result<Vec<GameEntity>, StoreError>;

    /// Atomically replaces the session with the same identifier if, and only
    /// if, its stored status is still `WaitingToStart`.
    ///
    /// Returns `false` when the store is left unchanged: either the status
    /// has moved on or the document never existed; the two cases are not
    /// distinguished. A `false` return means "state has advanced" and the
    /// caller must re-read.
    async fn try_update_waiting_to_start(&self, game: &GameEntity) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn game_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn GameRepository) {}
    }
}
