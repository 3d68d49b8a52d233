//! User repository port.
//!
//! Persists user profiles keyed by a globally unique login.
//!
//! # Design
//!
//! - **Identity-minting insert**: the store, not the caller, assigns ids
//! - **Idempotent materialization**: `get_or_create_by_login` converges
//!   concurrent sign-ins on a single stored document
//! - **Login-ordered listing**: pagination is total because login is unique

use async_trait::async_trait;

use crate::domain::foundation::{PageList, StoreError, UserId};
use crate::domain::user::UserEntity;

/// Repository port for user profile persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a fresh profile. The caller-provided identifier is discarded
    /// and replaced with a newly minted one; the returned entity echoes the
    /// new identifier and every other field verbatim.
    ///
    /// # Errors
    ///
    /// - `DuplicateLogin` when the login collides with an existing document
    /// - `Unavailable` on backend failure
    async fn insert(&self, user: &UserEntity) -> Result<UserEntity, StoreError>;

    /// Finds a profile by identifier. Returns `None` if not found.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserEntity>, StoreError>;

    /// Returns the single persisted profile with this login, creating it with
    /// empty names, zero games played and no current game if absent.
    ///
    /// Concurrent callers observing the same absent login converge on the
    /// same stored document: exactly one insert happens, all callers see it.
    async fn get_or_create_by_login(&self, login: &str) -> Result<UserEntity, StoreError>;

    /// Replaces the document whose identifier equals `user.id`. A silent
    /// no-op when the identifier is unknown; the pre-image is never read.
    async fn update(&self, user: &UserEntity) -> Result<(), StoreError>;

    /// Removes the profile. A silent no-op when absent.
    async fn delete(&self, id: UserId) -> Result<(), StoreError>;

    /// Returns the `page_number`-th window (1-based) of the collection
    /// ordered ascending by login.
    ///
    /// The total count and the item slice are separate reads and may observe
    /// different snapshots under concurrent writes; treat the total as a
    /// best-effort figure. A page past the end carries an empty item list
    /// while still reporting the total.
    async fn get_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PageList<UserEntity>, StoreError>;

    /// Declared on the contract for legacy callers; no implementation in this
    /// crate supports it.
    ///
    /// # Errors
    ///
    /// - `Unsupported`, always
    async fn update_or_insert(&self, user: &UserEntity) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
