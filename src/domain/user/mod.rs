//! User profile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, UserId};

/// User profile persisted in the `users` collection.
///
/// # Invariants
///
/// - `id` is assigned by the store on first insert and never rewritten
/// - `login` is globally unique (enforced by a unique ascending index)
/// - `current_game_id` is absent while the user is not seated in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: UserId,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
    pub games_played: u32,
    pub current_game_id: Option<GameId>,
}

impl UserEntity {
    /// Creates a fresh profile with empty names and no game history, the
    /// shape minted by `get_or_create_by_login`.
    pub fn with_login(id: UserId, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            first_name: String::new(),
            last_name: String::new(),
            games_played: 0,
            current_game_id: None,
        }
    }

    /// Returns this profile carrying `id` in place of the current identifier.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_login_mints_empty_profile() {
        let id = UserId::new();
        let user = UserEntity::with_login(id, "alice");
        assert_eq!(user.id, id);
        assert_eq!(user.login, "alice");
        assert!(user.first_name.is_empty());
        assert!(user.last_name.is_empty());
        assert_eq!(user.games_played, 0);
        assert!(user.current_game_id.is_none());
    }

    #[test]
    fn with_id_replaces_only_the_identifier() {
        let user = UserEntity::with_login(UserId::nil(), "bob");
        let minted = UserId::new();
        let stored = user.clone().with_id(minted);
        assert_eq!(stored.id, minted);
        assert_eq!(stored.login, user.login);
    }
}
