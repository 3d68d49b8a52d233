//! Game session aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, GameStatus, UserId};

/// Player seated in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub user_id: UserId,
    pub name: String,
}

impl Player {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }
}

/// Game session persisted in the `games` collection.
///
/// The store reads only `status` (for the admission gate); every other field
/// is carried through untouched. Identifiers are caller-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntity {
    pub id: GameId,
    pub status: GameStatus,
    pub players: Vec<Player>,
    pub turns_count: u32,
    pub current_turn_index: u32,
}

impl GameEntity {
    /// Creates a fresh session in `WaitingToStart` with no players seated.
    pub fn new(id: GameId, turns_count: u32) -> Self {
        Self {
            id,
            status: GameStatus::WaitingToStart,
            players: Vec::new(),
            turns_count,
            current_turn_index: 0,
        }
    }

    /// Seats a player. Admission control belongs to the caller together with
    /// the store's conditional replace, not to this type.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// True while new players may still be admitted.
    pub fn is_waiting_to_start(&self) -> bool {
        self.status.is_waiting_to_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_waits_to_start_with_no_players() {
        let game = GameEntity::new(GameId::new(), 10);
        assert!(game.is_waiting_to_start());
        assert!(game.players.is_empty());
        assert_eq!(game.turns_count, 10);
        assert_eq!(game.current_turn_index, 0);
    }

    #[test]
    fn add_player_seats_in_order() {
        let mut game = GameEntity::new(GameId::new(), 5);
        game.add_player(Player::new(UserId::new(), "alice"));
        game.add_player(Player::new(UserId::new(), "bob"));
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.players[0].name, "alice");
    }
}
