//! In-memory implementation of GameRepository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{GameId, StoreError};
use crate::domain::game::GameEntity;
use crate::ports::GameRepository;

/// In-memory implementation of GameRepository.
#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<Mutex<HashMap<GameId, GameEntity>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn insert(&self, game: &GameEntity) -> Result<GameEntity, StoreError> {
        self.games.lock().await.insert(game.id, game.clone());
        Ok(game.clone())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<GameEntity>, StoreError> {
        Ok(self.games.lock().await.get(&id).cloned())
    }

    async fn update(&self, game: &GameEntity) -> Result<(), StoreError> {
        let mut games = self.games.lock().await;
        if let Some(slot) = games.get_mut(&game.id) {
            *slot = game.clone();
        }
        Ok(())
    }

    async fn find_waiting_to_start(&self, limit: u32) -> Result<Vec<GameEntity>, StoreError> {
        let games = self.games.lock().await;
        Ok(games
            .values()
            .filter(|game| game.is_waiting_to_start())
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn try_update_waiting_to_start(&self, game: &GameEntity) -> Result<bool, StoreError> {
        // The lock spans the status check and the replace, mirroring the
        // server-side atomic conditional replace.
        let mut games = self.games.lock().await;
        match games.get_mut(&game.id) {
            Some(stored) if stored.is_waiting_to_start() => {
                *stored = game.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
