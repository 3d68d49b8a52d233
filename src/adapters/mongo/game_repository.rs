//! MongoDB implementation of GameRepository.
//!
//! The status-gated replace is the core here: a single `replace_one` with a
//! compound filter on identifier and status, accepted only when the server
//! reports a strictly positive modified count.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Uuid as BsonUuid};
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, GameStatus, StoreError, UserId};
use crate::domain::game::{GameEntity, Player};
use crate::ports::GameRepository;

use super::backend_error;

/// Name of the backing collection; part of the external contract.
pub const GAMES_COLLECTION: &str = "games";

/// MongoDB implementation of GameRepository.
#[derive(Clone)]
pub struct MongoGameRepository {
    collection: Collection<GameDocument>,
}

impl MongoGameRepository {
    /// Opens the `games` collection and declares a non-unique `Status` index
    /// so the waiting-list scan does not walk the collection. Creation is
    /// idempotent.
    pub async fn new(database: &Database) -> Result<Self, StoreError> {
        let collection = database.collection::<GameDocument>(GAMES_COLLECTION);
        let index = IndexModel::builder().keys(doc! { "Status": 1 }).build();
        collection
            .create_index(index)
            .await
            .map_err(|e| backend_error("create status index", e))?;
        Ok(Self { collection })
    }
}

#[async_trait]
impl GameRepository for MongoGameRepository {
    async fn insert(&self, game: &GameEntity) -> Result<GameEntity, StoreError> {
        self.collection
            .insert_one(GameDocument::from(game))
            .await
            .map_err(|e| backend_error("insert game", e))?;
        Ok(game.clone())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Option<GameEntity>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": BsonUuid::from_uuid_1(id.into_uuid()) })
            .await
            .map_err(|e| backend_error("find game by id", e))?;
        Ok(document.map(Into::into))
    }

    async fn update(&self, game: &GameEntity) -> Result<(), StoreError> {
        self.collection
            .replace_one(
                doc! { "_id": BsonUuid::from_uuid_1(game.id.into_uuid()) },
                GameDocument::from(game),
            )
            .await
            .map_err(|e| backend_error("update game", e))?;
        Ok(())
    }

    async fn find_waiting_to_start(&self, limit: u32) -> Result<Vec<GameEntity>, StoreError> {
        // A find limit of zero means "no limit" to the server; the contract
        // says zero games.
        if limit == 0 {
            return Ok(Vec::new());
        }

        let documents: Vec<GameDocument> = self
            .collection
            .find(doc! { "Status": GameStatus::WaitingToStart.as_str() })
            .limit(i64::from(limit))
            .await
            .map_err(|e| backend_error("find games waiting to start", e))?
            .try_collect()
            .await
            .map_err(|e| backend_error("read games waiting to start", e))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn try_update_waiting_to_start(&self, game: &GameEntity) -> Result<bool, StoreError> {
        let filter = doc! {
            "_id": BsonUuid::from_uuid_1(game.id.into_uuid()),
            "Status": GameStatus::WaitingToStart.as_str(),
        };

        let result = self
            .collection
            .replace_one(filter, GameDocument::from(game))
            .await
            .map_err(|e| backend_error("conditional game replace", e))?;

        // A zero modified count is the authoritative "lost the race" signal:
        // either the status moved on or the document never existed.
        let accepted = result.modified_count > 0;
        if !accepted {
            tracing::debug!(
                "conditional replace rejected for game {}; state has advanced",
                game.id
            );
        }
        Ok(accepted)
    }
}

/// Wire shape of a seated player.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PlayerDocument {
    user_id: BsonUuid,
    name: String,
}

/// Wire shape of a game session. Field names are part of the external
/// contract; `Status` is encoded as a stable string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GameDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    status: GameStatus,
    players: Vec<PlayerDocument>,
    turns_count: u32,
    current_turn_index: u32,
}

impl From<&GameEntity> for GameDocument {
    fn from(game: &GameEntity) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(game.id.into_uuid()),
            status: game.status,
            players: game
                .players
                .iter()
                .map(|player| PlayerDocument {
                    user_id: BsonUuid::from_uuid_1(player.user_id.into_uuid()),
                    name: player.name.clone(),
                })
                .collect(),
            turns_count: game.turns_count,
            current_turn_index: game.current_turn_index,
        }
    }
}

impl From<GameDocument> for GameEntity {
    fn from(document: GameDocument) -> Self {
        Self {
            id: GameId::from_uuid(document.id.to_uuid_1()),
            status: document.status,
            players: document
                .players
                .into_iter()
                .map(|player| Player {
                    user_id: UserId::from_uuid(player.user_id.to_uuid_1()),
                    name: player.name,
                })
                .collect(),
            turns_count: document.turns_count,
            current_turn_index: document.current_turn_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_entity() {
        let mut game = GameEntity::new(GameId::new(), 7);
        game.add_player(Player::new(UserId::new(), "alice"));
        game.status = GameStatus::Playing;
        game.current_turn_index = 2;

        let restored = GameEntity::from(GameDocument::from(&game));
        assert_eq!(restored, game);
    }

    #[test]
    fn document_encodes_status_as_stable_string() {
        let game = GameEntity::new(GameId::new(), 1);
        let document = mongodb::bson::to_document(&GameDocument::from(&game)).unwrap();

        assert!(document.contains_key("_id"));
        assert_eq!(document.get_str("Status").unwrap(), "WaitingToStart");
        assert!(document.contains_key("Players"));
        assert!(document.contains_key("TurnsCount"));
        assert!(document.contains_key("CurrentTurnIndex"));
    }

    #[test]
    fn status_filter_matches_document_encoding() {
        // The conditional-replace filter and the stored document must agree
        // on the status encoding, or the gate never matches.
        let game = GameEntity::new(GameId::new(), 1);
        let document = mongodb::bson::to_document(&GameDocument::from(&game)).unwrap();
        assert_eq!(
            document.get_str("Status").unwrap(),
            GameStatus::WaitingToStart.as_str()
        );
    }
}
