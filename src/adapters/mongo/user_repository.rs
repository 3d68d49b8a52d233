//! MongoDB implementation of UserRepository.
//!
//! The two non-trivial operations are the idempotent get-or-create (a single
//! upsert-by-login with `$setOnInsert` defaults) and the duplicate-key
//! recovery behind it. Everything else is uniform CRUD over the typed
//! collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Uuid as BsonUuid};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, PageList, StoreError, UserId};
use crate::domain::user::UserEntity;
use crate::ports::UserRepository;

use super::backend_error;

/// Name of the backing collection; part of the external contract.
pub const USERS_COLLECTION: &str = "users";

/// Server error code raised by a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB implementation of UserRepository.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Opens the `users` collection and declares the unique ascending index
    /// on `Login`. Index creation is idempotent, so constructing several
    /// stores over the same database is safe.
    pub async fn new(database: &Database) -> Result<Self, StoreError> {
        let collection = database.collection::<UserDocument>(USERS_COLLECTION);
        let index = IndexModel::builder()
            .keys(doc! { "Login": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection
            .create_index(index)
            .await
            .map_err(|e| backend_error("create login index", e))?;
        Ok(Self { collection })
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<UserEntity>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "Login": login })
            .await
            .map_err(|e| backend_error("find user by login", e))?;
        Ok(document.map(Into::into))
    }

    /// Re-read after an upsert observed the login: the document must exist.
    async fn require_by_login(&self, login: &str) -> Result<UserEntity, StoreError> {
        self.find_by_login(login).await?.ok_or_else(|| {
            StoreError::unavailable(format!("login '{}' vanished after upsert", login))
        })
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: &UserEntity) -> Result<UserEntity, StoreError> {
        // The caller-provided identifier is discarded; the store mints its own.
        let stored = user.clone().with_id(UserId::new());
        self.collection
            .insert_one(UserDocument::from(&stored))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    StoreError::duplicate_login(&stored.login)
                } else {
                    backend_error("insert user", e)
                }
            })?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserEntity>, StoreError> {
        let document = self
            .collection
            .find_one(doc! { "_id": BsonUuid::from_uuid_1(id.into_uuid()) })
            .await
            .map_err(|e| backend_error("find user by id", e))?;
        Ok(document.map(Into::into))
    }

    async fn get_or_create_by_login(&self, login: &str) -> Result<UserEntity, StoreError> {
        let defaults = doc! {
            "$setOnInsert": {
                "_id": BsonUuid::from_uuid_1(UserId::new().into_uuid()),
                "Login": login,
                "FirstName": "",
                "LastName": "",
                "GamesPlayed": 0,
                "CurrentGameId": Bson::Null,
            }
        };

        let result = self
            .collection
            .find_one_and_update(doc! { "Login": login }, defaults)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await;

        match result {
            Ok(Some(document)) => Ok(document.into()),
            // With upsert and the post-image requested the document is always
            // present; treat an empty result like the lost race below.
            Ok(None) => self.require_by_login(login).await,
            Err(e) if is_duplicate_key(&e) => {
                // Lost the upsert race; the winner's document is now visible.
                tracing::debug!("upsert race lost for login '{}', re-reading", login);
                self.require_by_login(login).await
            }
            Err(e) => Err(backend_error("get or create user by login", e)),
        }
    }

    async fn update(&self, user: &UserEntity) -> Result<(), StoreError> {
        // An unknown identifier matches nothing; that is a silent no-op.
        self.collection
            .replace_one(
                doc! { "_id": BsonUuid::from_uuid_1(user.id.into_uuid()) },
                UserDocument::from(user),
            )
            .await
            .map_err(|e| backend_error("update user", e))?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        self.collection
            .delete_one(doc! { "_id": BsonUuid::from_uuid_1(id.into_uuid()) })
            .await
            .map_err(|e| backend_error("delete user", e))?;
        Ok(())
    }

    async fn get_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PageList<UserEntity>, StoreError> {
        // Two round-trips without a session: the count and the slice may
        // observe different snapshots under concurrent writes.
        let total_count = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(|e| backend_error("count users", e))?;

        let (skip, limit) = page_window(page_number, page_size);
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "Login": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| backend_error("list users page", e))?
            .try_collect()
            .await
            .map_err(|e| backend_error("read users page", e))?;

        let items = documents.into_iter().map(Into::into).collect();
        Ok(PageList::new(items, total_count, page_number, page_size))
    }

    async fn update_or_insert(&self, _user: &UserEntity) -> Result<bool, StoreError> {
        Err(StoreError::Unsupported {
            operation: "update_or_insert",
        })
    }
}

/// Skip/limit window for a 1-based page. Page zero is clamped to page one.
fn page_window(page_number: u32, page_size: u32) -> (u64, i64) {
    let skip = u64::from(page_number.saturating_sub(1)) * u64::from(page_size);
    (skip, i64::from(page_size))
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// Wire shape of a user profile. Field names are part of the external
/// contract; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct UserDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    login: String,
    first_name: String,
    last_name: String,
    games_played: u32,
    current_game_id: Option<BsonUuid>,
}

impl From<&UserEntity> for UserDocument {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: BsonUuid::from_uuid_1(user.id.into_uuid()),
            login: user.login.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            games_played: user.games_played,
            current_game_id: user
                .current_game_id
                .map(|id| BsonUuid::from_uuid_1(id.into_uuid())),
        }
    }
}

impl From<UserDocument> for UserEntity {
    fn from(document: UserDocument) -> Self {
        Self {
            id: UserId::from_uuid(document.id.to_uuid_1()),
            login: document.login,
            first_name: document.first_name,
            last_name: document.last_name,
            games_played: document.games_played,
            current_game_id: document
                .current_game_id
                .map(|id| GameId::from_uuid(id.to_uuid_1())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_is_one_based() {
        assert_eq!(page_window(1, 10), (0, 10));
        assert_eq!(page_window(2, 2), (2, 2));
        assert_eq!(page_window(4, 25), (75, 25));
    }

    #[test]
    fn page_window_clamps_page_zero() {
        assert_eq!(page_window(0, 10), (0, 10));
    }

    #[test]
    fn document_round_trips_through_entity() {
        let user = UserEntity {
            id: UserId::new(),
            login: "alice".into(),
            first_name: "Alice".into(),
            last_name: String::new(),
            games_played: 3,
            current_game_id: Some(GameId::new()),
        };
        let restored = UserEntity::from(UserDocument::from(&user));
        assert_eq!(restored, user);
    }

    #[test]
    fn document_keeps_legacy_field_names() {
        let user = UserEntity::with_login(UserId::new(), "alice");
        let document = mongodb::bson::to_document(&UserDocument::from(&user)).unwrap();

        assert!(document.contains_key("_id"));
        assert_eq!(document.get_str("Login").unwrap(), "alice");
        assert_eq!(document.get_str("FirstName").unwrap(), "");
        assert_eq!(document.get_str("LastName").unwrap(), "");
        assert!(document.contains_key("GamesPlayed"));
        // Absent game reference is stored as an explicit null.
        assert_eq!(document.get("CurrentGameId"), Some(&Bson::Null));
    }
}
