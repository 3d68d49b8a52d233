//! In-memory implementation of UserRepository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{PageList, StoreError, UserId};
use crate::domain::user::UserEntity;
use crate::ports::UserRepository;

/// In-memory implementation of UserRepository.
///
/// Clones share the same map, mirroring stores built over one database.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, UserEntity>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &UserEntity) -> Result<UserEntity, StoreError> {
        let mut users = self.users.lock().await;
        if users.values().any(|existing| existing.login == user.login) {
            return Err(StoreError::duplicate_login(&user.login));
        }
        let stored = user.clone().with_id(UserId::new());
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserEntity>, StoreError> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn get_or_create_by_login(&self, login: &str) -> Result<UserEntity, StoreError> {
        // The lock spans lookup and insert, so concurrent callers converge on
        // one document just as the server-side upsert guarantees.
        let mut users = self.users.lock().await;
        if let Some(existing) = users.values().find(|user| user.login == login) {
            return Ok(existing.clone());
        }
        let created = UserEntity::with_login(UserId::new(), login);
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &UserEntity) -> Result<(), StoreError> {
        let mut users = self.users.lock().await;
        if let Some(slot) = users.get_mut(&user.id) {
            *slot = user.clone();
        }
        // Unknown identifier: silent no-op, as the contract requires.
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        self.users.lock().await.remove(&id);
        Ok(())
    }

    async fn get_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PageList<UserEntity>, StoreError> {
        let users = self.users.lock().await;
        let total_count = users.len() as u64;

        let mut ordered: Vec<UserEntity> = users.values().cloned().collect();
        ordered.sort_by(|a, b| a.login.cmp(&b.login));

        let skip = page_number.saturating_sub(1) as usize * page_size as usize;
        let items: Vec<UserEntity> = ordered
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Ok(PageList::new(items, total_count, page_number, page_size))
    }

    async fn update_or_insert(&self, _user: &UserEntity) -> Result<bool, StoreError> {
        Err(StoreError::Unsupported {
            operation: "update_or_insert",
        })
    }
}
