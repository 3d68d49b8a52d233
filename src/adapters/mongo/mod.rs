//! MongoDB adapters for the repository ports.
//!
//! Documents mirror the legacy schema: `_id` is a binary UUID and the
//! remaining fields keep their PascalCase names (`Login`, `Status`, ...), so
//! data written by earlier deployments stays addressable.
//!
//! The adapters hold no in-process state beyond the driver's collection
//! handle, which is documented as safe for concurrent use. All
//! synchronization is deferred to the server's per-document atomic writes.

mod game_repository;
mod user_repository;

pub use game_repository::{MongoGameRepository, GAMES_COLLECTION};
pub use user_repository::{MongoUserRepository, USERS_COLLECTION};

use mongodb::{options::ClientOptions, Client, Database};

use crate::config::DatabaseConfig;
use crate::domain::foundation::StoreError;

/// Connects to MongoDB and returns the logical database handle.
///
/// The handle is cheap to clone and shared by every store built over it.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, StoreError> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| StoreError::unavailable(format!("invalid connection string: {}", e)))?;
    options.max_pool_size = Some(config.max_pool_size);
    options.connect_timeout = Some(config.connect_timeout());
    options.server_selection_timeout = Some(config.server_selection_timeout());

    let client = Client::with_options(options)
        .map_err(|e| StoreError::unavailable(format!("failed to build client: {}", e)))?;
    Ok(client.database(&config.database))
}

/// Maps a driver error onto the port's error surface, logging the detail.
pub(crate) fn backend_error(operation: &'static str, err: mongodb::error::Error) -> StoreError {
    tracing::error!("mongodb operation '{}' failed: {}", operation, err);
    StoreError::unavailable(format!("{}: {}", operation, err))
}
