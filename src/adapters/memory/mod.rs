//! In-memory adapters for the repository ports.
//!
//! These honor the same contracts as the MongoDB adapters: login uniqueness,
//! identifier minting, the status gate and login-ordered pagination, all made
//! atomic by a single in-process lock instead of per-document server writes.
//! Used by the contract tests and for local development without a backend.

mod game_repository;
mod user_repository;

pub use game_repository::InMemoryGameRepository;
pub use user_repository::InMemoryUserRepository;
