//! Ports - repository contracts between the domain and the storage adapters.
//!
//! Following hexagonal architecture, ports define what the application needs
//! from persistence; adapters implement them. Both repositories here are
//! stateless over a thread-safe database handle and may be called from
//! arbitrary tasks in parallel.

mod game_repository;
mod user_repository;

pub use game_repository::GameRepository;
pub use user_repository::UserRepository;
