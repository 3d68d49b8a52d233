//! Domain layer containing the persisted aggregates and shared primitives.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, statuses, errors, paging)
//! - `user` - User profile aggregate
//! - `game` - Game session aggregate

pub mod foundation;
pub mod game;
pub mod user;
