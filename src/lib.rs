//! Game Store - MongoDB persistence adapters for a game-hosting domain.
//!
//! This crate persists two aggregates: user profiles keyed by a globally
//! unique login, and game sessions whose lifecycle transitions are gated on
//! the persisted status. Both repositories defer all synchronization to the
//! backend's per-document atomic writes.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
