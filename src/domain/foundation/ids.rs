//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a user profile.
///
/// Assigned by the store on first insert and never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random UserId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identifier. Never assigned by the store.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Creates a UserId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID by value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// True for the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a game session.
///
/// Unlike [`UserId`], game identifiers are caller-assigned on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Creates a new random GameId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero identifier.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Creates a GameId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID by value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    /// True for the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique_and_non_nil() {
        let a = UserId::new();
        let b = UserId::new();
        assert_ne!(a, b);
        assert!(!a.is_nil());
        assert!(UserId::nil().is_nil());
    }

    #[test]
    fn ids_round_trip_through_display() {
        let id = GameId::new();
        let parsed: GameId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
