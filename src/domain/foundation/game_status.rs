//! Game session status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a game session.
///
/// `WaitingToStart` is the only value the persistence layer interprets: it
/// gates player admission through the conditional replace. The full state
/// machine (WaitingToStart -> Playing -> Finished, Canceled from either
/// non-terminal state) belongs to the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    WaitingToStart,
    Playing,
    Finished,
    Canceled,
}

impl GameStatus {
    /// Stable string encoding used in stored documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaitingToStart => "WaitingToStart",
            Self::Playing => "Playing",
            Self::Finished => "Finished",
            Self::Canceled => "Canceled",
        }
    }

    /// True while new players may still be admitted.
    pub fn is_waiting_to_start(&self) -> bool {
        matches!(self, Self::WaitingToStart)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_waiting_to_start_admits_players() {
        assert!(GameStatus::WaitingToStart.is_waiting_to_start());
        assert!(!GameStatus::Playing.is_waiting_to_start());
        assert!(!GameStatus::Finished.is_waiting_to_start());
        assert!(!GameStatus::Canceled.is_waiting_to_start());
    }

    #[test]
    fn string_encoding_is_stable() {
        assert_eq!(GameStatus::WaitingToStart.as_str(), "WaitingToStart");
        assert_eq!(GameStatus::Canceled.to_string(), "Canceled");
    }
}
