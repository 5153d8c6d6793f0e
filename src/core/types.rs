//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since an arbitrary, run-local epoch
pub type Millis = u64;

/// One of the three hand shapes
///
/// Ordered cyclically Rock -> Paper -> Scissors -> Rock for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices in cycling order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Choice at a position in the cycle (wraps modulo 3)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position of this choice in the cycle
    pub fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    /// Whether this choice beats the other
    pub fn beats(self, other: Choice) -> bool {
        match self {
            Choice::Rock => other == Choice::Scissors,
            Choice::Paper => other == Choice::Rock,
            Choice::Scissors => other == Choice::Paper,
        }
    }

    /// File stem of the sprite for this choice
    pub fn asset_stem(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Outcome of a round from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Outcome {
    pub fn is_tie(self) -> bool {
        self == Outcome::Tie
    }
}

/// Mode of the round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Choosing,
    ShowingResult,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for choice in Choice::ALL {
            assert_eq!(Choice::from_index(choice.index()), choice);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Choice::from_index(3), Choice::Rock);
        assert_eq!(Choice::from_index(5), Choice::Scissors);
    }

    #[test]
    fn test_beats_is_canonical() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(!Choice::Rock.beats(Choice::Paper));
        assert!(!Choice::Rock.beats(Choice::Rock));
    }

    #[test]
    fn test_asset_stems() {
        assert_eq!(Choice::Rock.asset_stem(), "rock");
        assert_eq!(Choice::Paper.asset_stem(), "paper");
        assert_eq!(Choice::Scissors.asset_stem(), "scissors");
    }
}
