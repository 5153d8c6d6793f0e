//! Round resolution rules

use crate::core::types::{Choice, Outcome};

/// Decide a round between the player and the computer
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    use Choice::*;

    match (player, computer) {
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Outcome::Tie,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Outcome::PlayerWins,
        (Scissors, Rock) | (Paper, Scissors) | (Rock, Paper) => Outcome::ComputerWins,
    }
}
