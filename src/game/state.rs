//! Round state owned by the state machine

use crate::core::types::{Choice, GamePhase, Millis, Outcome};

/// Everything the game remembers about the current round
///
/// Created once at startup and reset in place between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub phase: GamePhase,
    /// Highlighted position in `Choice::ALL`, always in 0..=2
    pub selected_index: usize,
    pub player_choice: Option<Choice>,
    pub computer_choice: Option<Choice>,
    pub outcome: Option<Outcome>,
    /// Clock reading when the result was revealed
    pub result_started_at: Millis,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Choosing,
            selected_index: 0,
            player_choice: None,
            computer_choice: None,
            outcome: None,
            result_started_at: 0,
        }
    }

    /// Return to the initial selection screen
    pub fn reset(&mut self) {
        self.phase = GamePhase::Choosing;
        self.selected_index = 0;
        self.player_choice = None;
        self.computer_choice = None;
        self.outcome = None;
        self.result_started_at = 0;
    }

    /// Currently highlighted choice
    pub fn selected_choice(&self) -> Choice {
        Choice::from_index(self.selected_index)
    }

    /// Move the highlight one step back, wrapping
    pub fn cycle_up(&mut self) {
        let len = Choice::ALL.len();
        self.selected_index = (self.selected_index + len - 1) % len;
    }

    /// Move the highlight one step forward, wrapping
    pub fn cycle_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % Choice::ALL.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_choosing_rock() {
        let state = RoundState::new();
        assert_eq!(state.phase, GamePhase::Choosing);
        assert_eq!(state.selected_choice(), Choice::Rock);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_cycle_up_wraps_to_last() {
        let mut state = RoundState::new();
        state.cycle_up();
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.selected_choice(), Choice::Scissors);
    }

    #[test]
    fn test_cycle_down_three_times_returns() {
        let mut state = RoundState::new();
        for _ in 0..3 {
            state.cycle_down();
        }
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_reset_clears_round() {
        let mut state = RoundState {
            phase: GamePhase::GameOver,
            selected_index: 2,
            player_choice: Some(Choice::Scissors),
            computer_choice: Some(Choice::Paper),
            outcome: Some(Outcome::PlayerWins),
            result_started_at: 1234,
        };
        state.reset();
        assert_eq!(state, RoundState::new());
    }
}
