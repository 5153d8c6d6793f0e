//! Read-only view of a round handed to the renderers each tick.

use crate::core::types::{Choice, GamePhase, Outcome};
use crate::game::state::RoundState;

/// Frozen projection of `RoundState` for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub phase: GamePhase,
    /// Highlighted choice while choosing, the locked-in choice afterwards
    pub displayed_player_choice: Choice,
    /// `None` while choosing; renderers show a neutral placeholder
    pub displayed_computer_choice: Option<Choice>,
    pub outcome: Option<Outcome>,
}

impl RoundSnapshot {
    pub fn from_state(state: &RoundState) -> Self {
        match state.phase {
            GamePhase::Choosing => Self {
                phase: state.phase,
                displayed_player_choice: state.selected_choice(),
                displayed_computer_choice: None,
                outcome: None,
            },
            GamePhase::ShowingResult | GamePhase::GameOver => Self {
                phase: state.phase,
                displayed_player_choice: state
                    .player_choice
                    .unwrap_or_else(|| state.selected_choice()),
                displayed_computer_choice: state.computer_choice,
                outcome: state.outcome,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choosing_snapshot_shows_highlight() {
        let mut state = RoundState::new();
        state.cycle_down();
        let snapshot = RoundSnapshot::from_state(&state);
        assert_eq!(snapshot.phase, GamePhase::Choosing);
        assert_eq!(snapshot.displayed_player_choice, Choice::Paper);
        assert_eq!(snapshot.displayed_computer_choice, None);
        assert_eq!(snapshot.outcome, None);
    }

    #[test]
    fn test_result_snapshot_shows_locked_choices() {
        let state = RoundState {
            phase: GamePhase::ShowingResult,
            selected_index: 0,
            player_choice: Some(Choice::Scissors),
            computer_choice: Some(Choice::Rock),
            outcome: Some(Outcome::ComputerWins),
            result_started_at: 10,
        };
        let snapshot = RoundSnapshot::from_state(&state);
        assert_eq!(snapshot.displayed_player_choice, Choice::Scissors);
        assert_eq!(snapshot.displayed_computer_choice, Some(Choice::Rock));
        assert_eq!(snapshot.outcome, Some(Outcome::ComputerWins));
    }
}
