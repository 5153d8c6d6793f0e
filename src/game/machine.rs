//! Round state machine
//!
//! Inputs are applied in arrival order, then timed transitions are evaluated
//! once against the tick's clock reading. Timed transitions are pure
//! functions of `(state, now)`; nothing is scheduled.

use crate::core::types::{GamePhase, Millis, Outcome};
use crate::game::input::InputEvent;
use crate::game::random::ChoiceSource;
use crate::game::resolver::resolve;
use crate::game::snapshot::RoundSnapshot;
use crate::game::state::RoundState;

/// How long a tie stays on screen before the round restarts on its own
pub const TIE_RESTART_MS: Millis = 1500;

/// How long a decisive result stays on screen before "press any key"
pub const DECISIVE_HOLD_MS: Millis = 2000;

/// Drives a single `RoundState` from inputs and clock readings
#[derive(Debug)]
pub struct GameStateMachine<S: ChoiceSource> {
    state: RoundState,
    opponent: S,
}

impl<S: ChoiceSource> GameStateMachine<S> {
    pub fn new(opponent: S) -> Self {
        Self {
            state: RoundState::new(),
            opponent,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Apply every event in order, advance timers, and return the frame snapshot
    pub fn tick<I>(&mut self, events: I, now: Millis) -> RoundSnapshot
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_input(event, now);
        }
        self.update(now);
        self.snapshot()
    }

    /// Apply one input event; events with no meaning in the current phase are ignored
    pub fn handle_input(&mut self, event: InputEvent, now: Millis) {
        match (self.state.phase, event) {
            (_, InputEvent::Quit) => {}
            (GamePhase::Choosing, InputEvent::CycleUp) => self.state.cycle_up(),
            (GamePhase::Choosing, InputEvent::CycleDown) => self.state.cycle_down(),
            (GamePhase::Choosing, InputEvent::Confirm) => self.confirm(now),
            (GamePhase::Choosing, InputEvent::AnyKey) => {}
            (GamePhase::ShowingResult, _) => {}
            (GamePhase::GameOver, _) => {
                tracing::debug!("Restarting after game over");
                self.state.reset();
            }
        }
    }

    /// Evaluate timed transitions for the current clock reading
    pub fn update(&mut self, now: Millis) {
        if self.state.phase != GamePhase::ShowingResult {
            return;
        }

        let elapsed = now.saturating_sub(self.state.result_started_at);
        match self.state.outcome {
            Some(Outcome::Tie) => {
                if elapsed > TIE_RESTART_MS {
                    tracing::debug!("Tie shown for {}ms, restarting round", elapsed);
                    self.state.reset();
                }
            }
            Some(Outcome::PlayerWins) | Some(Outcome::ComputerWins) => {
                if elapsed > DECISIVE_HOLD_MS {
                    tracing::debug!("Result shown for {}ms, game over", elapsed);
                    self.state.phase = GamePhase::GameOver;
                }
            }
            None => {
                // Unreachable while the round invariants hold; recover to selection
                tracing::warn!("ShowingResult without an outcome, resetting");
                self.state.reset();
            }
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_state(&self.state)
    }

    fn confirm(&mut self, now: Millis) {
        let player = self.state.selected_choice();
        let computer = self.opponent.next_choice();
        let outcome = resolve(player, computer);

        tracing::info!(%player, %computer, ?outcome, "Round resolved");

        self.state.player_choice = Some(player);
        self.state.computer_choice = Some(computer);
        self.state.outcome = Some(outcome);
        self.state.result_started_at = now;
        self.state.phase = GamePhase::ShowingResult;
    }
}
