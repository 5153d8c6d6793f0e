//! Scene layout - what goes where on the 800x600 canvas.
//!
//! A `Scene` is a pure function of a `RoundSnapshot`. Renderers only
//! draw it; they never look at game state.

use crate::core::types::{Choice, GamePhase, Outcome};
use crate::game::snapshot::RoundSnapshot;
use crate::ui::palette::{self, Rgb};

/// Logical canvas width the layout is authored for.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Logical canvas height the layout is authored for.
pub const CANVAS_HEIGHT: f32 = 600.0;

const SPRITE_Y: f32 = 250.0;
const PLAYER_SPRITE_X: f32 = 150.0;
const COMPUTER_SPRITE_X: f32 = 600.0;
const RESULT_Y: f32 = 260.0;
const INSTRUCTION_Y: f32 = 120.0;
const SECOND_INSTRUCTION_Y: f32 = 150.0;

/// Font size class for a text item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Large banner used for the round result
    Result,
    /// Small font for instructions
    Instruction,
}

impl FontRole {
    /// Glyph height in logical pixels.
    pub fn size(self) -> f32 {
        match self {
            FontRole::Result => 56.0,
            FontRole::Instruction => 28.0,
        }
    }
}

/// Which side of the table a sprite belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player,
    Computer,
}

/// A choice sprite centred on a canvas point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub seat: Seat,
    /// `None` renders the neutral placeholder
    pub choice: Option<Choice>,
    pub center: [f32; 2],
}

/// A line of text centred on a canvas point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: &'static str,
    pub font: FontRole,
    pub color: Rgb,
    pub center: [f32; 2],
}

/// Everything drawn in one frame, back to front after the background.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub sprites: [SpriteDraw; 2],
    pub texts: Vec<TextDraw>,
}

impl Scene {
    pub fn from_snapshot(snapshot: &RoundSnapshot) -> Self {
        let sprites = [
            SpriteDraw {
                seat: Seat::Player,
                choice: Some(snapshot.displayed_player_choice),
                center: [PLAYER_SPRITE_X, SPRITE_Y],
            },
            SpriteDraw {
                seat: Seat::Computer,
                choice: snapshot.displayed_computer_choice,
                center: [COMPUTER_SPRITE_X, SPRITE_Y],
            },
        ];

        let mut texts = Vec::with_capacity(2);
        let mid_x = CANVAS_WIDTH / 2.0;

        if snapshot.phase != GamePhase::Choosing {
            if let Some(outcome) = snapshot.outcome {
                let (text, color) = result_banner(outcome);
                texts.push(TextDraw {
                    text,
                    font: FontRole::Result,
                    color,
                    center: [mid_x, RESULT_Y],
                });
            }
        }

        match snapshot.phase {
            GamePhase::Choosing => {
                texts.push(TextDraw {
                    text: "Use UP/DOWN arrows to cycle through choices",
                    font: FontRole::Instruction,
                    color: palette::BLACK,
                    center: [mid_x, INSTRUCTION_Y],
                });
                texts.push(TextDraw {
                    text: "Press ENTER or SPACE to confirm",
                    font: FontRole::Instruction,
                    color: palette::BLACK,
                    center: [mid_x, SECOND_INSTRUCTION_Y],
                });
            }
            GamePhase::GameOver => {
                texts.push(TextDraw {
                    text: "Press any key to play again",
                    font: FontRole::Instruction,
                    color: palette::DARK_GRAY,
                    center: [mid_x, SECOND_INSTRUCTION_Y],
                });
            }
            GamePhase::ShowingResult => {}
        }

        Self { sprites, texts }
    }

    pub fn sprite(&self, seat: Seat) -> &SpriteDraw {
        match seat {
            Seat::Player => &self.sprites[0],
            Seat::Computer => &self.sprites[1],
        }
    }
}

/// Banner text and color for a finished round.
pub fn result_banner(outcome: Outcome) -> (&'static str, Rgb) {
    match outcome {
        Outcome::Tie => ("TIE! Try again...", palette::DARK_GRAY),
        Outcome::PlayerWins => ("YOU WIN!", palette::GREEN),
        Outcome::ComputerWins => ("YOU LOSE!", palette::RED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: GamePhase, outcome: Option<Outcome>) -> RoundSnapshot {
        let computer = outcome.map(|_| Choice::Paper);
        RoundSnapshot {
            phase,
            displayed_player_choice: Choice::Scissors,
            displayed_computer_choice: computer,
            outcome,
        }
    }

    #[test]
    fn test_choosing_shows_instructions_only() {
        let scene = Scene::from_snapshot(&snapshot(GamePhase::Choosing, None));
        assert_eq!(scene.texts.len(), 2);
        assert!(scene.texts.iter().all(|t| t.font == FontRole::Instruction));
        assert_eq!(scene.texts[0].center, [400.0, 120.0]);
        assert_eq!(scene.texts[1].text, "Press ENTER or SPACE to confirm");
    }

    #[test]
    fn test_choosing_computer_sprite_is_placeholder() {
        let scene = Scene::from_snapshot(&snapshot(GamePhase::Choosing, None));
        assert_eq!(scene.sprite(Seat::Computer).choice, None);
        assert_eq!(scene.sprite(Seat::Player).choice, Some(Choice::Scissors));
        assert_eq!(scene.sprite(Seat::Player).center, [150.0, 250.0]);
        assert_eq!(scene.sprite(Seat::Computer).center, [600.0, 250.0]);
    }

    #[test]
    fn test_showing_result_has_banner_only() {
        let scene = Scene::from_snapshot(&snapshot(
            GamePhase::ShowingResult,
            Some(Outcome::PlayerWins),
        ));
        assert_eq!(scene.texts.len(), 1);
        assert_eq!(scene.texts[0].text, "YOU WIN!");
        assert_eq!(scene.texts[0].color, palette::GREEN);
        assert_eq!(scene.texts[0].center, [400.0, 260.0]);
    }

    #[test]
    fn test_game_over_adds_restart_prompt() {
        let scene = Scene::from_snapshot(&snapshot(
            GamePhase::GameOver,
            Some(Outcome::ComputerWins),
        ));
        let texts: Vec<_> = scene.texts.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["YOU LOSE!", "Press any key to play again"]);
        assert_eq!(scene.sprite(Seat::Computer).choice, Some(Choice::Paper));
    }

    #[test]
    fn test_tie_banner() {
        let (text, color) = result_banner(Outcome::Tie);
        assert_eq!(text, "TIE! Try again...");
        assert_eq!(color, palette::DARK_GRAY);
    }
}
