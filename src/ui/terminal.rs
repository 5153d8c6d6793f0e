//! Terminal front end - crossterm input and ratatui drawing of a `Scene`.

use std::io::{self, Stdout};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use crate::core::types::Choice;
use crate::game::input::InputEvent;
use crate::ui::palette::Rgb;
use crate::ui::scene::{FontRole, Scene, Seat, SpriteDraw};

/// Raw-mode terminal on the alternate screen, restored on drop
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(err);
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Decode a crossterm key event; releases and repeats produce nothing
pub fn map_key(event: &KeyEvent) -> Option<InputEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let input = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            InputEvent::Quit
        }
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Up => InputEvent::CycleUp,
        KeyCode::Down => InputEvent::CycleDown,
        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        _ => InputEvent::AnyKey,
    };
    Some(input)
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn sprite_panel(sprite: &SpriteDraw) -> Paragraph<'static> {
    let title = match sprite.seat {
        Seat::Player => " You ",
        Seat::Computer => " Computer ",
    };

    // Unrevealed computer hand shows the Rock placeholder, dimmed
    let (choice, style) = match sprite.choice {
        Some(choice) => (choice, Style::default().add_modifier(Modifier::BOLD)),
        None => (Choice::Rock, Style::default().add_modifier(Modifier::DIM)),
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(choice.to_string().to_uppercase(), style)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title))
}

/// Draw a scene into the whole frame
pub fn draw(frame: &mut Frame, scene: &Scene) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(frame.size());

    let instructions: Vec<Line> = scene
        .texts
        .iter()
        .filter(|t| t.font == FontRole::Instruction)
        .map(|t| Line::from(Span::styled(t.text, Style::default().fg(to_color(t.color)))))
        .collect();
    frame.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        rows[0],
    );

    let seats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    frame.render_widget(sprite_panel(scene.sprite(Seat::Player)), seats[0]);
    frame.render_widget(sprite_panel(scene.sprite(Seat::Computer)), seats[1]);

    let banner: Vec<Line> = scene
        .texts
        .iter()
        .filter(|t| t.font == FontRole::Result)
        .map(|t| {
            Line::from(Span::styled(
                t.text,
                Style::default()
                    .fg(to_color(t.color))
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(banner)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM)),
        centered(rows[2], 60),
    );
}

/// Horizontally centred slice of `area`, `percent` wide
fn centered(area: Rect, percent: u16) -> Rect {
    let margin = (100 - percent.min(100)) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(margin),
            Constraint::Percentage(percent),
            Constraint::Percentage(margin),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GamePhase, Outcome};
    use crate::game::snapshot::RoundSnapshot;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(&press(KeyCode::Up)), Some(InputEvent::CycleUp));
        assert_eq!(map_key(&press(KeyCode::Down)), Some(InputEvent::CycleDown));
        assert_eq!(map_key(&press(KeyCode::Enter)), Some(InputEvent::Confirm));
        assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(InputEvent::Confirm));
        assert_eq!(map_key(&press(KeyCode::Char('x'))), Some(InputEvent::AnyKey));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(InputEvent::Quit));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&event), Some(InputEvent::Quit));
    }

    #[test]
    fn test_draw_game_over_scene() {
        let snapshot = RoundSnapshot {
            phase: GamePhase::GameOver,
            displayed_player_choice: Choice::Paper,
            displayed_computer_choice: Some(Choice::Rock),
            outcome: Some(Outcome::PlayerWins),
        };
        let scene = Scene::from_snapshot(&snapshot);

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| draw(frame, &scene)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let rendered: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.contains("YOU WIN!"));
        assert!(rendered.contains("PAPER"));
        assert!(rendered.contains("Press any key to play again"));
    }
}
