//! Terminal front end.
//!
//! Same round logic as the window build, drawn with ratatui.
//! Controls:
//!   Up / Down: Cycle through choices
//!   Enter / Space: Confirm
//!   Esc / Ctrl-C: Quit

use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use janken::core::error::Result;
use janken::core::GameConfig;
use janken::game::{
    ChoiceSource, Clock, GameStateMachine, InputEvent, MonotonicClock, RngChoiceSource,
};
use janken::ui::terminal::{self, TerminalSession};
use janken::ui::Scene;

/// Rock-Paper-Scissors in the terminal
#[derive(Parser, Debug)]
#[command(name = "janken_tui")]
#[command(about = "Play Rock-Paper-Scissors against the computer in a terminal")]
struct Args {
    /// TOML file with frame rate and seed settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a reproducible opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging would tear the alternate screen, so it is opt-in and goes to stderr
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let mut config = GameConfig::load_or_default(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let mut machine = GameStateMachine::new(RngChoiceSource::from_seed_or_entropy(config.seed));
    let clock = MonotonicClock::new();

    let mut session = TerminalSession::new()?;
    run(&mut session, &mut machine, &clock, config.frame_interval())
}

fn run<S: ChoiceSource>(
    session: &mut TerminalSession,
    machine: &mut GameStateMachine<S>,
    clock: &impl Clock,
    frame_interval: Duration,
) -> Result<()> {
    let mut events = Vec::new();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = terminal::map_key(&key) {
                    events.push(input);
                }
            }
        }

        if events.contains(&InputEvent::Quit) {
            tracing::info!("Quit requested");
            return Ok(());
        }

        let snapshot = machine.tick(events.drain(..), clock.now());
        let scene = Scene::from_snapshot(&snapshot);
        session
            .terminal
            .draw(|frame| terminal::draw(frame, &scene))?;

        thread::sleep(frame_interval.saturating_sub(frame_start.elapsed()));
    }
}
