//! Janken - Entry Point
//!
//! Opens the game window and runs the frame loop: drain key presses, read
//! the clock once, tick the round state machine, draw the resulting scene.
//! Controls:
//!   Up / Down: Cycle through choices
//!   Enter / Space: Confirm
//!   Any key: Play again after a decisive round

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use janken::core::error::{GameError, Result};
use janken::core::GameConfig;
use janken::game::{Clock, GameStateMachine, InputEvent, MonotonicClock, RngChoiceSource};
use janken::renderer::{AssetPaths, FrameMetrics, GameAssets, Renderer};
use janken::ui::input::decode_key_event;
use janken::ui::Scene;

/// Rock-Paper-Scissors in tribute to Alex Kidd in Miracle World
#[derive(Parser, Debug)]
#[command(name = "janken")]
#[command(about = "Play Rock-Paper-Scissors against the computer")]
struct Args {
    /// TOML file with display and asset settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing background.png, rock.png, paper.png, scissors.png
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Random seed for a reproducible opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("janken=info")),
        )
        .init();

    let mut config = GameConfig::load_or_default(args.config.as_deref())?;
    if let Some(dir) = args.assets {
        config.asset_dir = dir;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    tracing::info!("Janken starting...");

    // The game cannot run without its images
    let assets = GameAssets::load(&AssetPaths::new(&config.asset_dir))?;

    let event_loop = EventLoop::new().map_err(|e| GameError::Window(e.to_string()))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(|e| GameError::Window(e.to_string()))?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone(), &assets))?;

    let mut machine = GameStateMachine::new(RngChoiceSource::from_seed_or_entropy(config.seed));
    let clock = MonotonicClock::new();

    let frame_interval = config.frame_interval();
    let mut metrics = FrameMetrics::new(frame_interval);
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut next_frame = Instant::now();
    let mut last_report = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => {
                renderer.on_window_event(&event);

                match event {
                    WindowEvent::CloseRequested => {
                        tracing::info!("Window closed");
                        elwt.exit();
                    }

                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } => {
                        if let Some(input) = decode_key_event(&key_event) {
                            pending.push(input);
                        }
                    }

                    WindowEvent::RedrawRequested => {
                        metrics.begin_frame();

                        let snapshot = machine.tick(pending.drain(..), clock.now());
                        let scene = Scene::from_snapshot(&snapshot);

                        match renderer.render(&scene) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                renderer.recover_surface();
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("Out of GPU memory!");
                                elwt.exit();
                            }
                            Err(e) => {
                                tracing::warn!("Render error: {:?}", e);
                            }
                        }

                        metrics.end_frame();
                        if last_report.elapsed() >= Duration::from_secs(1) {
                            metrics.take_report();
                            last_report = Instant::now();
                        }
                    }

                    _ => {}
                }
            }

            Event::AboutToWait => {
                let now = Instant::now();
                if now >= next_frame {
                    window.request_redraw();
                    next_frame = (next_frame + frame_interval).max(now);
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
            }

            _ => {}
        })
        .map_err(|e| GameError::Window(e.to_string()))?;

    Ok(())
}
