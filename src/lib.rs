//! Janken - Rock-Paper-Scissors in tribute to Alex Kidd in Miracle World

pub mod core;
pub mod game;
pub mod renderer;
pub mod ui;
