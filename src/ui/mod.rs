//! UI module - scene layout and input mapping for both front ends

pub mod input;
pub mod palette;
pub mod scene;
pub mod terminal;

pub use scene::{FontRole, Scene, Seat, SpriteDraw, TextDraw};
