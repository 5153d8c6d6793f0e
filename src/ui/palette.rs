//! Color definitions for on-screen text

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const DARK_GRAY: Rgb = Rgb::new(100, 100, 100);
pub const GREEN: Rgb = Rgb::new(0, 200, 0);
pub const RED: Rgb = Rgb::new(200, 0, 0);
