// File: crates/scrolly-core/src/types.rs
// Summary: Shared types and constants (surface size, plot margins).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: i32 = 500;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Plot spans x in [60, 460] and y in [40, 360] on the default surface.
    fn default() -> Self {
        Self::new(60, 40, 40, 40)
    }
}

/// Pixel rectangle of the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Computed in `i64`, so oversized insets give an inverted rect instead of overflowing.
    pub fn from_surface(width: i32, height: i32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: (i64::from(width) - i64::from(insets.right)) as f32,
            bottom: (i64::from(height) - i64::from(insets.bottom)) as f32,
        }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
