// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, paddings, plot area).

use serde::Deserialize;

use crate::error::{InvalidInputError, Result};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 600;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 240;

/// Canvas padding, in pixels.
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
    /// Total horizontal inset (left + right), widened so it cannot overflow.
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical inset (top + bottom), widened so it cannot overflow.
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 40, 20, 40)
    }
}

/// Pixel canvas plus the padding around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub padding: Insets,
}

impl CanvasSpec {
    pub const fn new(width: u32, height: u32, padding: Insets) -> Self {
        Self { width, height, padding }
    }

    /// Width left for plotting once padding is removed (may be <= 0).
    pub fn chart_width(&self) -> f64 {
        self.width as f64 - self.padding.hsum() as f64
    }

    /// Height left for plotting once padding is removed (may be <= 0).
    pub fn chart_height(&self) -> f64 {
        self.height as f64 - self.padding.vsum() as f64
    }

    /// Plot area as `(chart_width, chart_height)`, failing when either side is empty.
    pub fn plot_size(&self) -> Result<(f64, f64)> {
        let (w, h) = (self.chart_width(), self.chart_height());
        if w <= 0.0 || h <= 0.0 {
            return Err(InvalidInputError::EmptyPlotArea { width: w, height: h });
        }
        Ok((w, h))
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
