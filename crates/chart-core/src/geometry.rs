// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A projected sample in plot-area pixel space, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
