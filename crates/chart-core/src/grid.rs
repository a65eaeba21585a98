// File: crates/chart-core/src/grid.rs
// Summary: Horizontal gridline layout and value labels for the Y axis.

use crate::error::{InvalidInputError, Result};

/// Number of intervals the value axis is divided into unless told otherwise.
pub const DEFAULT_STEP_COUNT: usize = 5;

/// A horizontal reference line at pixel offset `y` labelled with `value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub value: i64,
}

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let intervals = (steps - 1) as f64;
    // multiply before dividing so integral inputs stay exact
    (0..steps).map(|i| start + (end - start) * i as f64 / intervals).collect()
}

/// `step_count + 1` gridlines from the top (`y = 0`, labelled `max_value`)
/// down to the bottom (`y = chart_height`, labelled 0).
pub fn build_grid_lines(max_value: f64, chart_height: f64, step_count: usize) -> Result<Vec<GridLine>> {
    if step_count == 0 {
        return Err(InvalidInputError::ZeroSteps);
    }
    if !max_value.is_finite() || max_value < 0.0 {
        return Err(InvalidInputError::InvalidScale(max_value));
    }
    if !chart_height.is_finite() || chart_height <= 0.0 {
        return Err(InvalidInputError::InvalidHeight(chart_height));
    }
    let offsets = linspace(0.0, chart_height, step_count + 1);
    let labels = linspace(max_value, 0.0, step_count + 1);
    Ok(offsets
        .into_iter()
        .zip(labels)
        .map(|(y, value)| GridLine { y, value: value.round() as i64 })
        .collect())
}
