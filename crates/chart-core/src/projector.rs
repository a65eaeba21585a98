// File: crates/chart-core/src/projector.rs
// Summary: ChartProjector; maps sample batches onto a padded canvas with one shared value scale.

use crate::error::{InvalidInputError, Result};
use crate::geometry::PlotPoint;
use crate::grid::{build_grid_lines, GridLine, DEFAULT_STEP_COUNT};
use crate::scale::{compute_max_value, IndexScale, ValueScale};
use crate::series::{check_samples, Series};
use crate::types::CanvasSpec;

/// Project one series into plot-area pixels against an externally chosen maximum.
///
/// Sample `i` of `N` lands at `x = i * chart_width / (N - 1)`; values grow upward
/// from `y = chart_height`. A zero maximum pins every point to the bottom edge.
pub fn project_series(samples: &[f64], max_value: f64, canvas: &CanvasSpec) -> Result<Vec<PlotPoint>> {
    let (w, h) = canvas.plot_size()?;
    let xs = IndexScale::new(samples.len(), w)?;
    let ys = ValueScale::new(max_value, h)?;
    check_samples(samples)?;
    if let Some(index) = samples.iter().position(|v| *v > max_value) {
        return Err(InvalidInputError::SampleOutOfScale { index, value: samples[index], max: max_value });
    }
    Ok(samples
        .iter()
        .enumerate()
        .map(|(i, &v)| PlotPoint::new(xs.to_px(i), ys.to_px(v)))
        .collect())
}

/// One series after projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedSeries {
    pub name: String,
    pub points: Vec<PlotPoint>,
}

/// Everything a renderer needs to draw a batch: shared scale, plot size, lines and grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub max_value: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub series: Vec<ProjectedSeries>,
    pub grid: Vec<GridLine>,
}

/// Projects batches of equal-length series onto a fixed canvas.
#[derive(Clone, Copy, Debug)]
pub struct ChartProjector {
    canvas: CanvasSpec,
    step_count: usize,
}

impl ChartProjector {
    /// Fails when padding leaves no room to plot.
    pub fn new(canvas: CanvasSpec) -> Result<Self> {
        canvas.plot_size()?;
        Ok(Self { canvas, step_count: DEFAULT_STEP_COUNT })
    }

    pub fn with_step_count(mut self, step_count: usize) -> Result<Self> {
        if step_count == 0 {
            return Err(InvalidInputError::ZeroSteps);
        }
        self.step_count = step_count;
        Ok(self)
    }

    pub fn canvas(&self) -> &CanvasSpec { &self.canvas }

    pub fn step_count(&self) -> usize { self.step_count }

    /// Project every series against the batch maximum and lay out the value grid.
    pub fn project(&self, batch: &[Series]) -> Result<Projection> {
        let max_value = compute_max_value(batch)?;
        let (chart_width, chart_height) = self.canvas.plot_size()?;
        if max_value <= 0.0 {
            tracing::debug!(series = batch.len(), "all samples are zero; pinning lines to the baseline");
        }
        let series = batch
            .iter()
            .map(|s| {
                Ok(ProjectedSeries {
                    name: s.name.clone(),
                    points: project_series(s.samples(), max_value, &self.canvas)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let grid = build_grid_lines(max_value, chart_height, self.step_count)?;
        tracing::debug!(
            series = series.len(),
            samples = batch.first().map_or(0, Series::len),
            max_value,
            chart_width,
            chart_height,
            "projected batch"
        );
        Ok(Projection { max_value, chart_width, chart_height, series, grid })
    }
}
