// File: crates/chart-core/src/error.rs
// Summary: Input-validation error raised by the projection functions.

use thiserror::Error;

/// A violated precondition on projector input.
///
/// Every variant is a caller bug rather than a transient fault: the
/// projection functions are deterministic, so retrying cannot succeed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// No series supplied, or every supplied series is empty.
    #[error("no samples to scale against: every series in the batch is empty")]
    EmptySeriesSet,

    /// Projection spaces samples by `N - 1`, so a lone sample has no width.
    #[error("series needs at least 2 samples to project, got {len}")]
    TooFewSamples { len: usize },

    /// Series meant to share one scale must line up sample for sample.
    #[error("series {index} has {found} samples, expected {expected}")]
    LengthMismatch { index: usize, expected: usize, found: usize },

    #[error("sample {index} is {value}; samples must be finite and non-negative")]
    InvalidSample { index: usize, value: f64 },

    #[error("scale maximum {0} must be finite and non-negative")]
    InvalidScale(f64),

    #[error("sample {index} ({value}) exceeds the scale maximum {max}")]
    SampleOutOfScale { index: usize, value: f64, max: f64 },

    /// Padding consumed the whole canvas.
    #[error("plot area {width}x{height} is empty")]
    EmptyPlotArea { width: f64, height: f64 },

    #[error("chart height {0} must be finite and positive")]
    InvalidHeight(f64),

    #[error("grid needs at least one step")]
    ZeroSteps,
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
