// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and Value (Y) scale transforms plus the shared batch maximum.

use crate::error::{InvalidInputError, Result};
use crate::series::{check_samples, common_len};

/// Maximum sample across every series in the batch.
///
/// Series drawn together share this one vertical scale, so it is taken over the
/// union of all samples, never per series.
pub fn compute_max_value<S: AsRef<[f64]>>(batch: &[S]) -> Result<f64> {
    common_len(batch)?;
    let mut max = 0.0f64;
    for s in batch {
        let samples = s.as_ref();
        check_samples(samples)?;
        max = samples.iter().copied().fold(max, f64::max);
    }
    Ok(max)
}

/// Horizontal scale spreading `count` samples evenly over `[0, width]`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub width: f64,
    last: f64,
}

impl IndexScale {
    /// Requires `count >= 2`; the first sample lands on 0 and the last on `width`.
    pub fn new(count: usize, width: f64) -> Result<Self> {
        if count < 2 {
            return Err(InvalidInputError::TooFewSamples { len: count });
        }
        Ok(Self { width, last: (count - 1) as f64 })
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        index as f64 * self.width / self.last
    }
}

/// Vertical scale mapping `[0, max]` onto `[height, 0]` pixels (value grows upward).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub height: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn new(max: f64, height: f64) -> Result<Self> {
        if !max.is_finite() || max < 0.0 {
            return Err(InvalidInputError::InvalidScale(max));
        }
        Ok(Self { height, max })
    }

    /// True when the scale has no range and every value sits on the bottom edge.
    pub fn is_flat(&self) -> bool { self.max <= 0.0 }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        if self.is_flat() {
            self.height
        } else {
            self.height - (value / self.max) * self.height
        }
    }
}
