// File: crates/chart-core/src/series.rs
// Summary: Named sample series and batch validation for shared-scale projection.

use crate::error::{InvalidInputError, Result};

/// An ordered run of non-negative samples plotted as one line.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    samples: Vec<f64>,
}

impl Series {
    /// Construct a series, rejecting negative or non-finite samples.
    pub fn try_new(name: impl Into<String>, samples: Vec<f64>) -> Result<Self> {
        check_samples(&samples)?;
        Ok(Self { name: name.into(), samples })
    }

    pub fn samples(&self) -> &[f64] { &self.samples }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] { &self.samples }
}

/// Every sample must be finite and >= 0.
pub fn check_samples(samples: &[f64]) -> Result<()> {
    match samples.iter().position(|v| !v.is_finite() || *v < 0.0) {
        Some(index) => Err(InvalidInputError::InvalidSample { index, value: samples[index] }),
        None => Ok(()),
    }
}

/// Common length of a batch that will share one scale.
///
/// Fails when the batch is empty, when lengths differ, or when every series is empty.
pub fn common_len<S: AsRef<[f64]>>(batch: &[S]) -> Result<usize> {
    let Some(first) = batch.first() else {
        return Err(InvalidInputError::EmptySeriesSet);
    };
    let expected = first.as_ref().len();
    for (index, s) in batch.iter().enumerate().skip(1) {
        let found = s.as_ref().len();
        if found != expected {
            return Err(InvalidInputError::LengthMismatch { index, expected, found });
        }
    }
    if expected == 0 {
        return Err(InvalidInputError::EmptySeriesSet);
    }
    Ok(expected)
}
