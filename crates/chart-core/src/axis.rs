// File: crates/chart-core/src/axis.rs
// Summary: Category (X) axis ticks and value (Y) label formatting.

use serde::Deserialize;

use crate::error::Result;
use crate::scale::IndexScale;

/// A labelled tick on the category axis, `x` in plot-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub x: f64,
    pub label: String,
}

/// Discrete labels (years, weekdays, ...) spaced like the samples they annotate.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: labels.into_iter().map(Into::into).collect() }
    }

    /// `count` consecutive years starting at `start`.
    pub fn years(start: i32, count: usize) -> Self {
        Self::new((0..count).map(|i| (start + i as i32).to_string()))
    }

    /// Place every label with the same spacing `project_series` gives the samples.
    pub fn ticks(&self, chart_width: f64) -> Result<Vec<AxisTick>> {
        let xs = IndexScale::new(self.labels.len(), chart_width)?;
        Ok(self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| AxisTick { x: xs.to_px(i), label: label.clone() })
            .collect())
    }
}

/// How gridline values are printed next to the value axis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum ValueFormat {
    #[default]
    Plain,
    /// Whole thousands with a unit prefix, e.g. `$16k`.
    Thousands { prefix: String },
}

impl ValueFormat {
    pub fn currency_thousands() -> Self {
        Self::Thousands { prefix: "$".to_string() }
    }

    pub fn format(&self, value: i64) -> String {
        match self {
            Self::Plain => value.to_string(),
            Self::Thousands { prefix } => {
                // half away from zero, so 2500 reads as 3k rather than 2k
                let k = (value as f64 / 1000.0).round() as i64;
                format!("{prefix}{k}k")
            }
        }
    }
}
