// File: crates/demo/src/config.rs
// Summary: Demo configuration loaded from an optional TOML file with per-field defaults.

use anyhow::{Context, Result};
use chart_core::{CanvasSpec, Theme, ValueFormat, DEFAULT_STEP_COUNT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub canvas: CanvasSpec,
    pub steps: usize,
    pub theme: Theme,
    pub value_format: ValueFormat,
    pub output: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            steps: DEFAULT_STEP_COUNT,
            theme: Theme::default(),
            value_format: ValueFormat::currency_thousands(),
            output: PathBuf::from("target/out/financial_projection.svg"),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config '{}'", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
