// File: crates/demo/src/main.rs
// Summary: Demo loads labelled series from CSV (or built-in projection data), projects them and writes an SVG chart.

mod config;

use anyhow::{bail, Context, Result};
use chart_core::{CategoryAxis, ChartProjector, Series, SvgChart, Theme};
use clap::Parser;
use config::DemoConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pulse-demo", version, about = "Project trend series and write an SVG chart")]
struct Args {
    /// CSV with a label column followed by one numeric column per series
    input: Option<PathBuf>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output SVG path
    #[arg(long)]
    out: Option<PathBuf>,
    /// dark or light
    #[arg(long)]
    theme: Option<Theme>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Number of gridline intervals on the value axis
    #[arg(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pulse_demo=info,chart_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let cfg = resolve_config(&args)?;

    let (axis, series) = match &args.input {
        Some(path) => {
            tracing::info!("Using input file: {}", path.display());
            load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            tracing::info!("No input given; using built-in projection data");
            builtin_projection()?
        }
    };
    tracing::info!(series = series.len(), samples = axis.labels.len(), "loaded table");

    let projector = ChartProjector::new(cfg.canvas)?.with_step_count(cfg.steps)?;
    let projection = projector.project(&series)?;
    tracing::info!(
        max_value = projection.max_value,
        width = projection.chart_width,
        height = projection.chart_height,
        "shared scale"
    );

    let palette = cfg.theme.palette();
    let svg = SvgChart::new(projector.canvas(), &palette)
        .with_value_format(cfg.value_format.clone())
        .with_categories(&axis)
        .render(&projection)?;

    write_output(&cfg.output, &svg)?;
    tracing::info!("Wrote {} ({} theme)", cfg.output.display(), cfg.theme);
    Ok(())
}

fn write_output(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("failed to write '{}'", path.display()))
}

/// File config first, then CLI flags on top.
fn resolve_config(args: &Args) -> Result<DemoConfig> {
    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(out) = &args.out { cfg.output = out.clone(); }
    if let Some(theme) = args.theme { cfg.theme = theme; }
    if let Some(w) = args.width { cfg.canvas.width = w; }
    if let Some(h) = args.height { cfg.canvas.height = h; }
    if let Some(steps) = args.steps { cfg.steps = steps; }
    Ok(cfg)
}

/// Load `label,series1,series2,...` rows into a category axis and one series per column.
fn load_csv(path: &Path) -> Result<(CategoryAxis, Vec<Series>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        bail!("expected a label column and at least one series column, found {} column(s)", headers.len());
    }

    let mut labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len() - 1];
    for (i, rec) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let rec = rec.with_context(|| format!("bad record on line {line}"))?;
        labels.push(rec.get(0).unwrap_or_default().to_string());
        for (col, values) in columns.iter_mut().enumerate() {
            let raw = rec.get(col + 1).unwrap_or_default();
            let v: f64 = raw.parse().with_context(|| {
                format!("line {line}, column '{}': '{raw}' is not a number", &headers[col + 1])
            })?;
            values.push(v);
        }
    }

    let series = headers
        .iter()
        .skip(1)
        .zip(columns)
        .map(|(name, values)| {
            Series::try_new(name, values).with_context(|| format!("column '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((CategoryAxis::new(labels), series))
}

fn builtin_projection() -> Result<(CategoryAxis, Vec<Series>)> {
    let costs = vec![0.0, 2500.0, 5200.0, 8100.0, 11500.0, 15200.0, 19800.0];
    let savings = vec![0.0, 800.0, 1400.0, 2200.0, 3000.0, 3900.0, 4800.0];
    let axis = CategoryAxis::years(2024, costs.len());
    Ok((axis, vec![Series::try_new("Costs", costs)?, Series::try_new("Savings", savings)?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_csv_loads_two_series() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/financial_projection.csv");
        let (axis, series) = load_csv(&path).expect("load sample csv");
        assert_eq!(axis.labels.first().map(String::as_str), Some("2024"));
        assert_eq!(axis.labels.len(), 7);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Costs");
        assert_eq!(series[1].samples()[6], 4800.0);
    }

    #[test]
    fn builtin_matches_sample_csv() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/financial_projection.csv");
        let from_csv = load_csv(&path).expect("load sample csv");
        let builtin = builtin_projection().expect("builtin");
        assert_eq!(from_csv, builtin);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::parse_from(["pulse-demo", "--theme", "light", "--width", "800", "--steps", "4"]);
        let cfg = resolve_config(&args).expect("config");
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.canvas.width, 800);
        assert_eq!(cfg.steps, 4);
        assert!(args.input.is_none());
    }

    #[test]
    fn unwritable_output_directory_names_the_directory() {
        let blocker = std::env::temp_dir().join(format!("pulse-demo-blocker-{}", std::process::id()));
        std::fs::write(&blocker, "not a directory").expect("create blocker file");
        let out = blocker.join("charts").join("chart.svg");

        let err = write_output(&out, "<svg/>").unwrap_err();
        let msg = format!("{err:#}");
        std::fs::remove_file(&blocker).ok();
        assert!(msg.contains("failed to create output directory"), "unexpected error: {msg}");
        assert!(msg.contains("charts"), "unexpected error: {msg}");
    }
}
