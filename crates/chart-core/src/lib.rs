// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the projection API, theming and SVG output.

pub mod error;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod projector;
pub mod view;
pub mod theme;
pub mod svg;

pub use error::{InvalidInputError, Result};
pub use series::Series;
pub use axis::{AxisTick, CategoryAxis, ValueFormat};
pub use grid::{build_grid_lines, GridLine, DEFAULT_STEP_COUNT};
pub use types::{CanvasSpec, Insets};
pub use geometry::PlotPoint;
pub use scale::compute_max_value;
pub use projector::{project_series, ChartProjector, ProjectedSeries, Projection};
pub use view::ViewState;
pub use theme::{Color, Palette, Theme};
pub use svg::SvgChart;
