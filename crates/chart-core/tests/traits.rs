// File: crates/chart-core/tests/traits.rs
// Purpose: Compile-time check that public types can be cloned and shared across threads.

use chart_core::axis::AxisTick;
use chart_core::scale::{IndexScale, ValueScale};
use chart_core::theme::UnknownTheme;
use chart_core::{
    CanvasSpec, CategoryAxis, ChartProjector, Color, GridLine, Insets, InvalidInputError, Palette, PlotPoint,
    ProjectedSeries, Projection, Series, SvgChart, Theme, ValueFormat, ViewState,
};

fn assert_traits<T: Clone + Send + Sync>() {}

#[test]
fn public_types_are_clone_send_sync() {
    assert_traits::<Series>();
    assert_traits::<CanvasSpec>();
    assert_traits::<Insets>();
    assert_traits::<PlotPoint>();
    assert_traits::<GridLine>();
    assert_traits::<IndexScale>();
    assert_traits::<ValueScale>();
    assert_traits::<ChartProjector>();
    assert_traits::<ProjectedSeries>();
    assert_traits::<Projection>();
    assert_traits::<AxisTick>();
    assert_traits::<CategoryAxis>();
    assert_traits::<ValueFormat>();
    assert_traits::<Color>();
    assert_traits::<Palette>();
    assert_traits::<Theme>();
    assert_traits::<UnknownTheme>();
    assert_traits::<ViewState>();
    assert_traits::<InvalidInputError>();
    assert_traits::<SvgChart<'static>>();
}

#[test]
fn svg_chart_clones_with_its_settings() {
    let canvas = CanvasSpec::default();
    let palette = Theme::Light.palette();
    let chart = SvgChart::new(&canvas, &palette).with_value_format(ValueFormat::currency_thousands());
    let copy = chart.clone();
    assert_eq!(format!("{chart:?}"), format!("{copy:?}"));
}
