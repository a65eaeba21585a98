// File: crates/chart-core/tests/svg.rs
// Purpose: Validate SVG serialization of projected series, grid and axis labels.

use chart_core::svg::polyline_points;
use chart_core::{
    CanvasSpec, CategoryAxis, ChartProjector, InvalidInputError, PlotPoint, Series, SvgChart, Theme, ValueFormat,
};

fn projection() -> (CanvasSpec, chart_core::Projection) {
    let canvas = CanvasSpec::default();
    let costs = Series::try_new("Costs", vec![0.0, 2500.0, 5200.0, 8100.0, 11500.0, 15200.0, 19800.0]).unwrap();
    let savings = Series::try_new("Savings & more", vec![0.0, 800.0, 1400.0, 2200.0, 3000.0, 3900.0, 4800.0]).unwrap();
    let proj = ChartProjector::new(canvas).unwrap().project(&[costs, savings]).unwrap();
    (canvas, proj)
}

#[test]
fn polyline_points_are_space_separated_pairs() {
    let pts = [PlotPoint::new(0.0, 180.0), PlotPoint::new(83.333333, 157.27), PlotPoint::new(500.0, 0.0)];
    assert_eq!(polyline_points(&pts), "0,180 83.33,157.27 500,0");
}

#[test]
fn thousands_format_matches_dashboard_labels() {
    let f = ValueFormat::currency_thousands();
    assert_eq!(f.format(19800), "$20k");
    assert_eq!(f.format(15840), "$16k");
    assert_eq!(f.format(2500), "$3k");
    assert_eq!(f.format(0), "$0k");
    assert_eq!(ValueFormat::Plain.format(1234), "1234");
}

#[test]
fn category_ticks_share_sample_spacing() {
    let axis = CategoryAxis::years(2024, 7);
    let ticks = axis.ticks(600.0).unwrap();
    assert_eq!(ticks.len(), 7);
    assert_eq!(ticks[0].label, "2024");
    assert_eq!(ticks[6].label, "2030");
    assert_eq!(ticks[3].x, 300.0);
    assert!(CategoryAxis::new(["only"]).ticks(600.0).is_err());
}

#[test]
fn category_count_must_match_samples() {
    let (canvas, proj) = projection();
    let palette = Theme::Dark.palette();
    let axis = CategoryAxis::years(2024, 3);
    let err = SvgChart::new(&canvas, &palette).with_categories(&axis).render(&proj).unwrap_err();
    assert_eq!(err, InvalidInputError::LengthMismatch { index: 0, expected: 3, found: 7 });
}

#[test]
fn document_contains_every_element() {
    let (canvas, proj) = projection();
    let palette = Theme::Dark.palette();
    let axis = CategoryAxis::years(2024, 7);
    let svg = SvgChart::new(&canvas, &palette)
        .with_value_format(ValueFormat::currency_thousands())
        .with_categories(&axis)
        .render(&proj)
        .expect("render");

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"240\""));
    assert!(svg.contains("translate(60, 20)"));
    assert_eq!(svg.matches("<line ").count(), 6);
    assert_eq!(svg.matches("<polyline ").count(), 2);
    // 7 + 7 markers plus 2 legend dots
    assert_eq!(svg.matches("<circle ").count(), 16);
    assert!(svg.contains(">$20k</text>"));
    assert!(svg.contains(">$0k</text>"));
    assert!(svg.contains(">2030</text>"));
    assert!(svg.contains("Savings &amp; more"));
    assert!(svg.contains("stroke=\"#EF4444\""));
    assert!(svg.contains("points=\"0,180 83.33,"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
