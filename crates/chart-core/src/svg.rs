// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a Projection: gridlines, value labels, polylines, markers, legend.

use crate::axis::{CategoryAxis, ValueFormat};
use crate::error::{InvalidInputError, Result};
use crate::geometry::PlotPoint;
use crate::projector::Projection;
use crate::theme::Palette;
use crate::types::CanvasSpec;

const LABEL_GAP: f64 = 15.0;
const CATEGORY_LABEL_DROP: f64 = 25.0;
const LEGEND_SPACING: f64 = 90.0;

/// `points` attribute for an SVG `<polyline>`: `"x,y x,y ..."`.
pub fn polyline_points(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a projection as a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgChart<'a> {
    canvas: &'a CanvasSpec,
    palette: &'a Palette,
    value_format: ValueFormat,
    categories: Option<&'a CategoryAxis>,
}

impl<'a> SvgChart<'a> {
    pub fn new(canvas: &'a CanvasSpec, palette: &'a Palette) -> Self {
        Self { canvas, palette, value_format: ValueFormat::Plain, categories: None }
    }

    pub fn with_value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    pub fn with_categories(mut self, axis: &'a CategoryAxis) -> Self {
        self.categories = Some(axis);
        self
    }

    pub fn render(&self, projection: &Projection) -> Result<String> {
        if let Some(axis) = self.categories {
            let expected = axis.labels.len();
            for (index, s) in projection.series.iter().enumerate() {
                if s.points.len() != expected {
                    return Err(InvalidInputError::LengthMismatch { index, expected, found: s.points.len() });
                }
            }
        }
        let (width, height) = (self.canvas.width, self.canvas.height);
        let pad = self.canvas.padding;
        let muted = self.palette.text_muted.to_css();
        let mut out = String::new();

        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        out.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            self.palette.background.to_css()
        ));

        // legend, in the top padding band
        for (i, s) in projection.series.iter().enumerate() {
            let x = pad.left as f64 + i as f64 * LEGEND_SPACING;
            let color = self.palette.series_color(i).to_css();
            out.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"10\" r=\"5\" fill=\"{color}\"/>\n",
                num(x)
            ));
            out.push_str(&format!(
                "  <text x=\"{}\" y=\"14\" font-size=\"12\" fill=\"{muted}\">{}</text>\n",
                num(x + 10.0),
                escape(&s.name)
            ));
        }

        out.push_str(&format!("  <g transform=\"translate({}, {})\">\n", pad.left, pad.top));

        for line in &projection.grid {
            out.push_str(&format!(
                "    <line x1=\"0\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                num(projection.chart_width),
                self.palette.grid.to_css(),
                y = num(line.y),
            ));
            out.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\" fill=\"{muted}\">{}</text>\n",
                num(-LABEL_GAP),
                num(line.y + 4.0),
                escape(&self.value_format.format(line.value))
            ));
        }

        for (i, s) in projection.series.iter().enumerate() {
            out.push_str(&format!(
                "    <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
                polyline_points(&s.points),
                self.palette.series_color(i).to_css()
            ));
        }

        // markers after every line so no line crosses a marker
        for (i, s) in projection.series.iter().enumerate() {
            let radius = if i == 0 { 4 } else { 3 };
            let fill = self.palette.series_color(i).to_css();
            let stroke = self.palette.marker_stroke.to_css();
            for p in &s.points {
                out.push_str(&format!(
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>\n",
                    num(p.x),
                    num(p.y)
                ));
            }
        }

        if let Some(axis) = self.categories {
            let y = num(projection.chart_height + CATEGORY_LABEL_DROP);
            for tick in axis.ticks(projection.chart_width)? {
                out.push_str(&format!(
                    "    <text x=\"{}\" y=\"{y}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{muted}\">{}</text>\n",
                    num(tick.x),
                    escape(&tick.label)
                ));
            }
        }

        out.push_str("  </g>\n</svg>\n");
        Ok(out)
    }
}

/// Shortest decimal with at most two fraction digits.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
