// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theme switch resolved into a palette of dashboard colors.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb_hex(rgb: u32) -> Self {
        Self::from_argb(255, (rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

/// Style table every themed element reads from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub card: Color,
    pub card_border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub grid: Color,
    pub marker_stroke: Color,
    /// Line colors, cycled in series order.
    pub series: Vec<Color>,
}

impl Palette {
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}

// costs, savings, then the vitals accents
const SERIES_DARK: [u32; 5] = [0xEF4444, 0x10B981, 0x60A5FA, 0xC084FC, 0xFACC15];
const SERIES_LIGHT: [u32; 5] = [0xDC2626, 0x059669, 0x2563EB, 0x9333EA, 0xCA8A04];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                name: "dark",
                background: Color::from_rgb_hex(0x111827),
                card: Color::from_argb(128, 31, 41, 55),
                card_border: Color::from_rgb_hex(0x374151),
                text: Color::from_rgb_hex(0xFFFFFF),
                text_muted: Color::from_rgb_hex(0x9CA3AF),
                accent: Color::from_rgb_hex(0x22D3EE),
                grid: Color::from_argb(77, 55, 65, 81),
                marker_stroke: Color::from_rgb_hex(0x1F2937),
                series: SERIES_DARK.iter().map(|&c| Color::from_rgb_hex(c)).collect(),
            },
            Theme::Light => Palette {
                name: "light",
                background: Color::from_rgb_hex(0xF9FAFB),
                card: Color::from_argb(128, 255, 255, 255),
                card_border: Color::from_rgb_hex(0xE5E7EB),
                text: Color::from_rgb_hex(0x111827),
                text_muted: Color::from_rgb_hex(0x4B5563),
                accent: Color::from_rgb_hex(0x0891B2),
                grid: Color::from_argb(153, 209, 213, 219),
                marker_stroke: Color::from_rgb_hex(0xFFFFFF),
                series: SERIES_LIGHT.iter().map(|&c| Color::from_rgb_hex(c)).collect(),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}', expected one of: dark, light")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        presets()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Return the list of built-in themes.
pub fn presets() -> Vec<Theme> {
    vec![Theme::Dark, Theme::Light]
}
