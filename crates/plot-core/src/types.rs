// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, bin defaults, plot kinds).

use std::fmt;
use std::str::FromStr;

use crate::error::{PlotError, Result};

/// RGBA8 color used for marks and the canvas background.
pub type Color = image::Rgba<u8>;

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 600;
/// Histogram bin count of a fresh renderer.
pub const DEFAULT_BINS: usize = 100;

pub const WHITE: Color = image::Rgba([255, 255, 255, 255]);
pub const BLACK: Color = image::Rgba([0, 0, 0, 255]);

/// Parse `#rrggbb` or `#rrggbbaa` into a color. The leading `#` is optional.
pub fn parse_color(s: &str) -> Result<Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return Err(PlotError::InvalidColor(s.to_string()));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| PlotError::InvalidColor(s.to_string()))
    };
    let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(image::Rgba([byte(0)?, byte(2)?, byte(4)?, alpha]))
}

/// The four plot types a renderer can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotKind {
    Histogram,
    Scatter,
    Line,
    Box,
}

impl PlotKind {
    pub const ALL: [PlotKind; 4] = [PlotKind::Histogram, PlotKind::Scatter, PlotKind::Line, PlotKind::Box];

    pub const fn name(self) -> &'static str {
        match self {
            PlotKind::Histogram => "histogram",
            PlotKind::Scatter => "scatter",
            PlotKind::Line => "line",
            PlotKind::Box => "box",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlotKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        PlotKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlotError::UnknownPlotKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#ff8000").unwrap(), image::Rgba([255, 128, 0, 255]));
        assert_eq!(parse_color("10203040").unwrap(), image::Rgba([16, 32, 48, 64]));
        assert!(matches!(parse_color("#12345"), Err(PlotError::InvalidColor(_))));
        assert!(matches!(parse_color("#gg0000"), Err(PlotError::InvalidColor(_))));
        assert!(matches!(parse_color("#ééé"), Err(PlotError::InvalidColor(_))));
    }

    #[test]
    fn plot_kind_names_round_trip() {
        for kind in PlotKind::ALL {
            assert_eq!(kind.to_string().parse::<PlotKind>().unwrap(), kind);
        }
        assert_eq!("BOX".parse::<PlotKind>().unwrap(), PlotKind::Box);
        assert!("pie".parse::<PlotKind>().is_err());
    }
}
