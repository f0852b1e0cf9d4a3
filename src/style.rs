//! Render styling. Every style has sensible defaults; a TOML style sheet can
//! override any subset of fields. Loading falls back to defaults on any
//! parse failure rather than aborting a render cycle.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Color;
use crate::palette;

/// Dot-matrix grid styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Total number of cells (one difficulty period of blocks).
    pub total_cells: usize,
    pub columns: usize,
    /// Cell edge length in pixels.
    pub dot: usize,
    /// Gap between cells.
    pub gap: usize,
    /// Transparent margin outside the rounded background.
    pub padding: usize,
    /// Background margin around the grid, inside the rounded edge.
    pub border: usize,
    pub corner_radius: usize,
    pub background: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            total_cells: 2016,
            columns: 56,
            dot: 8,
            gap: 1,
            padding: 5,
            border: 20,
            corner_radius: 13,
            background: palette::TERMINAL_BACKGROUND,
        }
    }
}

/// Flow-ribbon diagram styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStyle {
    pub width: usize,
    pub height: usize,
    /// Horizontal reach of each ribbon from its side to the center.
    pub half_width: f32,
    /// Vertical extent scaling input stroke widths.
    pub extent: f32,
    /// Vertical slack distributed across the gaps of a side.
    pub gap_budget: f32,
    /// Fixed stroke multiplier for the output side.
    pub out_scale: f32,
    /// Discrete shades sampled from the ribbon gradient.
    pub gradient_samples: usize,
    /// Gradient stops swept left to right across the ribbons.
    pub gradient: Vec<Color>,
    pub background: Color,
    pub ink: Color,
    /// Distance between a segment anchor and its label column.
    pub label_gap: f32,
    /// Extra reach of the output-side arrow heads.
    pub arrow_pad: f32,
}

impl Default for FlowStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            half_width: 350.0,
            extent: 200.0,
            gap_budget: 300.0,
            out_scale: 2.0,
            gradient_samples: 256,
            gradient: vec![
                palette::SIGNAL_BLUE_DARK,
                Color::BLACK,
                palette::NO_SIGNAL_ORANGE_DARK,
            ],
            background: Color::WHITE,
            ink: Color::BLACK,
            label_gap: 9.0,
            arrow_pad: 10.0,
        }
    }
}

/// Stacked time-series histogram styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramStyle {
    pub width: usize,
    pub height: usize,
    /// Clear margin around the plot area.
    pub margin: usize,
    /// Weight that fills the plot height; heavier buckets are clamped.
    pub max_weight: f64,
    /// Every Nth bucket gets an x-axis label.
    pub label_stride: usize,
    /// Horizontal space reserved for the legend.
    pub legend_width: usize,
    pub background: Color,
    pub ink: Color,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            margin: 60,
            max_weight: 4_000_000.0,
            label_stride: 10,
            legend_width: 280,
            background: Color::WHITE,
            ink: Color::BLACK,
        }
    }
}

/// Pie breakdown styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub width: usize,
    pub height: usize,
    /// Wedge radius inset from the canvas half-height.
    pub rim_inset: usize,
    /// Radius of the label anchor circle.
    pub label_radius: f32,
    /// Radius where the radial shading starts; shades run from here to the rim.
    pub gradient_start: f32,
    /// Minimum angular gap between adjacent labels before they are pushed
    /// apart (radians).
    pub min_label_gap: f32,
    /// Fixed nudge applied to each label of a crowded pair (radians).
    pub label_delta: f32,
    pub background: Color,
    pub ink: Color,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            rim_inset: 10,
            label_radius: 225.0,
            gradient_start: 175.0,
            min_label_gap: 0.12,
            label_delta: 0.05,
            background: Color::WHITE,
            ink: Color::BLACK,
        }
    }
}

/// All chart styles in one sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub grid: GridStyle,
    pub flow: FlowStyle,
    pub histogram: HistogramStyle,
    pub pie: PieStyle,
}

impl StyleSheet {
    /// Parse a TOML style sheet, falling back to defaults if it is invalid.
    pub fn from_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    /// Load a style sheet from disk, returning defaults if the file is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_layout() {
        let grid = GridStyle::default();
        assert_eq!(grid.total_cells, 2016);
        assert_eq!(grid.columns, 56);
        assert_eq!(grid.total_cells / grid.columns, 36);
    }

    #[test]
    fn test_partial_toml_overrides_single_field() {
        let sheet = StyleSheet::from_toml("[grid]\ndot = 12\n");
        assert_eq!(sheet.grid.dot, 12);
        assert_eq!(sheet.grid.columns, 56);
        assert_eq!(sheet.flow.width, 1200);
    }

    #[test]
    fn test_color_fields_parse_hex() {
        let sheet = StyleSheet::from_toml("[flow]\nbackground = \"#102030\"\n");
        assert_eq!(sheet.flow.background, Color::rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let sheet = StyleSheet::from_toml("[grid\ndot = ");
        assert_eq!(sheet.grid.dot, 8);
    }

    #[test]
    fn test_roundtrip() {
        let sheet = StyleSheet::default();
        let toml = toml::to_string(&sheet).unwrap();
        let back = StyleSheet::from_toml(&toml);
        assert_eq!(back.grid.background, sheet.grid.background);
        assert_eq!(back.histogram.max_weight, sheet.histogram.max_weight);
    }
}
