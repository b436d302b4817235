//! Chart styling and fixed chart constants.

use crate::Color;
use serde::{Deserialize, Serialize};

/// Cosmetic options chosen by the user for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Fill color behind the contour lines.
    pub background: Color,
    /// Contour line and label color.
    pub contour: Color,
    /// Title annotation color.
    pub text: Color,
    /// Inline elevation labels on contour lines.
    pub show_labels: bool,
    /// Rotated title annotation.
    pub show_title: bool,
    /// Line smoothing, 0 (angular) to 1 (smooth).
    pub smoothing: f64,
    /// Title annotation text.
    pub title: String,
    /// Size of images exported from the chart's download button.
    pub export: ExportSize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            contour: Color::SLATE,
            text: Color::SLATE,
            show_labels: true,
            show_title: true,
            smoothing: 1.0,
            title: String::new(),
            export: ExportSize::default(),
        }
    }
}

impl ChartStyle {
    /// Default style with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Smoothing clamped to `0.0..=1.0`; non-finite values become 0.
    pub fn clamped_smoothing(&self) -> f64 {
        if self.smoothing.is_finite() {
            self.smoothing.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Pixel size of exported PNG images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ExportSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl std::fmt::Display for ExportSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Constants shared by every chart, independent of the user's style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Plot height in pixels; width follows the container.
    pub height: u32,
    /// Contour line width.
    pub line_width: f64,
    /// Font family for labels and the title.
    pub font_family: String,
    /// Contour label font size.
    pub label_font_size: u32,
    /// Title annotation font size.
    pub title_font_size: u32,
    /// Title position in paper coordinates (0..1).
    pub title_x: f64,
    pub title_y: f64,
    /// Title rotation in degrees.
    pub title_angle: f64,
    /// Plotly.js script loaded by generated pages.
    pub plotly_src: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 800,
            line_width: 1.25,
            font_family: "Droid Serif".to_string(),
            label_font_size: 14,
            title_font_size: 32,
            title_x: 0.95,
            title_y: 0.95,
            title_angle: -90.0,
            plotly_src: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}
