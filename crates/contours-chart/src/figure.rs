//! Plotly figure model.
//!
//! Field names follow the Plotly.js JSON schema so a figure can be passed to
//! `Plotly.newPlot` unchanged.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A complete figure: traces, layout and plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<ContourTrace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

/// A `contour` trace over an elevation matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourTrace {
    /// Always `"contour"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Column longitudes.
    pub x: Vec<f64>,
    /// Row latitudes.
    pub y: Vec<f64>,
    /// Elevations `[row][col]`; `null` cells are drawn as gaps.
    pub z: Vec<Vec<Option<f64>>>,
    pub hoverinfo: String,
    pub line: ContourLine,
    pub showscale: bool,
    /// `[position, color]` stops.
    pub colorscale: Vec<(f64, Color)>,
    pub contours: Contours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourLine {
    pub color: Color,
    pub width: f64,
    pub smoothing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contours {
    pub coloring: String,
    pub showlabels: bool,
    pub labelfont: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub height: u32,
    pub autosize: bool,
    pub margin: Margin,
    pub paper_bgcolor: Color,
    pub plot_bgcolor: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub visible: bool,
    pub fixedrange: bool,
}

impl Axis {
    /// Invisible axis that ignores pan and zoom.
    pub const HIDDEN: Axis = Axis {
        visible: false,
        fixedrange: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
    pub pad: u32,
}

/// Free-floating text placed in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub textangle: f64,
    pub showarrow: bool,
}

/// Options passed as the third argument of `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub responsive: bool,
    #[serde(rename = "displaylogo")]
    pub display_logo: bool,
    #[serde(rename = "toImageButtonOptions")]
    pub to_image: ImageOptions,
}

/// Download-as-PNG settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    pub format: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
}

impl ChartFigure {
    /// Serialize to the JSON object Plotly.js expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize with indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
