//! # contours-chart
//!
//! Renders an [`ElevationGrid`](contours_grid::ElevationGrid) as a contour
//! map.
//!
//! The output is a [`ChartFigure`]: a Plotly figure description (`data`,
//! `layout`, `config`) that serializes to the JSON Plotly.js expects. The
//! [`page`] module wraps a figure in a standalone HTML document.
//!
//! Elevation is shown through contour lines only. The fill colorscale is a
//! single flat color (the background), axes are hidden and locked, and the
//! plot uses the full page width.
//!
//! ```
//! use contours_chart::{render, ChartStyle};
//! use contours_grid::ElevationGrid;
//!
//! let grid = ElevationGrid::from_row_major(
//!     vec![0.0, 1.0],
//!     vec![0.0, 1.0],
//!     vec![Some(10.0), Some(20.0), Some(30.0), None],
//! ).unwrap();
//!
//! let figure = render(&grid, &ChartStyle::titled("Belfast"));
//! assert_eq!(figure.layout.height, 800);
//! ```

mod color;
mod figure;
pub mod page;
mod render;
mod style;

pub use color::{Color, ColorError};
pub use figure::{
    Annotation, Axis, ChartFigure, ContourLine, ContourTrace, Contours, Font, ImageOptions,
    Layout, Margin, PlotConfig,
};
pub use render::{render, render_with};
pub use style::{ChartConfig, ChartStyle, ExportSize};
