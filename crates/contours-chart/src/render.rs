//! Grid to figure rendering.

use crate::{
    Annotation, Axis, ChartConfig, ChartFigure, ChartStyle, ContourLine, ContourTrace, Contours,
    Font, ImageOptions, Layout, Margin, PlotConfig,
};
use contours_grid::ElevationGrid;
use tracing::debug;

/// Render a grid with the default chart constants.
pub fn render(grid: &ElevationGrid, style: &ChartStyle) -> ChartFigure {
    render_with(grid, style, &ChartConfig::default())
}

/// Render a grid as a contour figure.
///
/// Missing cells are passed through as `null`; Plotly leaves gaps for them.
pub fn render_with(grid: &ElevationGrid, style: &ChartStyle, config: &ChartConfig) -> ChartFigure {
    debug!(
        dimension = grid.dimension(),
        missing = grid.missing_count(),
        labels = style.show_labels,
        title = style.show_title,
        "Rendering contour figure"
    );

    let trace = ContourTrace {
        kind: "contour".to_string(),
        x: grid.cols().to_vec(),
        y: grid.rows().to_vec(),
        z: grid.elevations().to_vec(),
        hoverinfo: "none".to_string(),
        line: ContourLine {
            color: style.contour,
            width: config.line_width,
            smoothing: style.clamped_smoothing(),
        },
        showscale: false,
        // Flat fill: elevation shows only through the lines.
        colorscale: vec![(0.0, style.background), (1.0, style.background)],
        contours: Contours {
            coloring: "fill".to_string(),
            showlabels: style.show_labels,
            labelfont: Font {
                family: config.font_family.clone(),
                size: config.label_font_size,
                color: style.contour,
            },
        },
    };

    let (font, annotations) = if style.show_title {
        let title = Annotation {
            text: style.title.clone(),
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x: config.title_x,
            y: config.title_y,
            textangle: config.title_angle,
            showarrow: false,
        };
        let font = Font {
            family: config.font_family.clone(),
            size: config.title_font_size,
            color: style.text,
        };
        (Some(font), vec![title])
    } else {
        (None, Vec::new())
    };

    let layout = Layout {
        xaxis: Axis::HIDDEN,
        yaxis: Axis::HIDDEN,
        height: config.height,
        autosize: true,
        margin: Margin::default(),
        paper_bgcolor: style.background,
        plot_bgcolor: style.background,
        font,
        annotations,
    };

    let plot_config = PlotConfig {
        responsive: true,
        display_logo: false,
        to_image: ImageOptions {
            format: "png".to_string(),
            filename: export_filename(&style.title),
            width: style.export.width,
            height: style.export.height,
        },
    };

    ChartFigure {
        data: vec![trace],
        layout,
        config: plot_config,
    }
}

/// Lowercase, dash-separated file name for exported images.
fn export_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            name.push(c.to_ascii_lowercase());
        } else if !name.ends_with('-') && !name.is_empty() {
            name.push('-');
        }
    }
    let name = name.trim_end_matches('-');
    if name.is_empty() {
        "contours".to_string()
    } else {
        format!("contours-{name}")
    }
}
