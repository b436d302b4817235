//! Checks the serialized figure against the Plotly.js attribute names.

use approx::assert_relative_eq;
use contours_chart::{render, ChartFigure, ChartStyle, Color, ExportSize};
use contours_grid::ElevationGrid;
use serde_json::Value;

fn grid() -> ElevationGrid {
    ElevationGrid::from_row_major(
        vec![54.57, 54.5973, 54.62],
        vec![-5.95, -5.9301, -5.91],
        vec![Some(12.0), Some(40.5), None, Some(8.0), Some(20.0), Some(31.0), Some(2.0), Some(5.5), Some(9.0)],
    )
    .unwrap()
}

fn style() -> ChartStyle {
    ChartStyle {
        background: "#000000".parse().unwrap(),
        contour: "#616375".parse().unwrap(),
        text: "#ffffff".parse().unwrap(),
        show_labels: true,
        show_title: true,
        smoothing: 0.8,
        title: "Belfast".to_string(),
        export: ExportSize {
            width: 1920,
            height: 1080,
        },
    }
}

#[test]
fn test_trace_json() {
    let value: Value = serde_json::to_value(render(&grid(), &style())).unwrap();
    let trace = &value["data"][0];

    assert_eq!(trace["type"], "contour");
    assert_eq!(trace["hoverinfo"], "none");
    assert_eq!(trace["showscale"], false);
    assert_eq!(trace["line"]["color"], "#616375");
    assert_relative_eq!(trace["line"]["width"].as_f64().unwrap(), 1.25);
    assert_relative_eq!(trace["line"]["smoothing"].as_f64().unwrap(), 0.8);
    assert_eq!(trace["colorscale"], serde_json::json!([[0.0, "#000000"], [1.0, "#000000"]]));
    assert_eq!(trace["contours"]["showlabels"], true);
    assert_eq!(trace["contours"]["labelfont"]["family"], "Droid Serif");
    assert_eq!(trace["z"][0][2], Value::Null);
    assert_relative_eq!(trace["z"][0][1].as_f64().unwrap(), 40.5);
}

#[test]
fn test_layout_json() {
    let value: Value = serde_json::to_value(render(&grid(), &style())).unwrap();
    let layout = &value["layout"];

    assert_eq!(layout["xaxis"], serde_json::json!({"visible": false, "fixedrange": true}));
    assert_eq!(layout["yaxis"], serde_json::json!({"visible": false, "fixedrange": true}));
    assert_eq!(layout["height"], 800);
    assert_eq!(
        layout["margin"],
        serde_json::json!({"l": 0, "r": 0, "b": 0, "t": 0, "pad": 0})
    );
    assert_eq!(layout["font"]["color"], "#ffffff");
    assert_eq!(layout["font"]["size"], 32);
    assert_eq!(layout["annotations"][0]["text"], "Belfast");
    assert_eq!(layout["annotations"][0]["xref"], "paper");
    assert_eq!(layout["annotations"][0]["showarrow"], false);

    let config = &value["config"];
    assert_eq!(config["displaylogo"], false);
    assert_eq!(config["toImageButtonOptions"]["width"], 1920);
    assert_eq!(config["toImageButtonOptions"]["height"], 1080);
    assert_eq!(config["toImageButtonOptions"]["filename"], "contours-belfast");
}

#[test]
fn test_untitled_layout_omits_font_and_annotations() {
    let mut style = style();
    style.show_title = false;
    let value: Value = serde_json::to_value(render(&grid(), &style)).unwrap();
    assert!(value["layout"].get("font").is_none());
    assert!(value["layout"].get("annotations").is_none());
}

#[test]
fn test_figure_json_reads_back() {
    let figure = render(&grid(), &style());
    let json = figure.to_json_pretty().unwrap();
    let back: ChartFigure = serde_json::from_str(&json).unwrap();
    assert_eq!(back.layout, figure.layout);
    assert_eq!(back.config, figure.config);
    assert_eq!(back.data[0].line.color, Color::SLATE);
    assert_eq!(back.data[0].z.len(), 3);
    assert_relative_eq!(back.data[0].y[1], 54.5973, epsilon = 1e-12);
}
