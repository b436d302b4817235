//! Standalone HTML pages.
//!
//! A page shows either a chart or, when the data could not be fetched, the
//! error message in place of the chart. It never shows both.

use crate::ChartFigure;

/// Page heading and sidebar notes shared by chart and error pages.
#[derive(Debug, Clone)]
pub struct Page {
    heading: String,
    notes: Vec<(String, String)>,
    plotly_src: String,
}

impl Page {
    pub fn new(heading: impl Into<String>, plotly_src: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            notes: Vec::new(),
            plotly_src: plotly_src.into(),
        }
    }

    /// Add a `label: value` line under the heading.
    pub fn with_note(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.push((label.into(), value.into()));
        self
    }

    /// Page drawing `figure` full width.
    pub fn chart(&self, figure: &ChartFigure) -> serde_json::Result<String> {
        let data = script_json(&serde_json::to_string(&figure.data)?);
        let layout = script_json(&serde_json::to_string(&figure.layout)?);
        let config = script_json(&serde_json::to_string(&figure.config)?);
        let background = figure.layout.paper_bgcolor;

        let body = format!(
            r#"<div id="chart"></div>
<script src="{src}"></script>
<script>
Plotly.newPlot("chart", {data}, {layout}, {config});
</script>"#,
            src = escape_html(&self.plotly_src),
        );
        Ok(self.document(&format!("background:{background};"), &body))
    }

    /// Page showing `message` instead of a chart.
    pub fn error(&self, message: &str) -> String {
        let body = format!(
            r#"<div class="error" role="alert"><strong>Could not draw the map.</strong><p>{}</p></div>"#,
            escape_html(message)
        );
        self.document("", &body)
    }

    fn document(&self, main_style: &str, body: &str) -> String {
        let notes: String = self
            .notes
            .iter()
            .map(|(label, value)| {
                format!(
                    "<li><span>{}</span> {}</li>",
                    escape_html(label),
                    escape_html(value)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{heading}</title>
<style>
body {{ margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }}
aside {{ width: 18rem; padding: 1.5rem; background: #f0f2f6; }}
aside li span {{ font-weight: bold; }}
main {{ flex: 1; }}
#chart {{ width: 100%; }}
.error {{ margin: 2rem; padding: 1rem; border-left: 4px solid #d33; background: #fdecea; }}
</style>
</head>
<body>
<aside>
<h1>{heading}</h1>
<p><em>Adjust the scale &amp; colours of the map and hover over it to download.</em></p>
<ul>{notes}</ul>
</aside>
<main style="{main_style}">
{body}
</main>
</body>
</html>
"#,
            heading = escape_html(&self.heading),
        )
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make serialized JSON safe to embed in a `<script>` element.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, ChartStyle};
    use contours_grid::ElevationGrid;

    fn page() -> Page {
        Page::new("Contour map", "https://cdn.example/plotly.js").with_note("City", "Belfast")
    }

    #[test]
    fn test_chart_page_embeds_figure() {
        let grid = ElevationGrid::from_row_major(vec![0.0], vec![0.0], vec![Some(3.0)]).unwrap();
        let figure = render(&grid, &ChartStyle::titled("</script><b>x</b>"));
        let html = page().chart(&figure).unwrap();

        assert!(html.contains(r#"<script src="https://cdn.example/plotly.js"></script>"#));
        assert!(html.contains("Plotly.newPlot(\"chart\""));
        assert!(html.contains("\"type\":\"contour\""));
        assert!(html.contains("<span>City</span> Belfast"));
        assert!(!html.contains("</script><b>"));
        assert!(html.contains("background:#000000;"));
    }

    #[test]
    fn test_error_page_has_no_chart() {
        let html = page().error("HTTP 500 <from service>");
        assert!(html.contains("Could not draw the map."));
        assert!(html.contains("HTTP 500 &lt;from service&gt;"));
        assert!(!html.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
