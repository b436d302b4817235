//! Command-line interface.

use crate::config::AppConfig;
use crate::state::Event;
use crate::{AppError, Result};
use clap::Parser;
use contours_chart::Color;
use std::path::PathBuf;

/// Draw an elevation contour map for a city or a coordinate pair.
#[derive(Debug, Parser)]
#[command(name = "contours", version, about)]
pub struct Cli {
    /// YAML configuration file (presets, service endpoint, default visuals).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from a saved UI state (JSON) instead of the defaults.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Save the final UI state (JSON).
    #[arg(long)]
    pub save_state: Option<PathBuf>,

    /// City preset to map.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Scale preset (grid resolution and span).
    #[arg(long)]
    pub scale: Option<String>,

    /// Custom center latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Custom center longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Restore default label toggles and colors before applying other flags.
    #[arg(long)]
    pub reset_visuals: bool,

    /// Background color (#rrggbb).
    #[arg(long)]
    pub background: Option<Color>,

    /// Contour line color (#rrggbb).
    #[arg(long)]
    pub contour: Option<Color>,

    /// Title text color (#rrggbb).
    #[arg(long)]
    pub text: Option<Color>,

    /// Hide elevation labels on the contour lines.
    #[arg(long)]
    pub no_elevation_labels: bool,

    /// Hide the title annotation.
    #[arg(long)]
    pub no_title: bool,

    /// Line smoothing between 0 and 1.
    #[arg(long)]
    pub smoothing: Option<f64>,

    /// Export image size preset used by the chart's download button.
    #[arg(long)]
    pub export_size: Option<String>,

    /// HTML page to write.
    #[arg(short, long, default_value = "contours.html")]
    pub output: PathBuf,

    /// Also write the Plotly figure as JSON.
    #[arg(long)]
    pub figure_json: Option<PathBuf>,

    /// Print the available presets and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Record grid fetch counters and print the totals on exit.
    #[arg(long)]
    pub metrics: bool,
}

impl Cli {
    /// Translate flags into events, in the order the controls would be used.
    ///
    /// Preset names are checked here so a typo fails loudly instead of
    /// being ignored by the state transition.
    pub fn events(&self, config: &AppConfig) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        if self.reset_visuals {
            events.push(Event::ResetVisuals);
        }

        if let Some(city) = &self.city {
            if config.city(city).is_none() {
                return Err(AppError::UnknownPreset {
                    kind: "city",
                    name: city.clone(),
                });
            }
            events.push(Event::SetCustomCoords(false));
            events.push(Event::SelectCity(city.clone()));
        }

        if let Some(scale) = &self.scale {
            if config.scale(scale).is_none() {
                return Err(AppError::UnknownPreset {
                    kind: "scale",
                    name: scale.clone(),
                });
            }
            events.push(Event::SelectScale(scale.clone()));
        }

        if self.lat.is_some() || self.lon.is_some() {
            events.push(Event::SetCustomCoords(true));
            if let Some(lat) = self.lat {
                events.push(Event::SetLatitude(lat));
            }
            if let Some(lon) = self.lon {
                events.push(Event::SetLongitude(lon));
            }
        }

        if self.no_elevation_labels {
            events.push(Event::SetShowElevation(false));
        }
        if self.no_title {
            events.push(Event::SetShowLabel(false));
        }
        if let Some(color) = self.background {
            events.push(Event::SetBackground(color));
        }
        if let Some(color) = self.contour {
            events.push(Event::SetContour(color));
        }
        if let Some(color) = self.text {
            events.push(Event::SetText(color));
        }
        if let Some(smoothing) = self.smoothing {
            events.push(Event::SetSmoothing(smoothing));
        }

        if let Some(size) = &self.export_size {
            if config.export_size(size).is_none() {
                return Err(AppError::UnknownPreset {
                    kind: "export size",
                    name: size.clone(),
                });
            }
            events.push(Event::SetExportSize(size.clone()));
        }

        Ok(events)
    }
}

/// Human-readable preset listing.
pub fn describe_presets(config: &AppConfig) -> String {
    let mut out = String::from("Cities:\n");
    for city in &config.cities {
        out.push_str(&format!(
            "  {:<12} {:>9.4} {:>10.4}\n",
            city.name, city.latitude, city.longitude
        ));
    }
    out.push_str("Scales:\n");
    for scale in &config.scales {
        out.push_str(&format!(
            "  {:<12} {}x{} samples, {} km steps\n",
            scale.name, scale.resolution, scale.resolution, scale.span_km
        ));
    }
    out.push_str("Export sizes:\n");
    for size in &config.export_sizes {
        out.push_str(&format!("  {:<12} {}\n", size.name, size.size()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("contours").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_no_events() {
        let cli = parse(&[]);
        assert!(cli.events(&AppConfig::default()).unwrap().is_empty());
        assert_eq!(cli.output, PathBuf::from("contours.html"));
    }

    #[test]
    fn test_city_and_scale() {
        let events = parse(&["--city", "New York", "--scale", "Large"])
            .events(&AppConfig::default())
            .unwrap();
        assert_eq!(
            events,
            vec![
                Event::SetCustomCoords(false),
                Event::SelectCity("New York".into()),
                Event::SelectScale("Large".into()),
            ]
        );
    }

    #[test]
    fn test_negative_coordinates() {
        let events = parse(&["--lat", "-33.8688", "--lon", "151.2093"])
            .events(&AppConfig::default())
            .unwrap();
        assert_eq!(
            events,
            vec![
                Event::SetCustomCoords(true),
                Event::SetLatitude(-33.8688),
                Event::SetLongitude(151.2093),
            ]
        );
    }

    #[test]
    fn test_visual_flags() {
        let events = parse(&[
            "--reset-visuals",
            "--no-title",
            "--background",
            "#FFFFFF",
            "--smoothing",
            "0.5",
            "--export-size",
            "1920x1080",
        ])
        .events(&AppConfig::default())
        .unwrap();
        assert_eq!(
            events,
            vec![
                Event::ResetVisuals,
                Event::SetShowLabel(false),
                Event::SetBackground(Color::WHITE),
                Event::SetSmoothing(0.5),
                Event::SetExportSize("1920x1080".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_presets_rejected() {
        let config = AppConfig::default();
        assert!(matches!(
            parse(&["--city", "Atlantis"]).events(&config),
            Err(AppError::UnknownPreset { kind: "city", .. })
        ));
        assert!(matches!(
            parse(&["--scale", "Huge"]).events(&config),
            Err(AppError::UnknownPreset { kind: "scale", .. })
        ));
    }

    #[test]
    fn test_bad_color_rejected_by_parser() {
        assert!(Cli::try_parse_from(["contours", "--contour", "blue"]).is_err());
    }

    #[test]
    fn test_city_conflicts_with_coordinates() {
        assert!(Cli::try_parse_from(["contours", "--city", "Belfast", "--lat", "1"]).is_err());
    }

    #[test]
    fn test_metrics_flag() {
        let cli = parse(&["--metrics"]);
        assert!(cli.metrics);
        assert!(cli.events(&AppConfig::default()).unwrap().is_empty());
        assert!(!parse(&[]).metrics);
    }

    #[test]
    fn test_describe_presets() {
        let text = describe_presets(&AppConfig::default());
        assert!(text.starts_with("Cities:\n"));
        assert!(text.contains("Edinburgh"));
        assert!(text.contains("15x15 samples, 5 km steps"));
        assert!(text.contains("1920x1080"));
    }
}
