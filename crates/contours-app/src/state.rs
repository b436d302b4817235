//! User interface state and its transitions.
//!
//! [`UiState`] holds every control value. Each user action is an [`Event`],
//! and [`apply`] computes the next state without side effects. Controls that
//! are disabled in the current state (the city picker while custom
//! coordinates are on, the coordinate inputs while they are off) ignore
//! their events.

use crate::config::AppConfig;
use crate::{AppError, Result};
use contours_chart::{ChartStyle, Color};
use contours_grid::{Coordinate, GridSpec};
use serde::{Deserialize, Serialize};

/// Current values of all controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Coordinates are typed in rather than taken from the city.
    pub custom_coords: bool,
    /// Selected city preset.
    pub city: String,
    /// Selected scale preset.
    pub scale: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Title shown on the chart.
    pub chart_label: String,
    /// Elevation labels on contour lines.
    pub show_elevation: bool,
    /// Title annotation.
    pub show_label: bool,
    pub background: Color,
    pub contour: Color,
    pub text: Color,
    pub smoothing: f64,
    /// Selected export size preset.
    pub export_size: String,
}

/// A single user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SetCustomCoords(bool),
    SelectCity(String),
    SelectScale(String),
    SetLatitude(f64),
    SetLongitude(f64),
    SetShowElevation(bool),
    SetShowLabel(bool),
    SetBackground(Color),
    SetContour(Color),
    SetText(Color),
    SetSmoothing(f64),
    SetExportSize(String),
    /// Restore label toggles and colors to the configured defaults.
    ResetVisuals,
}

impl UiState {
    /// State shown on first load: first city and scale, default visuals.
    pub fn initial(config: &AppConfig) -> Self {
        let city = config.default_city();
        let visuals = &config.visuals;
        Self {
            custom_coords: false,
            city: city.name.clone(),
            scale: config.default_scale().name.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
            chart_label: city.name.clone(),
            show_elevation: visuals.show_elevation,
            show_label: visuals.show_label,
            background: visuals.background,
            contour: visuals.contour,
            text: visuals.text,
            smoothing: visuals.smoothing,
            export_size: config.default_export_size().name.clone(),
        }
    }

    /// Load a state saved as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Current center coordinate.
    pub fn center(&self) -> Result<Coordinate> {
        Ok(Coordinate::new(self.latitude, self.longitude)?)
    }

    /// Grid to fetch for the current center and scale.
    pub fn grid_spec(&self, config: &AppConfig) -> Result<GridSpec> {
        let scale = config
            .scale(&self.scale)
            .ok_or_else(|| AppError::UnknownPreset {
                kind: "scale",
                name: self.scale.clone(),
            })?;
        Ok(GridSpec::new(self.center()?, scale.resolution, scale.span_km)?)
    }

    /// Chart style for the current visuals.
    pub fn chart_style(&self, config: &AppConfig) -> ChartStyle {
        let export = config
            .export_size(&self.export_size)
            .map(|preset| preset.size())
            .unwrap_or_default();
        ChartStyle {
            background: self.background,
            contour: self.contour,
            text: self.text,
            show_labels: self.show_elevation,
            show_title: self.show_label,
            smoothing: self.smoothing,
            title: self.chart_label.clone(),
            export,
        }
    }

    fn coordinate_label(&self) -> String {
        format!("{}  {}", self.latitude, self.longitude)
    }

    fn use_city(&mut self, config: &AppConfig) {
        if let Some(city) = config.city(&self.city) {
            self.latitude = city.latitude;
            self.longitude = city.longitude;
        }
        self.chart_label = self.city.clone();
    }
}

/// Compute the state after `event`.
pub fn apply(state: UiState, event: &Event, config: &AppConfig) -> UiState {
    let mut next = state;
    match event {
        Event::SetCustomCoords(on) => {
            next.custom_coords = *on;
            if *on {
                next.chart_label = next.coordinate_label();
            } else {
                next.use_city(config);
            }
        }
        Event::SelectCity(name) => {
            if !next.custom_coords && config.city(name).is_some() {
                next.city = name.clone();
                next.use_city(config);
            }
        }
        Event::SelectScale(name) => {
            if config.scale(name).is_some() {
                next.scale = name.clone();
                if !next.custom_coords {
                    next.use_city(config);
                }
            }
        }
        Event::SetLatitude(lat) => {
            if next.custom_coords && lat.is_finite() {
                next.latitude = lat.clamp(-90.0, 90.0);
                next.chart_label = next.coordinate_label();
            }
        }
        Event::SetLongitude(lon) => {
            if next.custom_coords && lon.is_finite() {
                next.longitude = lon.clamp(-180.0, 180.0);
                next.chart_label = next.coordinate_label();
            }
        }
        Event::SetShowElevation(on) => next.show_elevation = *on,
        Event::SetShowLabel(on) => next.show_label = *on,
        Event::SetBackground(color) => next.background = *color,
        Event::SetContour(color) => next.contour = *color,
        Event::SetText(color) => next.text = *color,
        Event::SetSmoothing(value) => {
            if value.is_finite() {
                next.smoothing = value.clamp(0.0, 1.0);
            }
        }
        Event::SetExportSize(name) => {
            if config.export_size(name).is_some() {
                next.export_size = name.clone();
            }
        }
        Event::ResetVisuals => {
            let visuals = &config.visuals;
            next.show_elevation = visuals.show_elevation;
            next.show_label = visuals.show_label;
            next.background = visuals.background;
            next.contour = visuals.contour;
            next.text = visuals.text;
        }
    }
    next
}

/// Apply events in order.
pub fn apply_all<'a>(
    state: UiState,
    events: impl IntoIterator<Item = &'a Event>,
    config: &AppConfig,
) -> UiState {
    events
        .into_iter()
        .fold(state, |state, event| apply(state, event, config))
}
