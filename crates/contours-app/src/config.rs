//! Application configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! gives the stock setup: the public OpenTopoData SRTM 90m dataset, three
//! city presets, three scale presets and a dark theme.
//!
//! ```yaml
//! service:
//!   base_url: http://localhost:5000
//!   batch_size: 50
//! cities:
//!   - { name: Belfast, latitude: 54.5973, longitude: -5.9301 }
//! scales:
//!   - { name: Small, resolution: 5, span_km: 2.0 }
//! visuals:
//!   background: "#ffffff"
//!   contour: "#222222"
//! ```

use crate::{AppError, Result};
use contours_chart::{ChartConfig, Color, ExportSize};
use contours_grid::{
    Coordinate, OpenTopoDataConfig, DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE, DEFAULT_DATASET,
    DEFAULT_INTERPOLATION, MAX_RESOLUTION,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Elevation service endpoint and batching.
    pub service: ServiceConfig,
    /// Selectable cities; the first is the initial selection.
    pub cities: Vec<CityPreset>,
    /// Selectable grid scales; the first is the initial selection.
    pub scales: Vec<ScalePreset>,
    /// Selectable export image sizes; the first is the initial selection.
    pub export_sizes: Vec<ExportPreset>,
    /// Values restored by "reset visuals".
    pub visuals: VisualDefaults,
    /// Fixed chart constants.
    pub chart: ChartConfig,
}

/// Elevation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub dataset: String,
    pub interpolation: String,
    /// Maximum points per request.
    pub batch_size: usize,
    /// Request timeout in seconds; unset keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            interpolation: DEFAULT_INTERPOLATION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    /// Client settings for [`contours_grid::OpenTopoData`].
    pub fn client_config(&self) -> OpenTopoDataConfig {
        OpenTopoDataConfig {
            base_url: self.base_url.clone(),
            dataset: self.dataset.clone(),
            interpolation: self.interpolation.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityPreset {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityPreset {
    fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }
}

/// Grid resolution and span offered as one choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePreset {
    pub name: String,
    pub resolution: usize,
    pub span_km: f64,
}

impl ScalePreset {
    fn new(name: &str, resolution: usize, span_km: f64) -> Self {
        Self {
            name: name.to_string(),
            resolution,
            span_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPreset {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl ExportPreset {
    pub fn size(&self) -> ExportSize {
        ExportSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Default visual settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualDefaults {
    pub show_elevation: bool,
    pub show_label: bool,
    pub background: Color,
    pub contour: Color,
    pub text: Color,
    pub smoothing: f64,
}

impl Default for VisualDefaults {
    fn default() -> Self {
        Self {
            show_elevation: true,
            show_label: true,
            background: Color::BLACK,
            contour: Color::SLATE,
            text: Color::SLATE,
            smoothing: 1.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            cities: vec![
                CityPreset::new("Belfast", 54.5973, -5.9301),
                CityPreset::new("Edinburgh", 55.9533, -3.1883),
                CityPreset::new("New York", 40.7128, -74.0060),
            ],
            scales: vec![
                ScalePreset::new("Small", 5, 2.0),
                ScalePreset::new("Medium", 9, 3.0),
                ScalePreset::new("Large", 15, 5.0),
            ],
            export_sizes: vec![
                ExportPreset {
                    name: "800x800".to_string(),
                    width: 800,
                    height: 800,
                },
                ExportPreset {
                    name: "1920x1080".to_string(),
                    width: 1920,
                    height: 1080,
                },
            ],
            visuals: VisualDefaults::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        let config: AppConfig = if yaml.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check preset lists and service settings.
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(AppError::InvalidConfig("at least one city is required".into()));
        }
        if self.scales.is_empty() {
            return Err(AppError::InvalidConfig("at least one scale is required".into()));
        }
        if self.export_sizes.is_empty() {
            return Err(AppError::InvalidConfig(
                "at least one export size is required".into(),
            ));
        }
        if self.service.batch_size == 0 {
            return Err(AppError::InvalidConfig("batch_size must be positive".into()));
        }

        for city in &self.cities {
            Coordinate::new(city.latitude, city.longitude).map_err(|e| {
                AppError::InvalidConfig(format!("city {:?}: {}", city.name, e))
            })?;
        }
        for scale in &self.scales {
            if scale.resolution == 0 || scale.resolution % 2 == 0 {
                return Err(AppError::InvalidConfig(format!(
                    "scale {:?}: resolution must be odd",
                    scale.name
                )));
            }
            if scale.resolution > MAX_RESOLUTION {
                return Err(AppError::InvalidConfig(format!(
                    "scale {:?}: resolution must be at most {}",
                    scale.name, MAX_RESOLUTION
                )));
            }
            if !scale.span_km.is_finite() || scale.span_km <= 0.0 {
                return Err(AppError::InvalidConfig(format!(
                    "scale {:?}: span_km must be positive",
                    scale.name
                )));
            }
        }
        Ok(())
    }

    pub fn city(&self, name: &str) -> Option<&CityPreset> {
        self.cities.iter().find(|c| c.name == name)
    }

    pub fn scale(&self, name: &str) -> Option<&ScalePreset> {
        self.scales.iter().find(|s| s.name == name)
    }

    pub fn export_size(&self, name: &str) -> Option<&ExportPreset> {
        self.export_sizes.iter().find(|e| e.name == name)
    }

    /// Initial city (first in the list).
    ///
    /// Panics on an empty list, which [`validate`](Self::validate) rejects.
    pub fn default_city(&self) -> &CityPreset {
        &self.cities[0]
    }

    /// Initial scale (first in the list).
    pub fn default_scale(&self) -> &ScalePreset {
        &self.scales[0]
    }

    /// Initial export size (first in the list).
    pub fn default_export_size(&self) -> &ExportPreset {
        &self.export_sizes[0]
    }
}
