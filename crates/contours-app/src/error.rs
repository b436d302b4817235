//! Application error types.

use contours_grid::GridError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Grid validation or fetch failure.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`AppConfig`](crate::AppConfig).
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// State or figure JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but breaks an invariant.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A preset name that the configuration does not define.
    #[error("Unknown {kind} preset {name:?}")]
    UnknownPreset {
        /// Preset family ("city", "scale", "export size").
        kind: &'static str,
        /// Requested name.
        name: String,
    },

    /// Another metrics recorder was installed first.
    #[error("A metrics recorder is already installed")]
    MetricsRecorder,
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
