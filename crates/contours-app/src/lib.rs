//! # contours-app
//!
//! Interaction layer for the contour map tool.
//!
//! - [`config`]: the single [`AppConfig`] holding the service endpoint,
//!   city/scale/export presets, default visuals and chart constants
//! - [`state`]: the serializable [`UiState`] and the pure
//!   [`apply`](state::apply) transition for each user [`Event`]
//! - [`session`]: runs one interaction (fetch the grid, render the figure,
//!   build the page)
//! - [`cli`]: command-line flags translated into events
//! - [`telemetry`]: optional in-process recorder for the grid counters

pub mod cli;
pub mod config;
mod error;
pub mod session;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
pub use session::{Outcome, Session};
pub use state::{apply, Event, UiState};

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
