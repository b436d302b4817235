//! One interaction: fetch the grid for a state, render it, build the page.

use crate::config::AppConfig;
use crate::state::UiState;
use crate::{AppError, Result};
use contours_chart::page::Page;
use contours_chart::{render_with, ChartFigure};
use contours_grid::{ElevationService, GridFetcher, OpenTopoData};
use tracing::{error, info};

const HEADING: &str = "Plot the contour map for a certain city or custom co-ordinates";

/// Result of one interaction.
///
/// A failed fetch produces an error page and no figure; a partial chart is
/// never drawn.
#[derive(Debug)]
pub enum Outcome {
    Chart { figure: ChartFigure, html: String },
    Failed { error: AppError, html: String },
}

impl Outcome {
    /// Page to display.
    pub fn html(&self) -> &str {
        match self {
            Outcome::Chart { html, .. } | Outcome::Failed { html, .. } => html,
        }
    }

    pub fn figure(&self) -> Option<&ChartFigure> {
        match self {
            Outcome::Chart { figure, .. } => Some(figure),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Outcome::Chart { .. } => None,
            Outcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Configuration plus a memoizing fetcher, shared by every interaction of
/// one process.
#[derive(Debug)]
pub struct Session<S> {
    config: AppConfig,
    fetcher: GridFetcher<S>,
}

impl Session<OpenTopoData> {
    /// Session backed by the configured OpenTopoData endpoint.
    pub fn connect(config: AppConfig) -> Result<Self> {
        let service = OpenTopoData::with_config(config.service.client_config())?;
        info!(endpoint = service.endpoint(), "Using elevation service");
        Self::with_service(config, service)
    }
}

impl<S: ElevationService> Session<S> {
    /// Session over any elevation service. The config is validated first.
    pub fn with_service(config: AppConfig, service: S) -> Result<Self> {
        config.validate()?;
        let fetcher = GridFetcher::with_batch_size(service, config.service.batch_size);
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &GridFetcher<S> {
        &self.fetcher
    }

    /// Fetch and render the figure for a state.
    pub fn figure(&self, state: &UiState) -> Result<ChartFigure> {
        let spec = state.grid_spec(&self.config)?;
        let grid = self.fetcher.fetch_grid(&spec)?;
        Ok(render_with(&grid, &state.chart_style(&self.config), &self.config.chart))
    }

    /// Run the interaction and build the page to display.
    pub fn run(&self, state: &UiState) -> Outcome {
        let page = self.page_frame(state);
        let result = self
            .figure(state)
            .and_then(|figure| Ok((page.chart(&figure)?, figure)));

        match result {
            Ok((html, figure)) => Outcome::Chart { figure, html },
            Err(e) => {
                error!(label = %state.chart_label, error = %e, "Could not draw the map");
                let html = page.error(&e.to_string());
                Outcome::Failed { error: e, html }
            }
        }
    }

    fn page_frame(&self, state: &UiState) -> Page {
        let location = if state.custom_coords {
            format!("{}, {}", state.latitude, state.longitude)
        } else {
            state.city.clone()
        };
        let scale = match self.config.scale(&state.scale) {
            Some(s) => format!("{} ({}x{}, {} km steps)", s.name, s.resolution, s.resolution, s.span_km),
            None => state.scale.clone(),
        };

        Page::new(HEADING, self.config.chart.plotly_src.clone())
            .with_note("Location:", location)
            .with_note("Scale:", scale)
            .with_note(
                "Data:",
                format!("OpenTopoData {}", self.config.service.dataset),
            )
    }
}
