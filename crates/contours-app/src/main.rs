//! `contours` binary: apply command-line choices to the UI state, fetch the
//! elevation grid and write the contour map page.

use clap::Parser;
use contours_app::cli::{describe_presets, Cli};
use contours_app::state::apply_all;
use contours_app::{telemetry, AppConfig, AppError, Outcome, Session, UiState};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    if cli.list_presets {
        print!("{}", describe_presets(&config));
        return Ok(ExitCode::SUCCESS);
    }

    let initial = match &cli.state {
        Some(path) => UiState::from_json(&read(path)?)?,
        None => UiState::initial(&config),
    };
    let events = cli.events(&config)?;
    let state = apply_all(initial, &events, &config);

    if let Some(path) = &cli.save_state {
        write(path, &state.to_json()?)?;
    }

    let snapshotter = if cli.metrics {
        Some(telemetry::install_recorder()?)
    } else {
        None
    };
    let session = Session::connect(config)?;
    let outcome = session.run(&state);
    write(&cli.output, outcome.html())?;

    if let Some(snapshotter) = &snapshotter {
        eprint!("{}", telemetry::format_totals(&telemetry::counter_totals(snapshotter)));
    }

    match outcome {
        Outcome::Chart { figure, .. } => {
            if let Some(path) = &cli.figure_json {
                write(path, &figure.to_json_pretty()?)?;
            }
            info!(output = %cli.output.display(), label = %state.chart_label, "Wrote contour map");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failed { .. } => {
            info!(output = %cli.output.display(), "Wrote error page");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| AppError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), AppError> {
    std::fs::write(path, contents).map_err(|e| AppError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
