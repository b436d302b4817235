//! In-process metrics recording for the `contours` binary.
//!
//! The grid crate only emits counters through the `metrics` facade. With
//! `--metrics` the binary installs a [`DebuggingRecorder`] and prints the
//! totals when it exits.

use crate::{AppError, Result};
use contours_grid::metric_defs::{describe_metrics, ALL_METRICS};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use std::collections::HashMap;

/// Install the process-wide recorder and register metric descriptions.
pub fn install_recorder() -> Result<Snapshotter> {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .map_err(|_| AppError::MetricsRecorder)?;
    describe_metrics();
    Ok(snapshotter)
}

/// Counter totals keyed by metric name. Labelled series are summed.
pub fn counter_totals(snapshotter: &Snapshotter) -> HashMap<String, u64> {
    let mut totals = HashMap::new();
    for (key, _, _, value) in snapshotter.snapshot().into_vec() {
        if let DebugValue::Counter(count) = value {
            *totals.entry(key.key().name().to_string()).or_insert(0) += count;
        }
    }
    totals
}

/// One line per grid metric; metrics never recorded show zero.
pub fn format_totals(totals: &HashMap<String, u64>) -> String {
    ALL_METRICS
        .iter()
        .map(|metric| {
            format!(
                "{:<30} {:>8}  {}\n",
                metric.name,
                totals.get(metric.name).copied().unwrap_or(0),
                metric.description
            )
        })
        .collect()
}
