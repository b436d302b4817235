//! Metric declarations for grid fetching.
//!
//! Counters are recorded through the `metrics` facade; they are no-ops
//! unless the host application installs a recorder.
//!
//! ```rust
//! use contours_grid::metric_defs::{describe_metrics, GRID_BATCHES};
//!
//! describe_metrics();
//! metrics::counter!(GRID_BATCHES.name).increment(1);
//! ```

use metrics::{describe_counter, Unit};

/// A counter declaration with its metadata.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    /// The metric name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Unit of measurement.
    pub unit: Unit,
}

impl Metric {
    const fn counter(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            unit: Unit::Count,
        }
    }

    /// Register the description with the installed recorder.
    pub fn describe(&self) {
        describe_counter!(self.name, self.unit, self.description);
    }
}

/// Batch requests sent to the elevation service.
pub const GRID_BATCHES: Metric =
    Metric::counter("contours.grid.batches", "Elevation service batch requests");

/// Points requested from the elevation service.
pub const GRID_POINTS: Metric =
    Metric::counter("contours.grid.points", "Points requested from the elevation service");

/// Grids served from the memoization cache.
pub const GRID_CACHE_HITS: Metric =
    Metric::counter("contours.grid.cache_hits", "Grid fetches served from cache");

/// Grids that had to be fetched remotely.
pub const GRID_CACHE_MISSES: Metric =
    Metric::counter("contours.grid.cache_misses", "Grid fetches that queried the service");

/// Grid fetches that failed.
pub const GRID_FETCH_FAILURES: Metric =
    Metric::counter("contours.grid.fetch_failures", "Grid fetches aborted by a failed batch");

/// All metrics declared by this crate.
pub const ALL_METRICS: &[Metric] = &[
    GRID_BATCHES,
    GRID_POINTS,
    GRID_CACHE_HITS,
    GRID_CACHE_MISSES,
    GRID_FETCH_FAILURES,
];

/// Register descriptions for every grid metric.
pub fn describe_metrics() {
    for metric in ALL_METRICS {
        metric.describe();
    }
}
