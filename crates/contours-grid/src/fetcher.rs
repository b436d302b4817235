//! Batched grid fetching with memoization.

use crate::metric_defs::{
    GRID_BATCHES, GRID_CACHE_HITS, GRID_CACHE_MISSES, GRID_FETCH_FAILURES, GRID_POINTS,
};
use crate::sampler::{batches, query_points};
use crate::{Coordinate, ElevationGrid, ElevationService, GridCache, GridError, GridSpec, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum points per request accepted by the public OpenTopoData instance.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Fetches elevation grids from an [`ElevationService`].
///
/// Batches are requested one after another on the calling thread. The first
/// failing batch aborts the fetch; nothing is retried and nothing partial is
/// cached. Successful grids are memoized for the life of the fetcher.
#[derive(Debug)]
pub struct GridFetcher<S> {
    /// Remote elevation lookup.
    service: S,
    /// Maximum points per request.
    batch_size: usize,
    /// Memoized grids.
    cache: GridCache,
}

impl<S: ElevationService> GridFetcher<S> {
    /// Create a fetcher with the default batch size.
    pub fn new(service: S) -> Self {
        Self::with_batch_size(service, DEFAULT_BATCH_SIZE)
    }

    /// Create a fetcher with a specific batch size (minimum 1).
    pub fn with_batch_size(service: S, batch_size: usize) -> Self {
        Self {
            service,
            batch_size: batch_size.max(1),
            cache: GridCache::new(),
        }
    }

    /// Get the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Get the memoization cache.
    pub fn cache(&self) -> &GridCache {
        &self.cache
    }

    /// Get the underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Number of requests needed for a spec.
    pub fn batch_count(&self, spec: &GridSpec) -> usize {
        spec.point_count().div_ceil(self.batch_size)
    }

    /// Validate the inputs and fetch the grid around `center`.
    pub fn fetch(&self, center: Coordinate, resolution: usize, span_km: f64) -> Result<Arc<ElevationGrid>> {
        let spec = GridSpec::new(center, resolution, span_km)?;
        self.fetch_grid(&spec)
    }

    /// Fetch the grid for a spec, serving repeated specs from the cache.
    pub fn fetch_grid(&self, spec: &GridSpec) -> Result<Arc<ElevationGrid>> {
        spec.validate()?;

        if let Some(grid) = self.cache.get(spec)? {
            debug!(center = %spec.center, resolution = spec.resolution, "Grid cache hit");
            metrics::counter!(GRID_CACHE_HITS.name).increment(1);
            return Ok(grid);
        }
        metrics::counter!(GRID_CACHE_MISSES.name).increment(1);

        let grid = match self.fetch_uncached(spec) {
            Ok(grid) => Arc::new(grid),
            Err(e) => {
                warn!(center = %spec.center, error = %e, "Grid fetch failed");
                metrics::counter!(GRID_FETCH_FAILURES.name).increment(1);
                return Err(e);
            }
        };

        self.cache.insert(spec, Arc::clone(&grid))?;
        Ok(grid)
    }

    fn fetch_uncached(&self, spec: &GridSpec) -> Result<ElevationGrid> {
        let (rows, cols, points) = query_points(spec);

        info!(
            center = %spec.center,
            resolution = spec.resolution,
            span_km = spec.span_km,
            points = points.len(),
            batches = self.batch_count(spec),
            "Fetching elevation grid"
        );

        let mut elevations = Vec::with_capacity(points.len());
        for (index, batch) in batches(&points, self.batch_size).enumerate() {
            debug!(batch = index, points = batch.len(), "Requesting elevation batch");
            metrics::counter!(GRID_BATCHES.name).increment(1);
            metrics::counter!(GRID_POINTS.name).increment(batch.len() as u64);

            let values = self
                .service
                .elevations(batch)
                .map_err(|source| GridError::DataFetchError {
                    batch: index,
                    source,
                })?;

            // Services other than OpenTopoData may not check the count themselves.
            if values.len() != batch.len() {
                return Err(GridError::DataFetchError {
                    batch: index,
                    source: crate::ServiceError::CountMismatch {
                        expected: batch.len(),
                        actual: values.len(),
                    },
                });
            }
            elevations.extend(values);
        }

        ElevationGrid::from_row_major(rows, cols, elevations).ok_or_else(|| {
            GridError::InvalidGridSpec(format!(
                "collected elevations do not fill a {0}x{0} grid",
                spec.resolution
            ))
        })
    }
}
