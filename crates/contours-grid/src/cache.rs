//! Process-lifetime memoization of fetched grids.

use crate::{ElevationGrid, GridError, GridSpec, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Hashable cache key for a [`GridSpec`].
///
/// Floating point fields are compared bit for bit, so `54.5973` and
/// `54.59730000000001` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    lat_bits: u64,
    lon_bits: u64,
    resolution: usize,
    span_bits: u64,
}

impl From<&GridSpec> for GridKey {
    fn from(spec: &GridSpec) -> Self {
        Self {
            lat_bits: spec.center.lat.to_bits(),
            lon_bits: spec.center.lon.to_bits(),
            resolution: spec.resolution,
            span_bits: spec.span_km.to_bits(),
        }
    }
}

/// Unbounded cache of fetched grids keyed by `(center, resolution, span)`.
///
/// There is no eviction: entries live as long as the cache. Only cosmetic
/// changes are expected to repeat a key, so the key space stays small.
#[derive(Debug, Default)]
pub struct GridCache {
    grids: RwLock<HashMap<GridKey, Arc<ElevationGrid>>>,
}

impl GridCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously stored grid.
    pub fn get(&self, spec: &GridSpec) -> Result<Option<Arc<ElevationGrid>>> {
        let grids = self.grids.read().map_err(|_| GridError::CacheLockPoisoned)?;
        Ok(grids.get(&GridKey::from(spec)).cloned())
    }

    /// Store a grid, replacing any previous entry for the same key.
    pub fn insert(&self, spec: &GridSpec, grid: Arc<ElevationGrid>) -> Result<()> {
        let mut grids = self.grids.write().map_err(|_| GridError::CacheLockPoisoned)?;
        grids.insert(GridKey::from(spec), grid);
        Ok(())
    }

    /// Check whether a grid is cached for this spec.
    pub fn contains(&self, spec: &GridSpec) -> bool {
        self.grids
            .read()
            .map(|grids| grids.contains_key(&GridKey::from(spec)))
            .unwrap_or(false)
    }

    /// Number of cached grids.
    pub fn len(&self) -> usize {
        self.grids.read().map(|grids| grids.len()).unwrap_or(0)
    }

    /// Whether the cache holds no grids.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached grid.
    pub fn clear(&self) -> Result<()> {
        self.grids
            .write()
            .map_err(|_| GridError::CacheLockPoisoned)?
            .clear();
        Ok(())
    }
}
