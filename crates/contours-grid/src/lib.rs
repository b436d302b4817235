//! # contours-grid
//!
//! Elevation grid sampling for contour maps.
//!
//! This crate builds a square latitude/longitude sampling grid around a
//! center coordinate and fills it with elevations from a remote service:
//! - [`GridSpec`] describes the grid (center, odd resolution, span in km)
//! - [`ElevationService`] is the remote lookup, with [`OpenTopoData`] as the
//!   HTTP implementation
//! - [`GridFetcher`] splits the query points into bounded batches, reshapes
//!   the flat results into an [`ElevationGrid`] and memoizes it in a
//!   [`GridCache`]
//!
//! ## Grid Geometry
//!
//! The span is converted into a per-step degree increment using a fixed
//! 110.574 km per degree of latitude. Longitude steps use the same constant
//! with no latitude correction, so the grid is narrower than the nominal
//! span in kilometers away from the equator.
//!
//! For resolution `N` the axes are `center + step * k` for
//! `k = -(N/2) ..= N/2`, and query points are the row-major Cartesian
//! product of latitude rows and longitude columns.
//!
//! ## Example
//!
//! ```no_run
//! use contours_grid::{Coordinate, GridFetcher, GridSpec, OpenTopoData};
//!
//! let service = OpenTopoData::new()?;
//! let fetcher = GridFetcher::new(service);
//!
//! // Belfast, 9x9 samples, 3 km steps
//! let spec = GridSpec::new(Coordinate::new(54.5973, -5.9301)?, 9, 3.0)?;
//! let grid = fetcher.fetch_grid(&spec)?;
//! println!("{}x{} grid, highest point {:?} m", grid.dimension(), grid.dimension(), grid.max_elevation());
//! # Ok::<(), contours_grid::GridError>(())
//! ```

mod cache;
mod coord;
mod error;
mod fetcher;
mod grid;
pub mod metric_defs;
mod sampler;
mod service;

pub use cache::{GridCache, GridKey};
pub use coord::{Coordinate, GridSpec, KM_PER_DEGREE, MAX_RESOLUTION};
pub use error::{GridError, ServiceError};
pub use fetcher::{GridFetcher, DEFAULT_BATCH_SIZE};
pub use grid::ElevationGrid;
pub use sampler::{axis, batches, query_points};
pub use service::{
    ElevationService, OpenTopoData, OpenTopoDataConfig, DEFAULT_BASE_URL, DEFAULT_DATASET,
    DEFAULT_INTERPOLATION,
};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
