//! Coordinates and grid specifications.

use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Kilometers per degree of latitude used to convert spans into degree steps.
///
/// Longitude steps reuse this value without a cos(latitude) correction.
pub const KM_PER_DEGREE: f64 = 110.574;

/// Largest accepted samples per axis (about a million query points).
pub const MAX_RESOLUTION: usize = 1001;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in degrees (-180 to 180).
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let coord = Self { lat, lon };
        coord.validate()?;
        Ok(coord)
    }

    /// Check that both components are finite and within range.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(GridError::InvalidGridSpec(format!(
                "latitude {} must be within -90..=90",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(GridError::InvalidGridSpec(format!(
                "longitude {} must be within -180..=180",
                self.lon
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Specification of a square sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Grid center.
    pub center: Coordinate,
    /// Samples per axis (odd, at least 1).
    pub resolution: usize,
    /// Span in kilometers, converted to the per-step degree increment.
    pub span_km: f64,
}

impl GridSpec {
    /// Create a validated grid specification.
    pub fn new(center: Coordinate, resolution: usize, span_km: f64) -> Result<Self> {
        let spec = Self {
            center,
            resolution,
            span_km,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the grid invariants: valid center, odd resolution between 1
    /// and [`MAX_RESOLUTION`], positive finite span.
    pub fn validate(&self) -> Result<()> {
        self.center.validate()?;
        if self.resolution == 0 || self.resolution % 2 == 0 {
            return Err(GridError::InvalidGridSpec(format!(
                "resolution {} must be an odd number of at least 1",
                self.resolution
            )));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(GridError::InvalidGridSpec(format!(
                "resolution {} exceeds the maximum of {}",
                self.resolution, MAX_RESOLUTION
            )));
        }
        if !self.span_km.is_finite() || self.span_km <= 0.0 {
            return Err(GridError::InvalidGridSpec(format!(
                "span {} km must be positive",
                self.span_km
            )));
        }
        Ok(())
    }

    /// Degree increment between neighbouring samples on either axis.
    pub fn step_deg(&self) -> f64 {
        self.span_km / KM_PER_DEGREE
    }

    /// Number of steps from the center to the grid edge (`N / 2`).
    pub fn half_width(&self) -> usize {
        self.resolution / 2
    }

    /// Total number of query points (`N * N`).
    pub fn point_count(&self) -> usize {
        self.resolution * self.resolution
    }
}
