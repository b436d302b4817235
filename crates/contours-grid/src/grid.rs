//! Reshaped elevation grid.

use serde::{Deserialize, Serialize};

/// An N x N grid of elevations with its latitude rows and longitude columns.
///
/// Rows ascend in latitude and columns ascend in longitude. Cells are `None`
/// where the service had no data for the point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct ElevationGrid {
    /// Latitude of each row.
    rows: Vec<f64>,
    /// Longitude of each column.
    cols: Vec<f64>,
    /// Elevations in meters, indexed `[row][col]`.
    elevations: Vec<Vec<Option<f64>>>,
}

/// Unchecked serialized form of [`ElevationGrid`].
#[derive(Deserialize)]
struct GridParts {
    rows: Vec<f64>,
    cols: Vec<f64>,
    elevations: Vec<Vec<Option<f64>>>,
}

impl TryFrom<GridParts> for ElevationGrid {
    type Error = String;

    fn try_from(parts: GridParts) -> Result<Self, Self::Error> {
        let (height, width) = (parts.rows.len(), parts.cols.len());
        if parts.elevations.len() != height || parts.elevations.iter().any(|row| row.len() != width) {
            return Err(format!("elevations do not form a {height}x{width} matrix"));
        }
        Ok(Self {
            rows: parts.rows,
            cols: parts.cols,
            elevations: parts.elevations,
        })
    }
}

impl ElevationGrid {
    /// Reshape a flat row-major sequence into a grid.
    ///
    /// Returns `None` if `values.len() != rows.len() * cols.len()`.
    pub fn from_row_major(rows: Vec<f64>, cols: Vec<f64>, values: Vec<Option<f64>>) -> Option<Self> {
        if values.len() != rows.len() * cols.len() {
            return None;
        }
        let width = cols.len().max(1);
        let elevations = values.chunks(width).map(|run| run.to_vec()).collect();
        Some(Self {
            rows,
            cols,
            elevations,
        })
    }

    /// Samples per axis.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Latitude of each row, ascending.
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// Longitude of each column, ascending.
    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    /// Elevation matrix indexed `[row][col]`.
    pub fn elevations(&self) -> &[Vec<Option<f64>>] {
        &self.elevations
    }

    /// Elevation at `(row, col)`; `None` when out of range or missing.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.elevations.get(row)?.get(col).copied().flatten()
    }

    /// Number of cells with no elevation data.
    pub fn missing_count(&self) -> usize {
        self.elevations
            .iter()
            .flatten()
            .filter(|v| v.is_none())
            .count()
    }

    /// Lowest elevation present in the grid.
    pub fn min_elevation(&self) -> Option<f64> {
        self.present().reduce(f64::min)
    }

    /// Highest elevation present in the grid.
    pub fn max_elevation(&self) -> Option<f64> {
        self.present().reduce(f64::max)
    }

    fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.elevations.iter().flatten().filter_map(|v| *v)
    }
}
