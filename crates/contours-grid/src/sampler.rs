//! Axis, query point and batch generation.

use crate::{Coordinate, GridSpec};

/// Axis values `origin + step * k` for `k` in `-(N/2) ..= N/2`.
pub fn axis(origin: f64, step: f64, resolution: usize) -> Vec<f64> {
    let half = (resolution / 2) as i64;
    (-half..=half).map(|k| origin + step * k as f64).collect()
}

/// Row-major Cartesian product of latitude rows and longitude columns.
///
/// Points are built directly from the axis values; they may fall slightly
/// outside the valid coordinate range near the poles or the antimeridian,
/// and are sent to the service as-is.
pub fn query_points(spec: &GridSpec) -> (Vec<f64>, Vec<f64>, Vec<Coordinate>) {
    let step = spec.step_deg();
    let rows = axis(spec.center.lat, step, spec.resolution);
    let cols = axis(spec.center.lon, step, spec.resolution);

    let mut points = Vec::with_capacity(rows.len() * cols.len());
    for &lat in &rows {
        for &lon in &cols {
            points.push(Coordinate { lat, lon });
        }
    }

    (rows, cols, points)
}

/// Split points into consecutive batches of at most `batch_size` points.
///
/// A zero batch size is treated as one point per batch.
pub fn batches(points: &[Coordinate], batch_size: usize) -> std::slice::Chunks<'_, Coordinate> {
    points.chunks(batch_size.max(1))
}
