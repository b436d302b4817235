//! Remote elevation service client.
//!
//! The OpenTopoData API answers point lookups over plain HTTP GET:
//!
//! ```text
//! GET {base}/v1/{dataset}?locations=lat,lon|lat,lon|...&interpolation=cubic
//! ```
//!
//! and responds with `{"results": [{"elevation": 12.3, ...}, ...]}` in the
//! order the points were submitted. `elevation` is `null` where the dataset
//! has no coverage. The public instance accepts at most 100 locations per
//! request.

use crate::{Coordinate, ServiceError};
use serde::Deserialize;
use std::time::Duration;
use tracing::trace;

/// Public OpenTopoData instance.
pub const DEFAULT_BASE_URL: &str = "https://api.opentopodata.org";

/// SRTM 90m dataset (global coverage between 60°S and 60°N).
pub const DEFAULT_DATASET: &str = "srtm90m";

/// Interpolation method requested from the service.
pub const DEFAULT_INTERPOLATION: &str = "cubic";

/// A source of point elevations.
///
/// Implementations return exactly one value per input point, in input order,
/// with `None` where no data exists.
pub trait ElevationService {
    /// Look up elevations (meters) for a batch of points.
    fn elevations(&self, points: &[Coordinate]) -> Result<Vec<Option<f64>>, ServiceError>;
}

impl<T: ElevationService + ?Sized> ElevationService for &T {
    fn elevations(&self, points: &[Coordinate]) -> Result<Vec<Option<f64>>, ServiceError> {
        (**self).elevations(points)
    }
}

impl<T: ElevationService + ?Sized> ElevationService for Box<T> {
    fn elevations(&self, points: &[Coordinate]) -> Result<Vec<Option<f64>>, ServiceError> {
        (**self).elevations(points)
    }
}

/// Connection settings for [`OpenTopoData`].
#[derive(Debug, Clone)]
pub struct OpenTopoDataConfig {
    /// Base URL of the service, without the `/v1/...` path.
    pub base_url: String,
    /// Dataset name appended to the `/v1/` path.
    pub dataset: String,
    /// Value of the `interpolation` query parameter.
    pub interpolation: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for OpenTopoDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            interpolation: DEFAULT_INTERPOLATION.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    /// Required key; `null` marks a point without coverage.
    #[serde(deserialize_with = "Option::deserialize")]
    elevation: Option<f64>,
}

/// Blocking HTTP client for an OpenTopoData-compatible service.
pub struct OpenTopoData {
    /// Full lookup endpoint (`{base}/v1/{dataset}`).
    endpoint: String,
    /// Interpolation method sent with every request.
    interpolation: String,
    /// HTTP client for lookups.
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for OpenTopoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenTopoData")
            .field("endpoint", &self.endpoint)
            .field("interpolation", &self.interpolation)
            .finish()
    }
}

impl OpenTopoData {
    /// Create a client for the public instance with default settings.
    pub fn new() -> crate::Result<Self> {
        Self::with_config(OpenTopoDataConfig::default())
    }

    /// Create a client with explicit settings.
    pub fn with_config(config: OpenTopoDataConfig) -> crate::Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint: format!(
                "{}/v1/{}",
                config.base_url.trim_end_matches('/'),
                config.dataset
            ),
            interpolation: config.interpolation,
            client,
        })
    }

    /// Get the lookup endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Format points as the pipe-delimited `lat,lon|lat,lon` locations string.
pub(crate) fn locations_param(points: &[Coordinate]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Parse a lookup response body and check it against the request size.
pub(crate) fn parse_lookup(body: &str, expected: usize) -> Result<Vec<Option<f64>>, ServiceError> {
    let response: LookupResponse = serde_json::from_str(body)?;
    if response.results.len() != expected {
        return Err(ServiceError::CountMismatch {
            expected,
            actual: response.results.len(),
        });
    }
    Ok(response.results.into_iter().map(|r| r.elevation).collect())
}

impl ElevationService for OpenTopoData {
    fn elevations(&self, points: &[Coordinate]) -> Result<Vec<Option<f64>>, ServiceError> {
        let locations = locations_param(points);
        trace!(endpoint = %self.endpoint, points = points.len(), "Requesting elevations");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("locations", locations.as_str()),
                ("interpolation", self.interpolation.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_lookup(&body, points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_param() {
        let points = [
            Coordinate { lat: 54.5973, lon: -5.9301 },
            Coordinate { lat: 1.5, lon: 2.0 },
        ];
        assert_eq!(locations_param(&points), "54.5973,-5.9301|1.5,2");
    }

    #[test]
    fn test_parse_lookup_with_nulls() {
        let body = r#"{"results":[{"elevation":12.5,"location":{"lat":1,"lng":2}},{"elevation":null}],"status":"OK"}"#;
        assert_eq!(parse_lookup(body, 2).unwrap(), vec![Some(12.5), None]);
    }

    #[test]
    fn test_parse_lookup_short() {
        let body = r#"{"results":[{"elevation":1.0}]}"#;
        assert!(matches!(
            parse_lookup(body, 3),
            Err(ServiceError::CountMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_parse_lookup_long() {
        let body = r#"{"results":[{"elevation":1.0},{"elevation":2.0},{"elevation":null}]}"#;
        assert!(matches!(
            parse_lookup(body, 2),
            Err(ServiceError::CountMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_parse_lookup_missing_elevation() {
        assert!(matches!(
            parse_lookup(r#"{"results":[{}]}"#, 1),
            Err(ServiceError::MalformedBody(_))
        ));
        let body = r#"{"results":[{"location":{"lat":1,"lng":2}},{"dataset":"srtm90m"}]}"#;
        assert!(matches!(parse_lookup(body, 2), Err(ServiceError::MalformedBody(_))));
    }

    #[test]
    fn test_parse_lookup_malformed() {
        assert!(matches!(
            parse_lookup("<html>busy</html>", 1),
            Err(ServiceError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_lookup(r#"{"error":"Too many locations"}"#, 1),
            Err(ServiceError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_endpoint() {
        let service = OpenTopoData::with_config(OpenTopoDataConfig {
            base_url: "http://localhost:5000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(service.endpoint(), "http://localhost:5000/v1/srtm90m");
    }
}
