//! Error types for grid sampling and fetching.

use thiserror::Error;

/// Errors that can occur when building or fetching an elevation grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// The grid specification or its center coordinate is invalid.
    #[error("Invalid grid spec: {0}")]
    InvalidGridSpec(String),

    /// A batch request to the elevation service failed.
    #[error("Failed to fetch elevation batch {batch}: {source}")]
    DataFetchError {
        /// Zero-based index of the failed batch.
        batch: usize,
        /// Underlying service failure.
        #[source]
        source: ServiceError,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Cache lock was poisoned (a thread panicked while holding the lock).
    #[error("Grid cache lock was poisoned")]
    CacheLockPoisoned,
}

/// Failures of a single elevation service request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport error (connection, timeout, body read).
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON document.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The service returned a different number of results than points sent.
    #[error("Expected {expected} results, got {actual}")]
    CountMismatch {
        /// Number of points in the request.
        expected: usize,
        /// Number of results in the response.
        actual: usize,
    },
}
