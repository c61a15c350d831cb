//! Error types for RosterView
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Only the roster fetch can fail; everything downstream of it is a total
//! transform over in-memory data.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// HTTP transport error during the roster fetch
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("Unexpected HTTP status: {status}"))]
    Status { status: u16 },

    /// Malformed response body
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
