//! Error types for the thumbnail mirror.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the thumbnail mirror.
///
/// Only configuration, authentication and series-details failures are meant
/// to reach the binary. Per-page, per-season and per-episode failures are
/// caught where they happen and turned into gaps or outcomes.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("{0} not found in environment variables. Set it or add it to a .env file")]
    ApiKeyMissing(String),

    #[error("Invalid value for {name}: {value:?} (expected an integer)")]
    InvalidSeriesId { name: String, value: String },

    #[error("Failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    // Authentication errors
    #[error("Authentication failed: HTTP {0}")]
    AuthenticationFailed(reqwest::StatusCode),

    #[error("Login response did not contain a token")]
    TokenMissing,

    // Download errors
    #[error("Download failed with status: {0}")]
    DownloadStatus(reqwest::StatusCode),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
