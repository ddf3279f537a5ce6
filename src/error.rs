use reqwest::StatusCode;
use thiserror::Error;

/// Custom result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fetching constraints and inspecting files
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The constraints endpoint answered with a non-success status.
    /// The message stays fixed; status and body are kept for callers that branch on them.
    #[error("Failed to fetch upload constraints")]
    FetchFailed { status: StatusCode, body: String },

    /// Invalid file
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidData(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::FetchFailed { status, .. } => Some(*status),
            Error::RequestError(err) => err.status(),
            _ => None,
        }
    }
}
