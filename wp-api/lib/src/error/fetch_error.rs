//! Schema retrieval errors.

use thiserror::Error;

/// Errors from the schema fetch collaborator.
///
/// These cover transport failures, non-success HTTP statuses, and schema
/// documents that cannot be decoded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed due to network or protocol error.
    #[error("Schema request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The schema document is not valid JSON or has the wrong shape.
    #[error("Schema decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local schema document failed.
    #[error("Schema read error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Returns the HTTP status code if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
