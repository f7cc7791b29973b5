//! API settings errors.

use thiserror::Error;

/// Errors in API settings.
///
/// These occur while building [`ApiSettings`](crate::ApiSettings), typically
/// indicating a bad command-line flag or environment variable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required setting is missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
