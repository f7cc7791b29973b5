//! Error types for the wp-api CLI.

use thiserror::Error;
use wp_api_lib::{ConfigError, DiscoveryError, FetchError};

/// Errors surfaced to the terminal by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Discovery could not run.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// No generated class carries the requested name.
    #[error("no generated class named '{name}' (run `wp-api discover` to list classes)")]
    UnknownClass {
        /// The class name that was looked up.
        name: String,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        Self::Discovery(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Discovery(err.into())
    }
}
