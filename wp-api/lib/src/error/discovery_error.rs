//! Top-level discovery error type.

use super::{ConfigError, FetchError};
use thiserror::Error;

/// Top-level error type for discovery operations.
///
/// ## Examples
///
/// ```rust
/// use wp_api_lib::{ConfigError, DiscoveryError};
///
/// let err: DiscoveryError = ConfigError::missing_field("api_root").into();
/// assert!(matches!(err, DiscoveryError::Config(_)));
/// ```
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The schema could not be retrieved or decoded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The API settings are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fetch_error() {
        let fetch_err = FetchError::HttpStatus {
            status: 500,
            message: "boom".to_string(),
        };
        let err: DiscoveryError = fetch_err.into();
        assert!(matches!(err, DiscoveryError::Fetch(_)));
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_from_config_error() {
        let err: DiscoveryError = ConfigError::missing_field("api_root").into();
        assert_eq!(err.to_string(), "Missing required field: api_root");
    }
}
