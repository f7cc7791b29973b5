//! Layered error types for route discovery.
//!
//! - [`DiscoveryError`] - Top-level error type for discovery operations
//! - [`FetchError`] - Schema retrieval and decoding errors
//! - [`ConfigError`] - API settings errors
//!
//! None of these escape [`Orchestrator::init`](crate::Orchestrator::init);
//! that boundary logs the failure and keeps the previous registries.

mod config_error;
mod discovery_error;
mod fetch_error;

pub use config_error::ConfigError;
pub use discovery_error::DiscoveryError;
pub use fetch_error::FetchError;
