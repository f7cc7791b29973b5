//! Schema sources: where the route schema comes from.
//!
//! Fetching is the only asynchronous step of discovery. Everything after it
//! is a synchronous transform, so tests and offline tools can hand the
//! orchestrator a [`StaticSchemaSource`] instead of a live server.

use std::future::Future;
use std::path::Path;

use tracing::{Span, instrument};
use url::Url;

use crate::error::{DiscoveryError, FetchError};
use crate::schema::RawSchema;
use crate::settings::ApiSettings;

/// Provides the raw route schema for a discovery run.
pub trait SchemaSource: Send + Sync {
    /// Retrieves the schema.
    fn fetch(&self) -> impl Future<Output = Result<RawSchema, FetchError>> + Send;
}

/// Fetches the schema over HTTP from [`ApiSettings::schema_url`].
///
/// ## Examples
///
/// ```rust,no_run
/// use wp_api_lib::{ApiSettings, HttpSchemaSource, SchemaSource};
///
/// # async fn example() -> Result<(), wp_api_lib::DiscoveryError> {
/// let settings = ApiSettings::builder()
///     .api_root("https://example.com/wp-json/")
///     .build()?;
/// let source = HttpSchemaSource::new(&settings)?;
/// let schema = source.fetch().await?;
/// println!("{} routes", schema.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSchemaSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSchemaSource {
    /// Creates a source for the API described by `settings`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the schema URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(settings: &ApiSettings) -> Result<Self, DiscoveryError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(FetchError::Request)?;
        Ok(Self::with_client(client, settings.schema_url()?))
    }

    /// Creates a source using an existing client.
    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the URL the schema is fetched from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SchemaSource for HttpSchemaSource {
    #[instrument(
        name = "schema_fetch",
        skip(self),
        fields(
            http.url = %self.url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    async fn fetch(&self) -> Result<RawSchema, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let schema = RawSchema::from_slice(&body)?;
        tracing::debug!(routes = schema.len(), "schema decoded");
        Ok(schema)
    }
}

/// Serves a schema held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    schema: RawSchema,
}

impl StaticSchemaSource {
    /// Creates a source that always yields `schema`.
    pub fn new(schema: RawSchema) -> Self {
        Self { schema }
    }

    /// Creates a source from schema JSON text.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Decode`] if the text is not a schema document.
    pub fn from_json(text: &str) -> Result<Self, FetchError> {
        Ok(Self::new(RawSchema::from_json(text)?))
    }

    /// Creates a source from a schema JSON file.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Io`] if the file cannot be read, or
    /// [`FetchError::Decode`] if it is not a schema document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::new(RawSchema::from_slice(&bytes)?))
    }
}

impl SchemaSource for StaticSchemaSource {
    async fn fetch(&self) -> Result<RawSchema, FetchError> {
        Ok(self.schema.clone())
    }
}
