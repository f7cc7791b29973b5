//! API root and version settings.
//!
//! [`ApiSettings`] names the API being discovered: the root URL of the REST
//! index and the version namespace under it. Every generated URL starts with
//! [`ApiSettings::prefix`], and the classifier uses the same values to
//! recognize (and skip) the routes that describe the API root itself.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Environment variable consulted for the API root.
pub const ENV_API_ROOT: &str = "WP_API_ROOT";

/// Environment variable consulted for the version string.
pub const ENV_API_VERSION: &str = "WP_API_VERSION";

/// API root used when nothing else is configured.
pub const DEFAULT_API_ROOT: &str = "http://localhost/wp-json/";

/// Version namespace used when nothing else is configured.
pub const DEFAULT_VERSION_STRING: &str = "wp/v2/";

/// Default schema request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved settings for one API.
///
/// Both strings are normalized to end in `/`, and the version string never
/// starts with one, so `prefix()` is a plain concatenation.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::ApiSettings;
///
/// let settings = ApiSettings::builder()
///     .api_root("https://example.com/wp-json")
///     .version_string("wp/v2")
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.prefix(), "https://example.com/wp-json/wp/v2/");
/// assert_eq!(settings.schema_root(), "/wp-json/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    api_root: String,
    version_string: String,
    timeout: Duration,
}

impl ApiSettings {
    /// Creates a new builder seeded with the defaults.
    pub fn builder() -> ApiSettingsBuilder {
        ApiSettingsBuilder::new()
    }

    /// Builds settings from `WP_API_ROOT` and `WP_API_VERSION`, falling back
    /// to the defaults for anything unset.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is set to an empty version string.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// ## Errors
    ///
    /// Returns an error if the lookup yields an empty version string.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(root) = lookup(ENV_API_ROOT) {
            builder = builder.api_root(root);
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            builder = builder.version_string(version);
        }
        builder.build()
    }

    /// Returns the API root (always ends in `/`).
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the version string, e.g. `wp/v2/`.
    pub fn version_string(&self) -> &str {
        &self.version_string
    }

    /// Returns the schema request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `api_root + version_string`, the start of every generated URL.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.api_root, self.version_string)
    }

    /// Returns the API root with its origin stripped.
    ///
    /// For an absolute root such as `https://example.com/wp-json/` this is
    /// the path, `/wp-json/`. A root that does not parse as an absolute URL
    /// is returned unchanged.
    pub fn schema_root(&self) -> String {
        match Url::parse(&self.api_root) {
            Ok(url) => url.path().to_string(),
            Err(_) => self.api_root.clone(),
        }
    }

    /// Returns the URL the schema is fetched from.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the prefix is not an absolute URL.
    pub fn schema_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.prefix())?)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            version_string: DEFAULT_VERSION_STRING.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Builder for [`ApiSettings`].
#[derive(Debug, Clone)]
pub struct ApiSettingsBuilder {
    api_root: String,
    version_string: String,
    timeout: Duration,
}

impl ApiSettingsBuilder {
    fn new() -> Self {
        let defaults = ApiSettings::default();
        Self {
            api_root: defaults.api_root,
            version_string: defaults.version_string,
            timeout: defaults.timeout,
        }
    }

    /// Sets the API root, e.g. `https://example.com/wp-json/`.
    pub fn api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Sets the version string, e.g. `wp/v2/`.
    pub fn version_string(mut self, version_string: impl Into<String>) -> Self {
        self.version_string = version_string.into();
        self
    }

    /// Sets the schema request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`ApiSettings`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingField`] if either string is empty.
    pub fn build(self) -> Result<ApiSettings, ConfigError> {
        let api_root = self.api_root.trim();
        if api_root.is_empty() {
            return Err(ConfigError::missing_field("api_root"));
        }

        let version_string = self.version_string.trim().trim_start_matches('/');
        if version_string.trim_end_matches('/').is_empty() {
            return Err(ConfigError::missing_field("version_string"));
        }

        Ok(ApiSettings {
            api_root: with_trailing_slash(api_root),
            version_string: with_trailing_slash(version_string),
            timeout: self.timeout,
        })
    }
}

fn with_trailing_slash(value: &str) -> String {
    if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{value}/")
    }
}
