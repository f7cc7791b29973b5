//! Schema-driven model and collection discovery for WordPress-style REST APIs.
//!
//! The `wp-api-lib` crate reads a REST API's route schema at runtime and
//! generates a client-side class for every resource it finds. No resource is
//! hardcoded: routes ending in an identifier capture become model classes,
//! everything else becomes a collection class, and each class carries the URL
//! logic for its position in the route tree.
//!
//! ## Pipeline
//!
//! 1. [`SchemaSource`] fetches the [`RawSchema`] (the only async step)
//! 2. [`RouteClassifier`] splits routes into model and collection routes
//! 3. [`ResourceName`] derives route, parent, and class names from each path
//! 4. [`UrlTemplate`] captures the URL construction for each class
//! 5. [`Registries`] holds the generated [`ModelClass`] and [`CollectionClass`]
//!    values, keyed by class name
//!
//! [`Orchestrator`] drives the whole sequence and publishes its [`Phase`].
//!
//! ## Examples
//!
//! ```rust,no_run
//! use wp_api_lib::{ApiSettings, HttpSchemaSource, Orchestrator};
//!
//! # async fn example() -> Result<(), wp_api_lib::DiscoveryError> {
//! let settings = ApiSettings::builder()
//!     .api_root("https://example.com/wp-json/")
//!     .build()?;
//! let source = HttpSchemaSource::new(&settings)?;
//! let orchestrator = Orchestrator::new(settings, source);
//!
//! let registries = orchestrator.init().await;
//! if let Some(posts) = registries.model("Posts") {
//!     let post = posts.create_with_id(7);
//!     println!("{}", post.url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod class;
pub mod classify;
pub mod error;
pub mod method;
pub mod naming;
pub mod orchestrator;
pub mod path;
pub mod schema;
pub mod settings;
pub mod source;
pub mod url_template;

// Re-exports for convenience
pub use class::{BuildEvent, ClassSpec, Collection, CollectionClass, Model, ModelClass, Registries};
pub use classify::{
    ClassifiedRoute, ClassifiedRoutes, RouteClassifier, RouteDiscriminator, RouteKind,
    TrailingCapture,
};
pub use error::{ConfigError, DiscoveryError, FetchError};
pub use method::RestMethod;
pub use naming::{ResourceName, capitalize, extract_parent_name, extract_route_name};
pub use orchestrator::{Orchestrator, Phase, discover};
pub use schema::{EndpointDescriptor, RawSchema, RouteDescriptor};
pub use settings::{ApiSettings, ApiSettingsBuilder};
pub use source::{HttpSchemaSource, SchemaSource, StaticSchemaSource};
pub use url_template::{InstanceUrl, UrlSubject, UrlTemplate};
