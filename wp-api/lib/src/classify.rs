//! Route classification into model and collection routes.
//!
//! [`RouteClassifier`] walks a [`RawSchema`] in document order, drops the
//! routes that describe the API root itself, and asks its
//! [`RouteDiscriminator`] whether each remaining route addresses one
//! resource (a model) or a set of them (a collection).

use std::fmt;

use strum::Display;

use crate::path;
use crate::schema::{RawSchema, RouteDescriptor};
use crate::settings::ApiSettings;

/// Whether a route addresses one resource or a set of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RouteKind {
    /// A single resource, e.g. `/wp/v2/posts/(?P<id>[\d]+)`.
    Model,
    /// A set of resources, e.g. `/wp/v2/posts`.
    Collection,
}

impl RouteKind {
    /// Reads the kind from the path's shape: a trailing capture means
    /// [`RouteKind::Model`], anything else [`RouteKind::Collection`].
    pub fn of_path(path: &str) -> Self {
        if path::ends_with_capture(path) {
            Self::Model
        } else {
            Self::Collection
        }
    }
}

/// A schema route with its kind decided.
///
/// The kind is fixed at construction; fields are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRoute {
    path: String,
    descriptor: RouteDescriptor,
    kind: RouteKind,
}

impl ClassifiedRoute {
    /// Creates a classified route.
    pub fn new(path: impl Into<String>, descriptor: RouteDescriptor, kind: RouteKind) -> Self {
        Self {
            path: path.into(),
            descriptor,
            kind,
        }
    }

    /// Returns the path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the schema descriptor of the route.
    pub fn descriptor(&self) -> &RouteDescriptor {
        &self.descriptor
    }

    /// Returns the route's kind.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }
}

/// Decides the kind of a route.
///
/// The default, [`TrailingCapture`], looks only at the path's shape. An
/// implementation may instead consult the descriptor.
pub trait RouteDiscriminator: Send + Sync {
    /// Returns the kind of the route at `path`.
    fn kind_of(&self, path: &str, descriptor: &RouteDescriptor) -> RouteKind;
}

/// Classifies by path shape: a trailing capture expression marks a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingCapture;

impl RouteDiscriminator for TrailingCapture {
    fn kind_of(&self, path: &str, _descriptor: &RouteDescriptor) -> RouteKind {
        RouteKind::of_path(path)
    }
}

/// Output of one classification pass, each list in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedRoutes {
    /// Routes addressing a single resource.
    pub models: Vec<ClassifiedRoute>,
    /// Routes addressing a set of resources.
    pub collections: Vec<ClassifiedRoute>,
}

/// Partitions schema routes into model and collection routes.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ApiSettings, RawSchema, RouteClassifier, RouteDescriptor};
///
/// let mut schema = RawSchema::default();
/// for path in ["/wp/v2", "/wp/v2/posts", "/wp/v2/posts/(?P<id>[\\d]+)"] {
///     schema.routes.insert(path.to_string(), RouteDescriptor::with_methods(["GET"]));
/// }
///
/// let classifier = RouteClassifier::new(&ApiSettings::default());
/// let routes = classifier.classify(schema);
///
/// assert_eq!(routes.models.len(), 1);
/// assert_eq!(routes.collections.len(), 1);
/// assert_eq!(routes.collections[0].path(), "/wp/v2/posts");
/// ```
pub struct RouteClassifier {
    root_paths: [String; 3],
    discriminator: Box<dyn RouteDiscriminator>,
}

impl RouteClassifier {
    /// Creates a classifier using the [`TrailingCapture`] discriminator.
    pub fn new(settings: &ApiSettings) -> Self {
        Self::with_discriminator(settings, TrailingCapture)
    }

    /// Creates a classifier using a custom discriminator.
    pub fn with_discriminator(
        settings: &ApiSettings,
        discriminator: impl RouteDiscriminator + 'static,
    ) -> Self {
        let version = settings.version_string();
        let bare_version = format!("/{}", version.strip_suffix('/').unwrap_or(version));
        Self {
            root_paths: [version.to_string(), settings.schema_root(), bare_version],
            discriminator: Box::new(discriminator),
        }
    }

    /// Returns `true` if `path` is one of the spellings of the API root.
    pub fn is_root(&self, path: &str) -> bool {
        self.root_paths.iter().any(|root| root == path)
    }

    /// Classifies every route of `schema`, keeping schema order.
    pub fn classify(&self, schema: RawSchema) -> ClassifiedRoutes {
        let mut routes = ClassifiedRoutes::default();

        for (path, descriptor) in schema.routes {
            if self.is_root(&path) {
                tracing::trace!(path = %path, "skipping API root route");
                continue;
            }

            let kind = self.discriminator.kind_of(&path, &descriptor);
            let route = ClassifiedRoute::new(path, descriptor, kind);
            match kind {
                RouteKind::Model => routes.models.push(route),
                RouteKind::Collection => routes.collections.push(route),
            }
        }

        routes
    }
}

impl fmt::Debug for RouteClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteClassifier")
            .field("root_paths", &self.root_paths)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_of(paths: &[&str]) -> RawSchema {
        let mut schema = RawSchema::default();
        for path in paths {
            schema
                .routes
                .insert((*path).to_string(), RouteDescriptor::with_methods(["GET"]));
        }
        schema
    }

    fn settings() -> ApiSettings {
        ApiSettings::builder()
            .api_root("https://example.com/wp-json/")
            .version_string("wp/v2/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_spellings_are_skipped() {
        let classifier = RouteClassifier::new(&settings());
        let routes = classifier.classify(schema_of(&["wp/v2/", "/wp-json/", "/wp/v2"]));
        assert!(routes.models.is_empty());
        assert!(routes.collections.is_empty());
    }

    #[test]
    fn test_is_root() {
        let classifier = RouteClassifier::new(&settings());
        assert!(classifier.is_root("/wp/v2"));
        assert!(classifier.is_root("wp/v2/"));
        assert!(classifier.is_root("/wp-json/"));
        assert!(!classifier.is_root("/wp/v2/"));
        assert!(!classifier.is_root("/"));
    }

    #[test]
    fn test_partition_preserves_order() {
        let classifier = RouteClassifier::new(&settings());
        let routes = classifier.classify(schema_of(&[
            "/wp/v2/posts",
            "/wp/v2/posts/(?P<id>[\\d]+)",
            "/wp/v2/pages",
            "/wp/v2/posts/(?P<parent>[\\d]+)/revisions",
            "/wp/v2/pages/(?P<id>[\\d]+)",
        ]));

        let models: Vec<&str> = routes.models.iter().map(ClassifiedRoute::path).collect();
        let collections: Vec<&str> = routes.collections.iter().map(ClassifiedRoute::path).collect();

        assert_eq!(
            models,
            vec!["/wp/v2/posts/(?P<id>[\\d]+)", "/wp/v2/pages/(?P<id>[\\d]+)"]
        );
        assert_eq!(
            collections,
            vec![
                "/wp/v2/posts",
                "/wp/v2/pages",
                "/wp/v2/posts/(?P<parent>[\\d]+)/revisions",
            ]
        );
        assert!(routes.models.iter().all(|r| r.kind() == RouteKind::Model));
        assert!(routes.collections.iter().all(|r| r.kind() == RouteKind::Collection));
    }

    #[test]
    fn test_malformed_paths_default_to_collection() {
        let classifier = RouteClassifier::new(&settings());
        let routes = classifier.classify(schema_of(&["/wp/v2/broken/(?P<id>[\\d]+", "oops"]));
        assert!(routes.models.is_empty());
        assert_eq!(routes.collections.len(), 2);
    }

    #[test]
    fn test_regex_text_does_not_hide_a_trailing_capture() {
        let classifier = RouteClassifier::new(&settings());
        let routes = classifier.classify(schema_of(&[
            "/wp/v2/things/(?P<id>[^)]+)",
            "/wp/v2/things/(?P<id>[\\(]+)",
            "/wp/v2/things/(?P<id>\\)\\d+)",
            "/wp/v2/posts/rev-(?P<id>[\\d]+)",
            "/wp/v2/things/\\(literal\\)",
        ]));

        let models: Vec<&str> = routes.models.iter().map(ClassifiedRoute::path).collect();
        assert_eq!(
            models,
            vec![
                "/wp/v2/things/(?P<id>[^)]+)",
                "/wp/v2/things/(?P<id>[\\(]+)",
                "/wp/v2/things/(?P<id>\\)\\d+)",
                "/wp/v2/posts/rev-(?P<id>[\\d]+)",
            ]
        );
        assert_eq!(routes.collections.len(), 1);
        assert_eq!(RouteKind::of_path("/wp/v2/things/(?P<id>[^)]+)"), RouteKind::Model);
        assert_eq!(RouteKind::of_path("/wp/v2/posts/rev-(?P<id>[\\d]+)"), RouteKind::Model);
    }

    #[test]
    fn test_descriptor_is_carried() {
        let classifier = RouteClassifier::new(&settings());
        let mut schema = RawSchema::default();
        schema.routes.insert(
            "/wp/v2/tags".to_string(),
            RouteDescriptor::with_methods(["GET", "POST"]),
        );
        let routes = classifier.classify(schema);
        assert_eq!(routes.collections[0].descriptor().methods, vec!["GET", "POST"]);
    }

    struct EverythingIsAModel;

    impl RouteDiscriminator for EverythingIsAModel {
        fn kind_of(&self, _path: &str, _descriptor: &RouteDescriptor) -> RouteKind {
            RouteKind::Model
        }
    }

    #[test]
    fn test_custom_discriminator() {
        let classifier = RouteClassifier::with_discriminator(&settings(), EverythingIsAModel);
        let routes = classifier.classify(schema_of(&["/wp/v2", "/wp/v2/posts", "/wp/v2/tags"]));
        assert_eq!(routes.models.len(), 2);
        assert!(routes.collections.is_empty());
    }
}
