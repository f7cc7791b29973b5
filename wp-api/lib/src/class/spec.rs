//! The immutable description shared by every generated class.

use crate::classify::{ClassifiedRoute, RouteKind};
use crate::naming::ResourceName;
use crate::url_template::UrlTemplate;

/// Name, route, and URL logic of one generated class.
///
/// Built once per route per discovery run and never mutated afterwards.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ClassSpec, ClassifiedRoute, RouteDescriptor, RouteKind};
///
/// let route = ClassifiedRoute::new(
///     "/wp/v2/posts/(?P<id>[\\d]+)",
///     RouteDescriptor::with_methods(["GET"]),
///     RouteKind::Model,
/// );
/// let spec = ClassSpec::build(route, "https://example.com/wp-json/wp/v2/");
///
/// assert_eq!(spec.class_name(), "Posts");
/// assert_eq!(spec.url().pattern(), "https://example.com/wp-json/wp/v2/posts/{id}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    class_name: String,
    name: ResourceName,
    url: UrlTemplate,
    route: ClassifiedRoute,
}

impl ClassSpec {
    /// Resolves names and URL logic for `route` under `prefix`.
    pub fn build(route: ClassifiedRoute, prefix: &str) -> Self {
        let name = ResourceName::resolve(route.path(), route.kind());
        let url = UrlTemplate::build(route.kind(), &name, prefix);
        Self {
            class_name: name.class_name(),
            name,
            url,
            route,
        }
    }

    /// Returns the generated class name, the registry key.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the names derived from the route path.
    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    /// Returns the URL logic.
    pub fn url(&self) -> &UrlTemplate {
        &self.url
    }

    /// Returns the originating route.
    pub fn route(&self) -> &ClassifiedRoute {
        &self.route
    }

    /// Returns the class kind.
    pub fn kind(&self) -> RouteKind {
        self.route.kind()
    }
}
