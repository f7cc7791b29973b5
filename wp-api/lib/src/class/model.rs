//! Model classes and model instances.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::spec::ClassSpec;
use crate::classify::ClassifiedRoute;
use crate::url_template::{UrlSubject, UrlTemplate};

/// A generated class for a single-resource route.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelClass {
    spec: ClassSpec,
}

impl ModelClass {
    /// Wraps a spec as a model class.
    pub fn new(spec: ClassSpec) -> Self {
        Self { spec }
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        self.spec.class_name()
    }

    /// Returns the class spec.
    pub fn spec(&self) -> &ClassSpec {
        &self.spec
    }

    /// Returns the originating route.
    pub fn route(&self) -> &ClassifiedRoute {
        self.spec.route()
    }

    /// Returns the URL logic.
    pub fn url(&self) -> &UrlTemplate {
        self.spec.url()
    }

    /// Creates an instance with the given attributes.
    pub fn create(self: &Arc<Self>, attributes: Map<String, Value>) -> Model {
        Model {
            class: Arc::clone(self),
            attributes,
        }
    }

    /// Creates an instance with only `id` set.
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use wp_api_lib::{ClassSpec, ClassifiedRoute, ModelClass, RouteDescriptor, RouteKind};
    ///
    /// let route = ClassifiedRoute::new(
    ///     "/wp/v2/posts/(?P<id>[\\d]+)",
    ///     RouteDescriptor::default(),
    ///     RouteKind::Model,
    /// );
    /// let posts = Arc::new(ModelClass::new(ClassSpec::build(route, "/wp-json/wp/v2/")));
    ///
    /// let post = posts.create_with_id(7);
    /// assert_eq!(post.url(), "/wp-json/wp/v2/posts/7");
    /// ```
    pub fn create_with_id(self: &Arc<Self>, id: impl Into<Value>) -> Model {
        let mut model = self.create(Map::new());
        model.set("id", id);
        model
    }
}

/// An instance of a [`ModelClass`]: an attribute bag with a URL.
#[derive(Debug, Clone)]
pub struct Model {
    class: Arc<ModelClass>,
    attributes: Map<String, Value>,
}

impl Model {
    /// Returns the instance's class.
    pub fn class(&self) -> &Arc<ModelClass> {
        &self.class
    }

    /// Returns the name of the instance's class.
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Returns an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Returns the `id` attribute.
    pub fn id(&self) -> Option<&Value> {
        self.attributes.get("id")
    }

    /// Returns the `parent` attribute.
    pub fn parent(&self) -> Option<&Value> {
        self.attributes.get("parent")
    }

    /// Returns all attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns the instance URL, computed from the current attributes.
    pub fn url(&self) -> Cow<'_, str> {
        self.class.url().resolve(self)
    }
}

impl UrlSubject for Model {
    fn id(&self) -> Option<&Value> {
        Model::id(self)
    }

    fn parent(&self) -> Option<&Value> {
        Model::parent(self)
    }
}
