//! Collection classes and collection instances.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::model::{Model, ModelClass};
use super::spec::ClassSpec;
use crate::classify::ClassifiedRoute;
use crate::url_template::{UrlSubject, UrlTemplate};

/// A generated class for a resource-set route.
///
/// The linked model is optional: a collection whose name matches no model
/// class is still usable, it just cannot construct members.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionClass {
    spec: ClassSpec,
    model: Option<Arc<ModelClass>>,
}

impl CollectionClass {
    /// Wraps a spec as a collection class linked to `model`.
    pub fn new(spec: ClassSpec, model: Option<Arc<ModelClass>>) -> Self {
        Self { spec, model }
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

    /// Returns the linked model class, if one was found at build time.
    pub fn model(&self) -> Option<&Arc<ModelClass>> {
        self.model.as_ref()
    }

    /// Returns the name of the linked model class.
    pub fn linked_model_name(&self) -> Option<&str> {
        self.model.as_deref().map(ModelClass::name)
    }

    /// Creates an empty instance with no parent set.
    pub fn create(self: &Arc<Self>) -> Collection {
        Collection {
            class: Arc::clone(self),
            parent: None,
            models: Vec::new(),
        }
    }
}

/// An instance of a [`CollectionClass`].
#[derive(Debug, Clone)]
pub struct Collection {
    class: Arc<CollectionClass>,
    parent: Option<Value>,
    models: Vec<Model>,
}

impl Collection {
    /// Returns the instance's class.
    pub fn class(&self) -> &Arc<CollectionClass> {
        &self.class
    }

    /// Returns the name of the instance's class.
    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Returns the model class members are built from, if one is linked.
    pub fn model_class(&self) -> Option<&Arc<ModelClass>> {
        self.class.model()
    }

    /// Returns the parent identifier.
    pub fn parent(&self) -> Option<&Value> {
        self.parent.as_ref()
    }

    /// Sets the parent identifier used by nested collection URLs.
    pub fn set_parent(&mut self, parent: impl Into<Value>) {
        self.parent = Some(parent.into());
    }

    /// Returns the collection URL.
    ///
    /// Nested collections read `parent` at call time; top-level collections
    /// return their fixed URL.
    ///
    /// ## Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use wp_api_lib::{ClassSpec, ClassifiedRoute, CollectionClass, RouteDescriptor, RouteKind};
    ///
    /// let route = ClassifiedRoute::new(
    ///     "/wp/v2/posts/(?P<parent>[\\d]+)/revisions",
    ///     RouteDescriptor::default(),
    ///     RouteKind::Collection,
    /// );
    /// let class = Arc::new(CollectionClass::new(ClassSpec::build(route, "/wp-json/wp/v2/"), None));
    ///
    /// let mut revisions = class.create();
    /// revisions.set_parent(3);
    /// assert_eq!(revisions.url(), "/wp-json/wp/v2/posts/3/revisions");
    /// ```
    pub fn url(&self) -> Cow<'_, str> {
        self.class.url().resolve(self)
    }

    /// Adds a member built from `attributes` by the linked model class.
    ///
    /// Returns `None` when the class has no linked model.
    pub fn add(&mut self, attributes: Map<String, Value>) -> Option<&Model> {
        let model = self.class.model()?.create(attributes);
        self.models.push(model);
        self.models.last()
    }

    /// Returns the members added so far.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl UrlSubject for Collection {
    fn id(&self) -> Option<&Value> {
        None
    }

    fn parent(&self) -> Option<&Value> {
        Collection::parent(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RouteKind;
    use crate::schema::RouteDescriptor;
    use serde_json::json;

    const PREFIX: &str = "https://example.com/wp-json/wp/v2/";

    fn spec(path: &str, kind: RouteKind) -> ClassSpec {
        ClassSpec::build(ClassifiedRoute::new(path, RouteDescriptor::default(), kind), PREFIX)
    }

    #[test]
    fn test_top_level_url_is_fixed() {
        let comments = Arc::new(CollectionClass::new(
            spec("/wp/v2/comments", RouteKind::Collection),
            None,
        ));
        let mut instance = comments.create();
        assert_eq!(instance.url(), format!("{PREFIX}comments"));
        instance.set_parent(99);
        assert_eq!(instance.url(), format!("{PREFIX}comments"));
    }

    #[test]
    fn test_unlinked_collection_cannot_add() {
        let comments = Arc::new(CollectionClass::new(
            spec("/wp/v2/comments", RouteKind::Collection),
            None,
        ));
        assert!(comments.model().is_none());
        assert_eq!(comments.linked_model_name(), None);

        let mut instance = comments.create();
        assert!(instance.model_class().is_none());
        assert!(instance.add(Map::new()).is_none());
        assert!(instance.is_empty());
    }

    #[test]
    fn test_linked_collection_builds_members() {
        let model = Arc::new(ModelClass::new(spec(
            "/wp/v2/posts/(?P<parent>[\\d]+)/revisions/(?P<id>[\\d]+)",
            RouteKind::Model,
        )));
        let class = Arc::new(CollectionClass::new(
            spec("/wp/v2/posts/(?P<parent>[\\d]+)/revisions", RouteKind::Collection),
            Some(model),
        ));
        assert_eq!(class.linked_model_name(), Some("PostsRevisions"));

        let mut revisions = class.create();
        revisions.set_parent(3);
        assert_eq!(revisions.parent(), Some(&json!(3)));
        assert_eq!(revisions.model_class().map(|m| m.name()), Some("PostsRevisions"));

        let mut attrs = Map::new();
        attrs.insert("id".to_string(), json!(5));
        attrs.insert("parent".to_string(), json!(3));
        let member_url = revisions.add(attrs).map(|m| m.url().into_owned());

        assert_eq!(member_url, Some(format!("{PREFIX}posts/3/revisions/5")));
        assert_eq!(revisions.url(), format!("{PREFIX}posts/3/revisions"));
        assert_eq!(revisions.len(), 1);
        assert_eq!(revisions.models()[0].class_name(), "PostsRevisions");
    }
}
