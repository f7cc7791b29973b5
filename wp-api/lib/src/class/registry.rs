//! Model and collection namespaces.

use std::sync::Arc;

use indexmap::IndexMap;

use super::collection::CollectionClass;
use super::model::ModelClass;
use super::spec::ClassSpec;
use crate::classify::ClassifiedRoute;

/// One step of a registry build, recorded in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// A model class was inserted.
    ModelRegistered {
        /// Name of the model class.
        class_name: String,
    },
    /// A collection class was inserted after resolving its model link.
    CollectionRegistered {
        /// Name of the collection class.
        class_name: String,
        /// Whether a model of the same name was found.
        linked: bool,
    },
}

/// The model and collection namespaces produced by one discovery run.
///
/// Keys are class names. Inserting a name that already exists replaces the
/// earlier class in place.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ClassifiedRoute, Registries, RouteDescriptor, RouteKind};
///
/// let prefix = "https://example.com/wp-json/wp/v2/";
/// let mut registries = Registries::default();
/// registries.register_models(
///     vec![ClassifiedRoute::new("/wp/v2/tags/(?P<id>[\\d]+)", RouteDescriptor::default(), RouteKind::Model)],
///     prefix,
/// );
/// registries.register_collections(
///     vec![ClassifiedRoute::new("/wp/v2/tags", RouteDescriptor::default(), RouteKind::Collection)],
///     prefix,
/// );
///
/// let tags = registries.collection("Tags").unwrap();
/// assert_eq!(tags.linked_model_name(), Some("Tags"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registries {
    models: IndexMap<String, Arc<ModelClass>>,
    collections: IndexMap<String, Arc<CollectionClass>>,
    build_log: Vec<BuildEvent>,
}

impl Registries {
    /// Builds and inserts a model class for each route, in order.
    pub fn register_models(&mut self, routes: Vec<ClassifiedRoute>, prefix: &str) {
        for route in routes {
            let class = ModelClass::new(ClassSpec::build(route, prefix));
            let class_name = class.name().to_string();

            if let Some(previous) = self.models.insert(class_name.clone(), Arc::new(class)) {
                tracing::debug!(
                    class = %class_name,
                    replaced = %previous.route().path(),
                    "model class name collision, keeping the later route"
                );
            }
            tracing::debug!(class = %class_name, "registered model");
            self.build_log.push(BuildEvent::ModelRegistered { class_name });
        }
    }

    /// Builds and inserts a collection class for each route, in order.
    ///
    /// Each collection links to the model class of the same name, if the
    /// model namespace has one. Register models first.
    pub fn register_collections(&mut self, routes: Vec<ClassifiedRoute>, prefix: &str) {
        for route in routes {
            let spec = ClassSpec::build(route, prefix);
            let class_name = spec.class_name().to_string();
            let model = self.models.get(&class_name).cloned();
            let linked = model.is_some();

            let class = CollectionClass::new(spec, model);
            if let Some(previous) = self.collections.insert(class_name.clone(), Arc::new(class)) {
                tracing::debug!(
                    class = %class_name,
                    replaced = %previous.route().path(),
                    "collection class name collision, keeping the later route"
                );
            }
            tracing::debug!(class = %class_name, linked, "registered collection");
            self.build_log
                .push(BuildEvent::CollectionRegistered { class_name, linked });
        }
    }

    /// Returns the model class registered under `name`.
    pub fn model(&self, name: &str) -> Option<&Arc<ModelClass>> {
        self.models.get(name)
    }

    /// Returns the collection class registered under `name`.
    pub fn collection(&self, name: &str) -> Option<&Arc<CollectionClass>> {
        self.collections.get(name)
    }

    /// Returns the model namespace.
    pub fn models(&self) -> &IndexMap<String, Arc<ModelClass>> {
        &self.models
    }

    /// Returns the collection namespace.
    pub fn collections(&self) -> &IndexMap<String, Arc<CollectionClass>> {
        &self.collections
    }

    /// Returns the model class names in registration order.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Returns the collection class names in registration order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Returns every registration in the order it happened.
    pub fn build_log(&self) -> &[BuildEvent] {
        &self.build_log
    }

    /// Returns `true` if neither namespace has a class.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.collections.is_empty()
    }
}
