//! Wire types for the REST index document.
//!
//! A WordPress-style REST index answers with
//! `{ "namespace": ..., "routes": { "<path>": <descriptor>, ... } }`. Only
//! `routes` matters for discovery; descriptors are carried through untouched
//! so generated classes can expose them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::method::RestMethod;

/// The route mapping delivered by a schema source.
///
/// Route order is the order of the document and is preserved through
/// classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchema {
    /// Path template to descriptor, in document order.
    #[serde(default)]
    pub routes: IndexMap<String, RouteDescriptor>,
}

impl RawSchema {
    /// Decodes a schema document from JSON text.
    ///
    /// ## Errors
    ///
    /// Returns the decode error if the text is not a schema document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Decodes a schema document from raw bytes.
    ///
    /// ## Errors
    ///
    /// Returns the decode error if the bytes are not a schema document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the schema has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Schema entry for one route path.
///
/// Unknown fields (such as `_links`) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Namespace the route belongs to, e.g. `wp/v2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// HTTP methods the route accepts, as sent by the server.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Per-endpoint breakdown of the route.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointDescriptor>,

    /// Any other fields of the descriptor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteDescriptor {
    /// Creates a descriptor advertising the given methods.
    pub fn with_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns the typed methods, skipping verbs that are not recognized.
    pub fn supported_methods(&self) -> Vec<RestMethod> {
        self.methods
            .iter()
            .filter_map(|m| m.to_ascii_uppercase().parse().ok())
            .collect()
    }

    /// Returns `true` if the route advertises `method`.
    pub fn supports(&self, method: RestMethod) -> bool {
        self.supported_methods().contains(&method)
    }

    /// Returns `true` if the route advertises at least one recognized method
    /// and none of them modify state.
    pub fn is_read_only(&self) -> bool {
        let methods = self.supported_methods();
        !methods.is_empty() && methods.iter().all(RestMethod::is_safe)
    }
}

/// One endpoint of a route: a method set with its arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// HTTP methods of this endpoint.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Argument schema. Servers send `[]` when there are none, so this stays
    /// an untyped value.
    #[serde(default)]
    pub args: Value,

    /// Any other fields of the endpoint.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
