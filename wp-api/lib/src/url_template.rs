//! URL construction for generated classes.
//!
//! Most classes resolve their URL against a live instance, because `id` and
//! `parent` can change after the instance is created. Top-level collections
//! are the exception: their URL is a fixed string computed once when the
//! class is built.

use std::borrow::Cow;

use serde_json::Value;

use crate::classify::RouteKind;
use crate::naming::ResourceName;

/// Something a per-instance URL can be resolved against.
pub trait UrlSubject {
    /// Returns the instance identifier, if set.
    fn id(&self) -> Option<&Value>;

    /// Returns the parent identifier, if set.
    fn parent(&self) -> Option<&Value>;
}

/// URL logic of one generated class.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ResourceName, RouteKind, UrlTemplate};
///
/// let name = ResourceName::resolve("/wp/v2/comments", RouteKind::Collection);
/// let url = UrlTemplate::build(RouteKind::Collection, &name, "https://example.com/wp-json/wp/v2/");
///
/// assert_eq!(url.as_static(), Some("https://example.com/wp-json/wp/v2/comments"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTemplate {
    /// A URL fixed when the class was built.
    Static(String),
    /// A URL recomputed from the instance on every call.
    PerInstance(InstanceUrl),
}

impl UrlTemplate {
    /// Builds the URL logic for a route of `kind` named by `name`.
    ///
    /// `prefix` is `api_root + version_string`.
    pub fn build(kind: RouteKind, name: &ResourceName, prefix: &str) -> Self {
        let parent_name = name.has_parent().then(|| name.parent_name.clone());
        match (kind, parent_name) {
            (RouteKind::Collection, None) => Self::Static(format!("{prefix}{}", name.route_name)),
            (kind, parent_name) => Self::PerInstance(InstanceUrl {
                prefix: prefix.to_string(),
                parent_name,
                route_name: name.route_name.clone(),
                with_id: kind == RouteKind::Model,
            }),
        }
    }

    /// Resolves the URL for `subject`.
    ///
    /// Static URLs ignore the subject and are returned borrowed.
    pub fn resolve<S: UrlSubject + ?Sized>(&self, subject: &S) -> Cow<'_, str> {
        match self {
            Self::Static(url) => Cow::Borrowed(url),
            Self::PerInstance(template) => Cow::Owned(template.resolve(subject)),
        }
    }

    /// Returns the fixed URL, if this template has one.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Self::Static(url) => Some(url),
            Self::PerInstance(_) => None,
        }
    }

    /// Returns `true` for a fixed URL.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Returns a readable form with `{parent}` and `{id}` placeholders.
    pub fn pattern(&self) -> String {
        match self {
            Self::Static(url) => url.clone(),
            Self::PerInstance(template) => template.pattern(),
        }
    }
}

/// A URL assembled from the instance at call time.
///
/// Layout: `prefix [parent_name '/' {parent} '/'] route_name ['/' {id}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceUrl {
    prefix: String,
    parent_name: Option<String>,
    route_name: String,
    with_id: bool,
}

impl InstanceUrl {
    /// Returns the parent resource segment, if the URL is nested.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Returns the resource segment.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// Returns `true` if the instance id ends the URL.
    pub fn with_id(&self) -> bool {
        self.with_id
    }

    fn resolve<S: UrlSubject + ?Sized>(&self, subject: &S) -> String {
        self.assemble(
            || render(subject.parent()),
            || render(subject.id()),
        )
    }

    fn pattern(&self) -> String {
        self.assemble(|| Cow::Borrowed("{parent}"), || Cow::Borrowed("{id}"))
    }

    fn assemble<'v>(
        &self,
        parent: impl FnOnce() -> Cow<'v, str>,
        id: impl FnOnce() -> Cow<'v, str>,
    ) -> String {
        let mut url = self.prefix.clone();
        if let Some(parent_name) = &self.parent_name {
            url.push_str(parent_name);
            url.push('/');
            url.push_str(&parent());
            url.push('/');
        }
        url.push_str(&self.route_name);
        if self.with_id {
            url.push('/');
            url.push_str(&id());
        }
        url
    }
}

/// Renders an attribute into a URL segment.
///
/// Strings are inserted raw; numbers and booleans use their JSON text; a
/// missing or null value renders empty.
fn render(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}
