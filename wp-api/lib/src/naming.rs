//! Route, parent, and class names derived from route paths.
//!
//! Everything here is a pure function of the path string. Malformed paths
//! never fail; they just produce an empty parent (and so a flat class name).

use crate::classify::RouteKind;
use crate::path::{self, Segment};

/// Names derived from one route path.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::{ResourceName, RouteKind};
///
/// let name = ResourceName::resolve(
///     "/wp/v2/posts/(?P<parent>[\\d]+)/revisions/(?P<id>[\\d]+)",
///     RouteKind::Model,
/// );
/// assert_eq!(name.route_name, "revisions");
/// assert_eq!(name.parent_name, "posts");
/// assert_eq!(name.class_name(), "PostsRevisions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    /// The resource's own segment, e.g. `revisions`.
    pub route_name: String,
    /// The enclosing resource's segment, or empty when not nested.
    pub parent_name: String,
}

impl ResourceName {
    /// Resolves the names of `path` read as a route of the given kind.
    pub fn resolve(path: &str, kind: RouteKind) -> Self {
        let segs = path::segments(path);
        match route_segment(&segs, kind) {
            Some((idx, route_name)) => Self {
                route_name: route_name.to_string(),
                parent_name: parent_at(&segs, idx).unwrap_or_default().to_string(),
            },
            None => Self {
                route_name: String::new(),
                parent_name: String::new(),
            },
        }
    }

    /// Returns `true` when the parent takes part in naming and URLs.
    ///
    /// A parent equal to the route name is ignored.
    pub fn has_parent(&self) -> bool {
        !self.parent_name.is_empty() && self.parent_name != self.route_name
    }

    /// Returns the generated class name.
    pub fn class_name(&self) -> String {
        if self.has_parent() {
            format!(
                "{}{}",
                capitalize(&self.parent_name),
                capitalize(&self.route_name)
            )
        } else {
            capitalize(&self.route_name)
        }
    }
}

/// Returns the route name of `path`, reading its kind from its shape.
///
/// For a path ending in a capture this is the literal just before the
/// capture, either the previous segment or text leading the capture within
/// its own segment; otherwise it is the final segment.
///
/// ```
/// use wp_api_lib::extract_route_name;
///
/// assert_eq!(extract_route_name("/wp/v2/posts/(?P<id>[\\d]+)"), "posts");
/// assert_eq!(extract_route_name("/wp/v2/posts/rev-(?P<id>[\\d]+)"), "rev-");
/// ```
pub fn extract_route_name(path: &str) -> String {
    ResourceName::resolve(path, RouteKind::of_path(path)).route_name
}

/// Returns the parent resource of `path`, or an empty string.
///
/// A parent exists when the route segment is preceded by
/// `<parent>/<capture>/`.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::extract_parent_name;
///
/// assert_eq!(extract_parent_name("/wp/v2/posts/(?P<parent>[\\d]+)/revisions"), "posts");
/// assert_eq!(extract_parent_name("/wp/v2/posts"), "");
/// ```
pub fn extract_parent_name(path: &str) -> String {
    ResourceName::resolve(path, RouteKind::of_path(path)).parent_name
}

/// Upper-cases the first character and leaves the rest alone.
///
/// ```
/// use wp_api_lib::capitalize;
///
/// assert_eq!(capitalize("posts"), "Posts");
/// assert_eq!(capitalize("block-types"), "Block-types");
/// assert_eq!(capitalize("menuItems"), "MenuItems");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Index and literal text of the segment that names the route.
///
/// A model whose last segment is a bare capture is named by the segment
/// before it. That segment must be a literal.
fn route_segment<'a>(segs: &[Segment<'a>], kind: RouteKind) -> Option<(usize, &'a str)> {
    let last = segs.len().checked_sub(1)?;
    let idx = match (kind, segs[last]) {
        (RouteKind::Model, Segment::Capture(_)) => last.checked_sub(1)?,
        _ => last,
    };
    Some((idx, segs[idx].literal()?))
}

fn parent_at<'a>(segs: &[Segment<'a>], idx: usize) -> Option<&'a str> {
    let capture = segs.get(idx.checked_sub(1)?)?;
    if !capture.is_capture() {
        return None;
    }
    segs.get(idx.checked_sub(2)?)?.literal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_model() {
        let name = ResourceName::resolve("/v2/posts/(?P<id>[\\d]+)", RouteKind::Model);
        assert_eq!(name.route_name, "posts");
        assert_eq!(name.parent_name, "");
        assert_eq!(name.class_name(), "Posts");
    }

    #[test]
    fn test_nested_model() {
        let name = ResourceName::resolve(
            "/v2/posts/(?P<parent>[\\d]+)/revisions/(?P<id>[\\d]+)",
            RouteKind::Model,
        );
        assert_eq!(name.parent_name, "posts");
        assert_eq!(name.route_name, "revisions");
        assert_eq!(name.class_name(), "PostsRevisions");
        assert!(name.has_parent());
    }

    #[test]
    fn test_top_level_collection() {
        let name = ResourceName::resolve("/v2/comments", RouteKind::Collection);
        assert_eq!(name.route_name, "comments");
        assert_eq!(name.parent_name, "");
        assert_eq!(name.class_name(), "Comments");
    }

    #[test]
    fn test_nested_collection() {
        let name = ResourceName::resolve(
            "/wp/v2/posts/(?P<parent>[\\d]+)/revisions",
            RouteKind::Collection,
        );
        assert_eq!(name.parent_name, "posts");
        assert_eq!(name.class_name(), "PostsRevisions");
    }

    #[test]
    fn test_parent_equal_to_route_is_ignored() {
        let name = ResourceName::resolve(
            "/wp/v2/terms/(?P<parent>[\\d]+)/terms",
            RouteKind::Collection,
        );
        assert_eq!(name.parent_name, "terms");
        assert!(!name.has_parent());
        assert_eq!(name.class_name(), "Terms");
    }

    #[test]
    fn test_literal_before_route_is_not_a_parent() {
        assert_eq!(extract_parent_name("/wp/v2/users/me"), "");
        assert_eq!(extract_route_name("/wp/v2/users/me"), "me");
    }

    #[test]
    fn test_capture_at_start_has_no_parent() {
        let name = ResourceName::resolve("/(?P<parent>[\\d]+)/items", RouteKind::Collection);
        assert_eq!(name.route_name, "items");
        assert_eq!(name.parent_name, "");
    }

    #[test]
    fn test_model_with_only_a_capture() {
        let name = ResourceName::resolve("/(?P<id>[\\d]+)", RouteKind::Model);
        assert_eq!(name.route_name, "");
        assert_eq!(name.class_name(), "");
    }

    #[test]
    fn test_capture_after_capture_has_no_name() {
        let name = ResourceName::resolve("/wp/v2/x/(?P<a>\\d+)/(?P<id>\\d+)", RouteKind::Model);
        assert_eq!(name.route_name, "");
        assert_eq!(name.parent_name, "");
        assert_eq!(name.class_name(), "");
    }

    #[test]
    fn test_parens_in_class_do_not_leak_into_names() {
        assert_eq!(extract_route_name("/wp/v2/things/(?P<id>[^)]+)"), "things");
        assert_eq!(extract_route_name("/wp/v2/things/(?P<id>[\\(]+)"), "things");

        let name = ResourceName::resolve(
            "/wp/v2/posts/(?P<parent>[^)/]+)/revisions/(?P<id>[^)]+)",
            RouteKind::Model,
        );
        assert_eq!(name.class_name(), "PostsRevisions");
    }

    #[test]
    fn test_literal_leading_the_capture_names_the_route() {
        let name = ResourceName::resolve("/wp/v2/posts/rev-(?P<id>[\\d]+)", RouteKind::Model);
        assert_eq!(name.route_name, "rev-");
        assert_eq!(name.parent_name, "");
        assert_eq!(name.class_name(), "Rev-");

        let nested = ResourceName::resolve(
            "/wp/v2/posts/(?P<parent>[\\d]+)/rev-(?P<id>[\\d]+)",
            RouteKind::Model,
        );
        assert_eq!(nested.parent_name, "posts");
        assert_eq!(nested.class_name(), "PostsRev-");
    }

    #[test]
    fn test_malformed_paths_degrade() {
        assert_eq!(extract_parent_name(""), "");
        assert_eq!(extract_route_name(""), "");
        assert_eq!(extract_parent_name("no-slashes-here"), "");
        assert_eq!(extract_route_name("no-slashes-here"), "no-slashes-here");
        assert_eq!(extract_parent_name("/wp/v2/broken/(?P<id>[\\d]+"), "");
    }

    #[test]
    fn test_extract_uses_path_shape() {
        assert_eq!(extract_route_name("/wp/v2/media/(?P<id>[\\d]+)"), "media");
        assert_eq!(extract_route_name("/wp/v2/media"), "media");
        assert_eq!(
            extract_parent_name("/wp/v2/posts/(?P<parent>[\\d]+)/autosaves/(?P<id>[\\d]+)"),
            "posts"
        );
    }

    #[test]
    fn test_capitalize_only_first_char() {
        assert_eq!(capitalize("wp_block"), "Wp_block");
        assert_eq!(capitalize("ALREADY"), "ALREADY");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
