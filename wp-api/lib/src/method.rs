//! HTTP verbs advertised by route descriptors.

use strum::{Display, EnumIter, EnumString};

/// A verb from a route descriptor's `methods` list.
///
/// WordPress builds these lists from its readable, creatable, editable, and
/// deletable method groups, so five verbs cover every route it registers.
/// Anything else is skipped by [`RouteDescriptor::supported_methods`].
///
/// [`RouteDescriptor::supported_methods`]: crate::RouteDescriptor::supported_methods
///
/// ## Examples
///
/// ```rust
/// use wp_api_lib::RestMethod;
///
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// assert!(!parsed.is_safe());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource or list.
    Get,
    /// Create, or edit on servers that tunnel edits through POST.
    Post,
    Put,
    Patch,
    Delete,
}

impl RestMethod {
    /// Returns `true` for verbs that leave server state alone.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }
}
