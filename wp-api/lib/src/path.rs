//! Route path segmentation.
//!
//! Route paths mix literal segments with parenthesized capture expressions,
//! e.g. `/wp/v2/posts/(?P<parent>[\d]+)/revisions/(?P<id>[\d]+)`. Captures
//! are treated as atomic: a `/` inside a capture's pattern never splits it.
//!
//! Only regex structure counts when matching parentheses. A `\`-escaped
//! character and anything inside a `[...]` class is plain text, so
//! `(?P<id>[^)]+)` is one group.

/// One `/`-separated piece of a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text, e.g. `posts`. May be empty for doubled or trailing `/`.
    Literal(&'a str),
    /// A balanced parenthesized group spanning the whole segment.
    Capture(&'a str),
    /// Literal text followed by one group that ends the segment,
    /// e.g. `rev-(?P<id>[\d]+)`.
    Prefixed {
        /// The text before the group, never empty.
        literal: &'a str,
        /// The group itself.
        capture: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Returns `true` for a segment that is exactly one group.
    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Capture(_))
    }

    /// Returns `true` if the segment finishes with a group.
    pub fn ends_in_capture(&self) -> bool {
        matches!(self, Self::Capture(_) | Self::Prefixed { .. })
    }

    /// Returns the literal text of the segment, if it has any.
    ///
    /// For [`Segment::Prefixed`] this is the text before the group.
    pub fn literal(&self) -> Option<&'a str> {
        match *self {
            Self::Literal(s) if !s.is_empty() => Some(s),
            Self::Prefixed { literal, .. } => Some(literal),
            _ => None,
        }
    }

    fn classify(raw: &'a str) -> Self {
        match trailing_group(raw) {
            Some(0) => Self::Capture(raw),
            Some(start) => Self::Prefixed {
                literal: &raw[..start],
                capture: &raw[start..],
            },
            None => Self::Literal(raw),
        }
    }
}

/// Splits a route path into segments.
///
/// A leading `/` does not produce a segment; a trailing `/` produces an empty
/// final literal. Unbalanced parentheses swallow the rest of the path into
/// one literal segment.
///
/// ## Examples
///
/// ```
/// use wp_api_lib::path::{segments, Segment};
///
/// let segs = segments("/wp/v2/posts/(?P<id>[\\d]+)");
/// assert_eq!(segs.len(), 4);
/// assert_eq!(segs[2], Segment::Literal("posts"));
/// assert!(segs[3].is_capture());
/// ```
pub fn segments(path: &str) -> Vec<Segment<'_>> {
    let body = path.strip_prefix('/').unwrap_or(path);
    if body.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, ch) in structural(body) {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                out.push(Segment::classify(&body[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }
    out.push(Segment::classify(&body[start..]));
    out
}

/// Returns `true` if the path ends in a single capture expression.
///
/// The group must close at the path's final character. Literal text may
/// precede it within the last segment; `/posts/(?P<id>\d+)/` (trailing
/// separator) does not qualify.
pub fn ends_with_capture(path: &str) -> bool {
    segments(path).last().is_some_and(Segment::ends_in_capture)
}

/// Characters of `text` that carry regex structure, with their byte offsets.
///
/// Skips `\`-escaped characters and the contents of `[...]` classes. A `]`
/// directly after `[` or `[^` belongs to the class.
fn structural(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut escaped = false;
    let mut class_open: Option<usize> = None;

    text.char_indices().filter(move |&(idx, ch)| {
        if escaped {
            escaped = false;
            return false;
        }
        if ch == '\\' {
            escaped = true;
            return false;
        }
        match class_open {
            Some(open) => {
                let head = &text[open + 1..idx];
                if ch == ']' && !head.is_empty() && head != "^" {
                    class_open = None;
                }
                false
            }
            None if ch == '[' => {
                class_open = Some(idx);
                false
            }
            None => true,
        }
    })
}

/// Byte offset of the group closing at the end of `raw`, when that group is
/// the only top-level group in `raw`.
fn trailing_group(raw: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut start = None;
    let mut closed_at = None;

    for (idx, ch) in structural(raw) {
        match ch {
            '(' => {
                if depth == 0 {
                    if start.is_some() {
                        return None;
                    }
                    start = Some(idx);
                }
                depth += 1;
            }
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    closed_at = Some(idx);
                }
            }
            _ => {}
        }
    }

    let closes_at_end = closed_at.is_some_and(|end| end + 1 == raw.len());
    if depth == 0 && closes_at_end {
        start
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_collection_path() {
        assert_eq!(
            segments("/wp/v2/comments"),
            vec![
                Segment::Literal("wp"),
                Segment::Literal("v2"),
                Segment::Literal("comments"),
            ]
        );
    }

    #[test]
    fn test_nested_model_path() {
        let segs = segments("/wp/v2/posts/(?P<parent>[\\d]+)/revisions/(?P<id>[\\d]+)");
        assert_eq!(segs.len(), 6);
        assert_eq!(segs[3], Segment::Capture("(?P<parent>[\\d]+)"));
        assert_eq!(segs[4], Segment::Literal("revisions"));
        assert_eq!(segs[5], Segment::Capture("(?P<id>[\\d]+)"));
    }

    #[test]
    fn test_slash_inside_capture_is_not_a_separator() {
        let segs = segments("/wp/v2/templates/(?P<id>[\\/\\w-]+)");
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], Segment::Capture("(?P<id>[\\/\\w-]+)"));
    }

    #[test]
    fn test_paren_inside_class_is_text() {
        let segs = segments("/wp/v2/things/(?P<id>[^)]+)");
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], Segment::Capture("(?P<id>[^)]+)"));

        let segs = segments("/wp/v2/things/(?P<id>[\\(]+)");
        assert_eq!(segs[3], Segment::Capture("(?P<id>[\\(]+)"));

        let segs = segments("/wp/v2/things/(?P<id>[)(]+)");
        assert_eq!(segs[3], Segment::Capture("(?P<id>[)(]+)"));
    }

    #[test]
    fn test_bracket_first_in_class_is_text() {
        let segs = segments("/wp/v2/things/(?P<id>[]/)]+)");
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[3], Segment::Capture("(?P<id>[]/)]+)"));

        let segs = segments("/wp/v2/things/(?P<id>[^])]+)");
        assert_eq!(segs[3], Segment::Capture("(?P<id>[^])]+)"));
    }

    #[test]
    fn test_escaped_parens_are_text() {
        let segs = segments("/wp/v2/things/(?P<id>\\)\\d+)");
        assert_eq!(segs[3], Segment::Capture("(?P<id>\\)\\d+)"));

        let segs = segments("/wp/v2/things/(?P<id>\\(\\d+)");
        assert_eq!(segs[3], Segment::Capture("(?P<id>\\(\\d+)"));

        let segs = segments("/wp/v2/things/\\(literal\\)");
        assert_eq!(segs[3], Segment::Literal("\\(literal\\)"));
    }

    #[test]
    fn test_literal_before_group() {
        let segs = segments("/wp/v2/posts/rev-(?P<id>[\\d]+)");
        assert_eq!(segs.len(), 4);
        assert_eq!(
            segs[3],
            Segment::Prefixed {
                literal: "rev-",
                capture: "(?P<id>[\\d]+)",
            }
        );
        assert!(!segs[3].is_capture());
        assert!(segs[3].ends_in_capture());
        assert_eq!(segs[3].literal(), Some("rev-"));
    }

    #[test]
    fn test_root_and_empty() {
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_trailing_slash_gives_empty_literal() {
        let segs = segments("/wp/v2/posts/");
        assert_eq!(segs.last(), Some(&Segment::Literal("")));
        assert_eq!(segs.last().and_then(Segment::literal), None);
    }

    #[test]
    fn test_unbalanced_paren_is_literal() {
        let segs = segments("/wp/v2/broken/(?P<id>[\\d]+");
        assert_eq!(segs.last(), Some(&Segment::Literal("(?P<id>[\\d]+")));
    }

    #[test]
    fn test_two_groups_in_one_segment_are_not_a_capture() {
        let segs = segments("/wp/v2/(?P<a>x)(?P<b>y)");
        assert!(!segs[2].ends_in_capture());
        assert_eq!(segs[2], Segment::Literal("(?P<a>x)(?P<b>y)"));
    }

    #[test]
    fn test_ends_with_capture() {
        assert!(ends_with_capture("/wp/v2/posts/(?P<id>[\\d]+)"));
        assert!(ends_with_capture("/wp/v2/users/(?P<id>[\\d]+)"));
        assert!(ends_with_capture("/wp/v2/things/(?P<id>[^)]+)"));
        assert!(ends_with_capture("/wp/v2/things/(?P<id>[\\(]+)"));
        assert!(ends_with_capture("/wp/v2/posts/rev-(?P<id>[\\d]+)"));
        assert!(!ends_with_capture("/wp/v2/posts"));
        assert!(!ends_with_capture("/wp/v2/posts/(?P<id>[\\d]+)/"));
        assert!(!ends_with_capture("/wp/v2/posts/(?P<parent>[\\d]+)/revisions"));
        assert!(!ends_with_capture("/wp/v2/oembed/proxy)"));
        assert!(!ends_with_capture("/wp/v2/things/\\(literal\\)"));
    }
}
