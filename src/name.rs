//! Hierarchical dotted names.
//!
//! Every struct and variable in a style sheet is identified by a [`FullName`]:
//! an ordered list of segments written `overview.document.bg` in source. Names
//! are read-only after construction and compare segment-wise.

use serde::Serialize;

/// An ordered list of name segments, like `overview.document.bg`.
///
/// # Example
///
/// ```rust
/// use styledef::FullName;
///
/// let name = FullName::from_dotted("overview.document.bg");
/// assert_eq!(name.segments(), ["overview", "document", "bg"]);
/// assert_eq!(name.dotted(), "overview.document.bg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FullName(Vec<String>);

impl FullName {
    /// Creates an empty name.
    ///
    /// An empty name means "unnamed": variables, struct fields and structs
    /// all treat an empty name as not present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dotted name like `button.bg` into its segments.
    ///
    /// Empty segments are discarded, so `""` parses to the empty name.
    pub fn from_dotted(name: &str) -> Self {
        name.split('.').filter(|s| !s.is_empty()).collect()
    }

    /// Returns true if this name has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Joins the segments with `.` for display and diagnostics.
    ///
    /// This is deliberately an explicit operation rather than a `Display`
    /// impl: the dotted form is one rendering of the name, not the name.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl<S: Into<String>> FromIterator<S> for FullName {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for FullName {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}
