//! Locations of keys and array elements inside a JSON document.
//!
//! A [`JsonPath`] renders the way findings are reported to users:
//! object members are joined with `.`, array elements are written `[i]`,
//! and there is no leading separator at the root.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// A single step from a container to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object member, by key.
    Field(String),
    /// An array element, by 0-based index.
    Index(usize),
}

/// A path from the document root to a nested value.
///
/// Paths are immutable; `push_*` returns an extended copy so sibling
/// branches can share a common prefix.
///
/// ```rust
/// use richtext_lint::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("blocks")
///     .push_index(2)
///     .push_field("richtext");
///
/// assert_eq!(path.to_string(), "blocks[2].richtext");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path, pointing at the document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with an object key appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an array index appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, i.e. how many containers deep the path reaches.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// The final segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = JsonPath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_root_key_has_no_prefix() {
        assert_eq!(JsonPath::root().push_field("richtext").to_string(), "richtext");
    }

    #[test]
    fn test_nested_keys_are_dotted() {
        let path = JsonPath::root().push_field("a").push_field("RichText");
        assert_eq!(path.to_string(), "a.RichText");
    }

    #[test]
    fn test_root_array_element() {
        let path = JsonPath::root().push_index(0).push_field("richtext");
        assert_eq!(path.to_string(), "[0].richtext");
    }

    #[test]
    fn test_nested_arrays() {
        let path = JsonPath::root()
            .push_field("rows")
            .push_index(1)
            .push_index(3);
        assert_eq!(path.to_string(), "rows[1][3]");
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn test_branches_share_prefix() {
        let base = JsonPath::root().push_field("items");
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.to_string(), "items");
        assert_eq!(first.to_string(), "items[0]");
        assert_eq!(second.to_string(), "items[1]");
    }

    #[test]
    fn test_last_segment() {
        let path = JsonPath::root().push_field("a").push_index(4);
        assert_eq!(path.last(), Some(&PathSegment::Index(4)));
        assert_eq!(JsonPath::root().last(), None);
    }

    #[test]
    fn test_serializes_as_display_string() {
        let path = JsonPath::root().push_field("doc").push_index(0);
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"doc[0]\"");
    }
}
