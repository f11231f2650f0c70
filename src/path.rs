//! Field path representation for addressing errors in nested form data.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types for building
//! and rendering the address of an error inside a nested error tree.

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Paths are built from segments that represent either a named field or a
/// position inside a repeated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field (e.g., `name`, `address.label`)
    Field(String),
    /// A position in a repeated field (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// How a [`FieldPath`] is rendered to a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Every segment joined with `.`, indices as bare numbers (`images.0`).
    ///
    /// This is the form-library convention and the default.
    #[default]
    Dotted,
    /// Fields joined with `.`, indices in brackets (`images[0]`).
    Bracketed,
}

/// A path to an error in a nested error tree.
///
/// `FieldPath` represents locations like `addresses.0.info.formattedAddress`
/// and provides methods for building paths incrementally.
///
/// # Example
///
/// ```rust
/// use errorflat::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("addresses")
///     .push_index(0)
///     .push_field("info");
///
/// assert_eq!(path.to_string(), "addresses.0.info");
/// assert_eq!(path.to_bracketed(), "addresses[0].info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path representing the root of the tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a dotted path such as `offices.0.address`.
    ///
    /// Segments made only of ASCII digits become [`PathSegment::Index`], all
    /// others become [`PathSegment::Field`]. The empty string is the root.
    /// Rendering the result with [`PathStyle::Dotted`] gives back `input`.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::root();
        }

        let segments = input
            .split('.')
            .map(|part| match parse_index(part) {
                Some(idx) => PathSegment::Index(idx),
                None => PathSegment::Field(part.to_string()),
            })
            .collect();

        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path in the given style.
    pub fn render(&self, style: PathStyle) -> String {
        match style {
            PathStyle::Dotted => self.to_string(),
            PathStyle::Bracketed => self.to_bracketed(),
        }
    }

    /// Renders the path with indices in brackets (`users[0].email`).
    pub fn to_bracketed(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(idx) => {
                    out.push('[');
                    out.push_str(&idx.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

// Leading zeros stay fields so that parse-then-render is lossless.
fn parse_index(part: &str) -> Option<usize> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Field(name) => write!(f, "{}", name)?,
                PathSegment::Index(idx) => write!(f, "{}", idx)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(input: &str) -> Self {
        FieldPath::parse(input)
    }
}
