//! Depth-first flattening of error trees.
//!
//! This module provides [`Flattener`], which walks an [`ErrorNode`] tree and
//! emits one [`FlatError`] per reachable leaf, plus the free functions
//! [`flatten`], [`flatten_with_prefix`] and [`flatten_value`] that use the
//! default options.

use serde_json::Value;

use crate::error::{FlatError, FlatErrors};
use crate::node::{ErrorNode, FieldError};
use crate::path::{FieldPath, PathStyle};

/// Walks error trees and produces flat, ordered error records.
///
/// Traversal is depth-first and pre-order. Mapping entries are visited in
/// insertion order and sequence elements in index order. A leaf ends the
/// descent at its own path; absent nodes contribute nothing.
///
/// # Example
///
/// ```rust
/// use errorflat::{Flattener, PathStyle};
/// use serde_json::json;
///
/// let tree = json!({
///     "offices": [{ "address": { "formattedAddress": { "message": "Required" } } }]
/// });
///
/// let dotted = Flattener::new().flatten_value(&tree);
/// assert_eq!(dotted.paths(), vec!["offices.0.address.formattedAddress"]);
///
/// let bracketed = Flattener::new()
///     .with_path_style(PathStyle::Bracketed)
///     .flatten_value(&tree);
/// assert_eq!(bracketed.paths(), vec!["offices[0].address.formattedAddress"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Flattener {
    style: PathStyle,
}

impl Flattener {
    /// Creates a flattener with dotted paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how record paths are rendered.
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the configured path style.
    pub fn path_style(&self) -> PathStyle {
        self.style
    }

    /// Flattens a tree rooted at the empty path.
    pub fn flatten(&self, node: &ErrorNode) -> FlatErrors {
        self.flatten_at(node, &FieldPath::root())
    }

    /// Flattens a tree whose root lives at `prefix` (a dotted path).
    ///
    /// A leaf at the root produces a single record whose path is `prefix`.
    pub fn flatten_with_prefix(&self, node: &ErrorNode, prefix: &str) -> FlatErrors {
        self.flatten_at(node, &FieldPath::parse(prefix))
    }

    /// Classifies a JSON value with [`ErrorNode::from_value`] and flattens it.
    pub fn flatten_value(&self, value: &Value) -> FlatErrors {
        self.flatten(&ErrorNode::from_value(value))
    }

    /// Flattens a tree whose root lives at `path`.
    pub fn flatten_at(&self, node: &ErrorNode, path: &FieldPath) -> FlatErrors {
        let mut out = FlatErrors::new();
        self.collect(node, path, &mut out);
        tracing::debug!(records = out.len(), root = %path, "flattened error tree");
        out
    }

    fn collect(&self, node: &ErrorNode, path: &FieldPath, out: &mut FlatErrors) {
        match node {
            ErrorNode::Leaf(error) if !error.message.is_empty() => {
                out.push(self.record(path, error))
            }
            ErrorNode::Absent | ErrorNode::Leaf(_) => {}
            ErrorNode::Mapping(entries) => {
                for (key, child) in entries {
                    self.collect(child, &path.push_field(key.as_str()), out);
                }
            }
            ErrorNode::Sequence(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.collect(item, &path.push_index(index), out);
                }
            }
        }
    }

    fn record(&self, path: &FieldPath, error: &FieldError) -> FlatError {
        FlatError {
            path: path.render(self.style),
            message: error.message.clone(),
            kind: error.kind.clone(),
        }
    }
}

/// Flattens an error tree into `(path, message)` records.
///
/// # Example
///
/// ```rust
/// use errorflat::{flatten, ErrorNode};
///
/// let tree = ErrorNode::mapping([
///     ("name", ErrorNode::leaf("this is an error")),
///     ("images", ErrorNode::sequence([ErrorNode::leaf("Image is required")])),
/// ]);
///
/// let errors = flatten(&tree);
/// assert_eq!(errors[0].path, "name");
/// assert_eq!(errors[1].path, "images.0");
/// ```
pub fn flatten(node: &ErrorNode) -> Vec<FlatError> {
    Flattener::default().flatten(node).into_vec()
}

/// Flattens an error tree whose root lives at the dotted path `prefix`.
pub fn flatten_with_prefix(node: &ErrorNode, prefix: &str) -> Vec<FlatError> {
    Flattener::default()
        .flatten_with_prefix(node, prefix)
        .into_vec()
}

/// Flattens a JSON error object as emitted by a form-validation library.
pub fn flatten_value(value: &Value) -> Vec<FlatError> {
    Flattener::default().flatten_value(value).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(errors: &[FlatError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_absent_root_is_empty() {
        assert!(flatten(&ErrorNode::Absent).is_empty());
        assert!(flatten(&ErrorNode::mapping(Vec::<(String, ErrorNode)>::new())).is_empty());
    }

    #[test]
    fn test_leaf_root_uses_prefix() {
        let leaf = ErrorNode::leaf("root error");
        assert_eq!(flatten(&leaf), vec![FlatError::new("", "root error")]);
        assert_eq!(
            flatten_with_prefix(&leaf, "items.3"),
            vec![FlatError::new("items.3", "root error")]
        );
    }

    #[test]
    fn test_prefix_joins_child_keys() {
        let tree = ErrorNode::mapping([("city", ErrorNode::leaf("required"))]);
        assert_eq!(paths(&flatten_with_prefix(&tree, "address")), vec!["address.city"]);
    }

    #[test]
    fn test_sequence_skips_absent_elements() {
        let tree = ErrorNode::mapping([(
            "images",
            ErrorNode::sequence([
                ErrorNode::Absent,
                ErrorNode::leaf("second"),
                ErrorNode::Absent,
                ErrorNode::leaf("fourth"),
            ]),
        )]);

        assert_eq!(paths(&flatten(&tree)), vec!["images.1", "images.3"]);
    }

    #[test]
    fn test_top_level_sequence_uses_indices() {
        let tree = ErrorNode::sequence([ErrorNode::leaf("a"), ErrorNode::leaf("b")]);
        assert_eq!(paths(&flatten(&tree)), vec!["0", "1"]);
    }

    #[test]
    fn test_nested_sequences() {
        let tree = ErrorNode::mapping([(
            "grid",
            ErrorNode::sequence([ErrorNode::sequence([ErrorNode::Absent, ErrorNode::leaf("x")])]),
        )]);
        assert_eq!(paths(&flatten(&tree)), vec!["grid.0.1"]);
    }

    #[test]
    fn test_kind_is_carried() {
        let tree = ErrorNode::mapping([("name", ErrorNode::leaf_with_kind("required", "required"))]);
        assert_eq!(flatten(&tree)[0].kind.as_deref(), Some("required"));
    }

    #[test]
    fn test_hand_built_empty_leaf_is_skipped() {
        let empty = ErrorNode::Leaf(FieldError {
            message: String::new(),
            kind: Some("required".to_string()),
        });
        let tree = ErrorNode::mapping([
            ("name", empty.clone()),
            ("email", ErrorNode::leaf("invalid")),
        ]);

        assert!(flatten(&empty).is_empty());
        let errors = flatten(&tree);
        assert_eq!(paths(&errors), vec!["email"]);
        assert!(errors.iter().all(|e| !e.message.is_empty()));
    }

    #[test]
    fn test_path_style_accessor() {
        assert_eq!(Flattener::new().path_style(), PathStyle::Dotted);
        assert_eq!(
            Flattener::new()
                .with_path_style(PathStyle::Bracketed)
                .path_style(),
            PathStyle::Bracketed
        );
    }

    #[test]
    fn test_bracketed_style() {
        let tree = ErrorNode::mapping([(
            "addresses",
            ErrorNode::sequence([ErrorNode::mapping([("zip", ErrorNode::leaf("bad"))])]),
        )]);

        let errors = Flattener::new()
            .with_path_style(PathStyle::Bracketed)
            .flatten(&tree);
        assert_eq!(errors.paths(), vec!["addresses[0].zip"]);
    }
}
