//! The input error tree.
//!
//! This module provides [`ErrorNode`], a tagged union over the shapes a
//! form-validation library emits for field errors, and [`FieldError`], the
//! leaf that carries a message.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A single field error as reported by the upstream validation library.
///
/// Only non-empty messages form a leaf; see [`ErrorNode::leaf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Human-readable error message. A leaf with an empty message is skipped.
    pub message: String,
    /// The upstream error type (e.g., `required`, `too_small`).
    pub kind: Option<String>,
}

impl FieldError {
    /// Creates a field error, or `None` if `message` is empty.
    pub fn new(message: impl Into<String>) -> Option<Self> {
        let message = message.into();
        if message.is_empty() {
            None
        } else {
            Some(Self {
                message,
                kind: None,
            })
        }
    }

    /// Sets the upstream error type and returns self for chaining.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A node in a nested validation-error tree.
///
/// Classification follows a fixed priority: a node carrying a non-empty
/// message is a [`ErrorNode::Leaf`] regardless of what else it holds, then
/// sequences, then mappings. Anything else is [`ErrorNode::Absent`].
///
/// An upstream array-level error (an array that also carries a `message`)
/// is therefore a `Leaf`; its elements are not kept.
///
/// # Example
///
/// ```rust
/// use errorflat::ErrorNode;
/// use serde_json::json;
///
/// let node = ErrorNode::from_value(&json!({
///     "name": { "message": "Name is required", "type": "required" },
///     "images": [null, { "message": "Image is required" }]
/// }));
///
/// assert!(!node.is_leaf());
/// assert!(ErrorNode::from_value(&json!(null)).is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorNode {
    /// No error at this location.
    #[default]
    Absent,
    /// An error with a message; traversal stops here. An empty message is
    /// skipped like `Absent`.
    Leaf(FieldError),
    /// Errors keyed by field name, in insertion order.
    Mapping(IndexMap<String, ErrorNode>),
    /// Errors for a repeated field, in index order.
    Sequence(Vec<ErrorNode>),
}

impl ErrorNode {
    /// Creates an absent node.
    pub fn absent() -> Self {
        ErrorNode::Absent
    }

    /// Creates a leaf from a message.
    ///
    /// An empty message carries no error and yields [`ErrorNode::Absent`].
    pub fn leaf(message: impl Into<String>) -> Self {
        Self::from_parts(message.into(), None)
    }

    /// Creates a leaf from a message and an upstream error type.
    ///
    /// An empty message carries no error and yields [`ErrorNode::Absent`].
    pub fn leaf_with_kind(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::from_parts(message.into(), Some(kind.into()))
    }

    fn from_parts(message: String, kind: Option<String>) -> Self {
        if message.is_empty() {
            ErrorNode::Absent
        } else {
            ErrorNode::Leaf(FieldError { message, kind })
        }
    }

    /// Creates a mapping node from `(key, node)` pairs, keeping their order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ErrorNode)>,
    {
        ErrorNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Creates a sequence node from nodes in index order.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ErrorNode>,
    {
        ErrorNode::Sequence(items.into_iter().collect())
    }

    /// Returns true if this node carries no error.
    pub fn is_absent(&self) -> bool {
        matches!(self, ErrorNode::Absent)
    }

    /// Returns true if this node carries a message.
    pub fn is_leaf(&self) -> bool {
        matches!(self, ErrorNode::Leaf(_))
    }

    /// Returns the message of a leaf node.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorNode::Leaf(error) => Some(&error.message),
            _ => None,
        }
    }

    /// Classifies a JSON value as an error node.
    ///
    /// - `null` is absent.
    /// - An object with a non-empty string `message` is a leaf; a string
    ///   `type` member becomes its kind and other members are ignored.
    /// - An array is a sequence; `null` elements stay in place as absent.
    /// - Any other object is a mapping in member order.
    /// - Strings, numbers and booleans are not error nodes and are absent.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => ErrorNode::Absent,
            Value::Object(members) => match leaf_message(members) {
                Some(message) => ErrorNode::Leaf(FieldError {
                    message: message.to_string(),
                    kind: members.get("type").and_then(Value::as_str).map(String::from),
                }),
                None => ErrorNode::Mapping(
                    members
                        .iter()
                        .map(|(key, child)| (key.clone(), ErrorNode::from_value(child)))
                        .collect(),
                ),
            },
            Value::Array(items) => {
                ErrorNode::Sequence(items.iter().map(ErrorNode::from_value).collect())
            }
            scalar => {
                tracing::trace!(value = %scalar, "skipping scalar in error tree");
                ErrorNode::Absent
            }
        }
    }

    /// Parses JSON text and classifies it with [`ErrorNode::from_value`].
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidJson` if `input` is not valid JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use errorflat::ErrorNode;
    ///
    /// let node = ErrorNode::from_json_str(r#"{"name": {"message": "required"}}"#).unwrap();
    /// assert!(!node.is_absent());
    ///
    /// assert!(ErrorNode::from_json_str("{not json").is_err());
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(input)?;
        Ok(ErrorNode::from_value(&value))
    }
}

fn leaf_message(members: &Map<String, Value>) -> Option<&str> {
    members
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

impl From<&Value> for ErrorNode {
    fn from(value: &Value) -> Self {
        ErrorNode::from_value(value)
    }
}

impl From<Value> for ErrorNode {
    fn from(value: Value) -> Self {
        ErrorNode::from_value(&value)
    }
}

impl From<FieldError> for ErrorNode {
    fn from(error: FieldError) -> Self {
        ErrorNode::from_parts(error.message, error.kind)
    }
}

/// Errors that can occur when reading an error tree from text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input was not valid JSON.
    #[error("invalid error tree JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorNode>();
    assert_sync::<ErrorNode>();
};
