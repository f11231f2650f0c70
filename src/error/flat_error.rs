//! Flat error record types.
//!
//! This module provides [`FlatError`] for one flattened error and
//! [`FlatErrors`] for the ordered result of flattening a whole tree.

use std::fmt::{self, Display};

use serde::Serialize;
use stillwater::prelude::*;
use stillwater::Validation;

/// A single error lifted out of a nested error tree.
///
/// - **path**: dot-joined address of the error in the original tree
/// - **message**: the error message, never empty
/// - **kind**: the upstream error type, when the tree recorded one
///
/// # Example
///
/// ```rust
/// use errorflat::FlatError;
///
/// let error = FlatError::new("images.0", "Image is required").with_kind("required");
///
/// assert_eq!(error.to_string(), "images.0: Image is required");
/// assert_eq!(error.kind.as_deref(), Some("required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatError {
    /// Address of the error in the original tree.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
    /// The upstream error type (e.g., `required`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl FlatError {
    /// Creates a new flat error with the given path and message.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind: None,
        }
    }

    /// Sets the error type and returns self for chaining.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for FlatError {}

/// The ordered result of flattening an error tree.
///
/// Records appear in depth-first, left-to-right order of the source tree.
/// Unlike an accumulated failure, this collection may be empty: an empty
/// tree flattens to nothing.
///
/// # Example
///
/// ```rust
/// use errorflat::Flattener;
/// use serde_json::json;
///
/// let errors = Flattener::new().flatten_value(&json!({
///     "name": { "message": "Name is required" },
///     "tags": [{ "message": "Tag is too long" }]
/// }));
///
/// assert_eq!(errors.paths(), vec!["name", "tags.0"]);
/// assert!(errors.into_validation().is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FlatErrors(Vec<FlatError>);

impl FlatErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no errors were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &FlatError> {
        self.0.iter()
    }

    /// Returns the first record, if any.
    pub fn first(&self) -> Option<&FlatError> {
        self.0.first()
    }

    /// Returns all records at the specified path.
    pub fn at_path(&self, path: &str) -> Vec<&FlatError> {
        self.0.iter().filter(|e| e.path == path).collect()
    }

    /// Returns all records with the specified upstream error type.
    pub fn with_kind(&self, kind: &str) -> Vec<&FlatError> {
        self.0
            .iter()
            .filter(|e| e.kind.as_deref() == Some(kind))
            .collect()
    }

    /// Returns the paths of all records in order.
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.path.as_str()).collect()
    }

    /// Returns the messages of all records in order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// Converts this collection into a `Vec<FlatError>`.
    pub fn into_vec(self) -> Vec<FlatError> {
        self.0
    }

    /// Converts this collection into an accumulated validation result.
    ///
    /// No records means success; otherwise the failure carries every record
    /// in order.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<FlatError>> {
        match NonEmptyVec::from_vec(self.0) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }

    pub(crate) fn push(&mut self, error: FlatError) {
        self.0.push(error);
    }
}

impl From<Vec<FlatError>> for FlatErrors {
    fn from(errors: Vec<FlatError>) -> Self {
        Self(errors)
    }
}

impl Display for FlatErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl IntoIterator for FlatErrors {
    type Item = FlatError;
    type IntoIter = std::vec::IntoIter<FlatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatErrors {
    type Item = &'a FlatError;
    type IntoIter = std::slice::Iter<'a, FlatError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FlatError>();
    assert_sync::<FlatError>();
    assert_send::<FlatErrors>();
    assert_sync::<FlatErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FlatErrors {
        FlatErrors::from(vec![
            FlatError::new("name", "required").with_kind("required"),
            FlatError::new("images.0", "too big").with_kind("too_big"),
            FlatError::new("name", "too short").with_kind("too_small"),
        ])
    }

    #[test]
    fn test_flat_error_display_root() {
        let error = FlatError::new("", "form is invalid");
        assert_eq!(error.to_string(), "(root): form is invalid");
    }

    #[test]
    fn test_flat_error_as_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> =
            Box::new(FlatError::new("name", "required"));
        assert_eq!(error.to_string(), "name: required");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_at_path_and_with_kind() {
        let errors = sample();
        assert_eq!(errors.at_path("name").len(), 2);
        assert_eq!(errors.at_path("images.0").len(), 1);
        assert!(errors.at_path("images").is_empty());
        assert_eq!(errors.with_kind("too_big")[0].path, "images.0");
    }

    #[test]
    fn test_display_numbers_records() {
        let display = sample().to_string();
        assert!(display.contains("3 error(s)"));
        assert!(display.contains("1. name: required"));
        assert!(display.contains("2. images.0: too big"));
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value[0],
            json!({ "path": "name", "message": "required", "type": "required" })
        );

        let untyped = serde_json::to_value(FlatError::new("a", "b")).unwrap();
        assert_eq!(untyped, json!({ "path": "a", "message": "b" }));
    }

    #[test]
    fn test_into_validation() {
        match FlatErrors::new().into_validation() {
            Validation::Success(()) => {}
            Validation::Failure(_) => panic!("Expected success"),
        }

        match sample().into_validation() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors.head().message, "required");
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }
}
