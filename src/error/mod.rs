//! Flat error records produced by traversal.
//!
//! This module provides [`FlatError`], a single `(path, message)` record, and
//! [`FlatErrors`], the ordered collection a renderer iterates over.

mod flat_error;

pub use flat_error::{FlatError, FlatErrors};
