//! # Errorflat
//!
//! Flattens the nested error trees produced by form-validation libraries into
//! an ordered list of `(path, message)` records that a UI can iterate over.
//!
//! ## Overview
//!
//! Form libraries report errors in the shape of the form itself: an object
//! per field carrying a `message`, nested objects for nested fields, and
//! arrays for repeated fields. Rendering a summary needs the opposite: a flat
//! list where each entry says where the error is and what it says.
//!
//! Errorflat walks the tree depth-first, keeps sibling order, addresses
//! array elements by index (`images.0`), and stops descending at the first
//! node that carries a message. Missing subtrees never fail; they just
//! contribute nothing.
//!
//! ## Core Types
//!
//! - [`ErrorNode`]: The input tree (leaf, mapping, sequence, or absent)
//! - [`FieldPath`]: A path into the tree (e.g., `addresses.0.info`)
//! - [`FlatError`]: One flattened record with path, message and type
//! - [`FlatErrors`]: The ordered result of flattening a tree
//! - [`Flattener`]: Entry point with configurable path rendering
//!
//! ## Example
//!
//! ```rust
//! use errorflat::flatten_value;
//! use serde_json::json;
//!
//! let errors = flatten_value(&json!({
//!     "name": { "message": "String must contain at least 1 character(s)", "type": "too_small" },
//!     "address.label": { "message": "Address label is required", "type": "required" },
//!     "images": [{ "message": "Image is required", "type": "required" }],
//!     "addresses": [{ "info": { "formattedAddress": { "message": "This is an address error" } } }]
//! }));
//!
//! let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
//! assert_eq!(
//!     paths,
//!     vec!["name", "address.label", "images.0", "addresses.0.info.formattedAddress"]
//! );
//! ```

pub mod error;
pub mod flatten;
pub mod node;
pub mod path;

pub use error::{FlatError, FlatErrors};
pub use flatten::{flatten, flatten_value, flatten_with_prefix, Flattener};
pub use node::{ErrorNode, FieldError, ParseError};
pub use path::{FieldPath, PathSegment, PathStyle};
