//! # nested-core
//!
//! A dynamically-shaped tree value for working with JSON-like data without
//! falling back to untyped maps.
//!
//! A [`Node`] is either a scalar value, an ordered array of nodes, or a
//! string-keyed map of nodes. Nodes are shared handles: storing a node under
//! a key keeps it aliased, and changes made through any handle are visible
//! through all of them.
//!
//! ## Quick start
//!
//! ```rust
//! use nested_core::{Node, Scalar};
//!
//! let node = Node::from_json_string(r#"{"name":"Alice","scores":[95,87]}"#);
//! node.array_add_value(92, &["scores"]).unwrap();
//! node.set_value(true, &["meta", "active"]).unwrap();
//!
//! assert_eq!(node.get_value(&["meta", "active"]).unwrap(), Scalar::Bool(true));
//! assert_eq!(
//!     node.to_json_string(),
//!     r#"{"meta":{"active":true},"name":"Alice","scores":[95,87,92]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`node`]: the `Node` handle, shape checks, `clear`
//! - [`path`]: `get` / `set` / `delete` along key chains
//! - [`accessors`]: typed value, map and array access
//! - [`array`]: append, predicate search and predicate delete
//! - [`convert`]: `Object`, JSON text and `serde_json::Value` conversion
//! - [`scalar`]: scalar payloads
//! - [`error`]: `NodeError` and path-prefixed messages
//!
//! Nodes are not thread-safe. Wrap a whole tree in a lock if it has to be
//! shared.

pub mod accessors;
pub mod array;
pub mod convert;
pub mod error;
pub mod node;
pub mod path;
pub mod scalar;

pub use convert::{equals, Object, MAX_DEPTH};
pub use error::{Kind, NodeError, Result};
pub use node::Node;
pub use scalar::Scalar;
