//! Error types for node navigation and typed access.
//!
//! Leaf errors describe what went wrong at a single node. Path wrappers
//! ([`NodeError::At`], [`NodeError::Within`]) prefix a leaf error with the
//! keys traversed before it was raised, so the rendered message names the
//! failing segment, e.g. `nested.nested: key 'somekey' not found`.

use std::fmt;

use thiserror::Error;

/// The shape a node currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Scalar value.
    Value,
    /// Ordered sequence of nodes.
    Array,
    /// String-keyed mapping of nodes. The empty node is map-shaped.
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Value => "value",
            Kind::Array => "array",
            Kind::Map => "nested",
        };
        f.write_str(name)
    }
}

/// Errors returned by node operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    /// An operation that needs a key chain received none.
    #[error("keys list must contain at least one key")]
    EmptyKeyChain,

    /// The node has a shape the operation cannot work with.
    #[error("is {0}")]
    WrongShape(Kind),

    /// A no-key read hit an empty map-shaped node.
    #[error("is empty")]
    Empty,

    /// A required map key is absent.
    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// `source` was raised at `path`, the last segment before it.
    #[error("{path}: {source}")]
    At {
        path: String,
        source: Box<NodeError>,
    },

    /// `source` was raised below `key`, with more than one key remaining.
    #[error("{key}.{source}")]
    Within {
        key: String,
        source: Box<NodeError>,
    },
}

impl NodeError {
    /// Wrap an error raised after descending through `key`, where
    /// `remaining` keys were still left to resolve.
    pub(crate) fn descended(key: &str, remaining: usize, source: NodeError) -> Self {
        if remaining == 1 {
            NodeError::At {
                path: key.to_string(),
                source: Box::new(source),
            }
        } else {
            NodeError::Within {
                key: key.to_string(),
                source: Box::new(source),
            }
        }
    }

    /// Report a wrong-shaped destination found at the end of `keys`.
    pub(crate) fn shape_at(keys: &[&str], kind: Kind) -> Self {
        NodeError::At {
            path: keys.join("."),
            source: Box::new(NodeError::WrongShape(kind)),
        }
    }

    /// The innermost error, with all path wrappers removed.
    pub fn root_cause(&self) -> &NodeError {
        match self {
            NodeError::At { source, .. } | NodeError::Within { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }

    /// The dotted key path in front of the root cause, if any.
    pub fn path(&self) -> Option<String> {
        let (head, source) = match self {
            NodeError::At { path, source } => (path, source),
            NodeError::Within { key, source } => (key, source),
            _ => return None,
        };
        Some(match source.path() {
            Some(rest) => format!("{head}.{rest}"),
            None => head.clone(),
        })
    }

    /// Check if no key chain was supplied
    pub fn is_empty_key_chain(&self) -> bool {
        matches!(self.root_cause(), NodeError::EmptyKeyChain)
    }

    /// Check if a node had an incompatible shape
    pub fn is_wrong_shape(&self) -> bool {
        matches!(self.root_cause(), NodeError::WrongShape(_))
    }

    /// Check if an empty node was read
    pub fn is_empty(&self) -> bool {
        matches!(self.root_cause(), NodeError::Empty)
    }

    /// Check if a key lookup failed
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), NodeError::KeyNotFound(_))
    }

    /// The offending shape, if this is a shape error.
    pub fn kind(&self) -> Option<Kind> {
        match self.root_cause() {
            NodeError::WrongShape(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Convenience alias used throughout nested-core.
pub type Result<T> = std::result::Result<T, NodeError>;
