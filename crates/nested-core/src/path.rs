//! Key-chain navigation: `get`, `set` and `delete`.
//!
//! Only map-shaped nodes can be descended into. Errors raised below the
//! first key are wrapped with the key that was traversed: `"<key>: <err>"`
//! when a single key remained after the hop, `"<key>.<err>"` otherwise.

use crate::error::{Kind, NodeError, Result};
use crate::node::{Node, Shape};

impl Node {
    /// Resolve a key chain to the node stored at its end.
    ///
    /// Fails with [`NodeError::EmptyKeyChain`] for an empty chain,
    /// [`NodeError::WrongShape`] when a node along the way is a value or an
    /// array, and [`NodeError::KeyNotFound`] for a missing key.
    pub fn get(&self, keys: &[&str]) -> Result<Node> {
        let (first, rest) = keys.split_first().ok_or(NodeError::EmptyKeyChain)?;
        let child = self.child(first)?;
        if rest.is_empty() {
            return Ok(child);
        }
        child
            .get(rest)
            .map_err(|err| NodeError::descended(first, rest.len(), err))
    }

    /// Store `node` at the end of a key chain, replacing what was there.
    ///
    /// Missing intermediate keys are filled with new empty nodes. The stored
    /// handle is aliased, not copied.
    pub fn set(&self, node: Node, keys: &[&str]) -> Result<()> {
        let (first, rest) = keys.split_first().ok_or(NodeError::EmptyKeyChain)?;
        let child = {
            let mut shape = self.shape_mut();
            let entries = match &mut *shape {
                Shape::Map(entries) => entries,
                other => return Err(NodeError::WrongShape(other.kind())),
            };
            if rest.is_empty() {
                entries.insert(first.to_string(), node);
                return Ok(());
            }
            entries.entry(first.to_string()).or_default().clone()
        };
        child
            .set(node, rest)
            .map_err(|err| NodeError::descended(first, rest.len(), err))
    }

    /// Remove the node at the end of a key chain and clear it.
    ///
    /// Everything up to the last key must resolve like [`Node::get`]; an
    /// absent last key is not an error.
    pub fn delete(&self, keys: &[&str]) -> Result<()> {
        let (last, parents) = keys.split_last().ok_or(NodeError::EmptyKeyChain)?;
        if let Some(kind) = self.non_map_kind() {
            return Err(NodeError::WrongShape(kind));
        }
        let parent = if parents.is_empty() {
            self.clone()
        } else {
            let parent = self.get(parents)?;
            if let Some(kind) = parent.non_map_kind() {
                return Err(NodeError::shape_at(parents, kind));
            }
            parent
        };

        let removed = match &mut *parent.shape_mut() {
            Shape::Map(entries) => entries.remove(*last),
            _ => None,
        };
        match removed {
            Some(node) => node.clear(),
            None => tracing::trace!(key = *last, "key not present, nothing to delete"),
        }
        Ok(())
    }

    /// Look up a direct child of a map-shaped node.
    fn child(&self, key: &str) -> Result<Node> {
        match &*self.shape() {
            Shape::Map(entries) => entries
                .get(key)
                .cloned()
                .ok_or_else(|| NodeError::KeyNotFound(key.to_string())),
            other => Err(NodeError::WrongShape(other.kind())),
        }
    }

    pub(crate) fn non_map_kind(&self) -> Option<Kind> {
        match self.kind() {
            Kind::Map => None,
            kind => Some(kind),
        }
    }
}
