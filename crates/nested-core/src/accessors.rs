//! Typed accessors layered on top of key-chain navigation.
//!
//! Every accessor accepts an optional key chain. An empty chain addresses
//! the receiver itself; otherwise the chain is resolved with [`Node::get`]
//! (reads) or [`Node::set`] (writes) and the destination shape is checked.

use std::collections::HashMap;

use crate::error::{Kind, NodeError, Result};
use crate::node::{Node, Shape};
use crate::scalar::Scalar;

impl Node {
    /// Read the scalar stored at `keys`, or held by this node when `keys`
    /// is empty.
    pub fn get_value(&self, keys: &[&str]) -> Result<Scalar> {
        match &*self.shape() {
            shape if shape.is_empty() => return Err(NodeError::Empty),
            Shape::Array(_) => return Err(NodeError::WrongShape(Kind::Array)),
            Shape::Value(value) if keys.is_empty() => return Ok(value.clone()),
            Shape::Map(_) if keys.is_empty() => return Err(NodeError::WrongShape(Kind::Map)),
            _ => {}
        }

        let node = self.get(keys)?;
        let shape = node.shape();
        match &*shape {
            Shape::Value(value) => Ok(value.clone()),
            other => Err(NodeError::shape_at(keys, other.kind())),
        }
    }

    /// Store a scalar at `keys`.
    ///
    /// With no keys an empty or value-shaped node turns into the value in
    /// place; any other receiver needs a key chain.
    pub fn set_value(&self, value: impl Into<Scalar>, keys: &[&str]) -> Result<()> {
        let value = value.into();
        if keys.is_empty() {
            let mut shape = self.shape_mut();
            if shape.is_empty() || matches!(*shape, Shape::Value(_)) {
                *shape = Shape::Value(value);
                return Ok(());
            }
        }
        self.set(Node::value(value), keys)
    }

    /// Read the entries of the map stored at `keys`.
    ///
    /// The returned handles alias the stored children.
    pub fn get_map(&self, keys: &[&str]) -> Result<HashMap<String, Node>> {
        match &*self.shape() {
            Shape::Map(entries) if keys.is_empty() => return Ok(entries.clone()),
            Shape::Map(_) => {}
            other => return Err(NodeError::WrongShape(other.kind())),
        }

        let node = self.get(keys)?;
        let shape = node.shape();
        match &*shape {
            Shape::Map(entries) => Ok(entries.clone()),
            other => Err(NodeError::shape_at(keys, other.kind())),
        }
    }

    /// Store a map at `keys`.
    ///
    /// With no keys a map-shaped receiver swaps its entries for `entries`.
    /// Former children are not cleared, so outside handles to them stay
    /// valid.
    pub fn set_map(&self, entries: HashMap<String, Node>, keys: &[&str]) -> Result<()> {
        if keys.is_empty() {
            if let Shape::Map(current) = &mut *self.shape_mut() {
                *current = entries;
                return Ok(());
            }
        }
        self.set(Node::map(entries), keys)
    }

    /// Read the elements of the array stored at `keys`.
    ///
    /// The returned handles alias the stored elements.
    pub fn get_array(&self, keys: &[&str]) -> Result<Vec<Node>> {
        let node = self.resolve_array(keys)?;
        let shape = node.shape();
        match &*shape {
            Shape::Array(items) => Ok(items.clone()),
            other => Err(NodeError::WrongShape(other.kind())),
        }
    }

    /// Store an array at `keys`.
    ///
    /// With no keys an empty or array-shaped node takes `items` in place.
    pub fn set_array(&self, items: Vec<Node>, keys: &[&str]) -> Result<()> {
        if keys.is_empty() {
            let mut shape = self.shape_mut();
            if shape.is_empty() || matches!(*shape, Shape::Array(_)) {
                *shape = Shape::Array(items);
                return Ok(());
            }
        }
        self.set(Node::array(items), keys)
    }

    /// Resolve the array-shaped node addressed by `keys`.
    pub(crate) fn resolve_array(&self, keys: &[&str]) -> Result<Node> {
        match &*self.shape() {
            shape if shape.is_empty() => return Err(NodeError::Empty),
            Shape::Value(_) => return Err(NodeError::WrongShape(Kind::Value)),
            Shape::Array(_) if keys.is_empty() => return Ok(self.clone()),
            Shape::Map(_) if keys.is_empty() => return Err(NodeError::WrongShape(Kind::Map)),
            _ => {}
        }

        let node = self.get(keys)?;
        let kind = node.kind();
        if kind == Kind::Array {
            Ok(node)
        } else {
            Err(NodeError::shape_at(keys, kind))
        }
    }
}
