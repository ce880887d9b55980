//! Array mutation and predicate search.
//!
//! The target array is resolved like [`Node::get_array`] and reports the
//! same errors. Predicates run over a snapshot of the element handles, so a
//! predicate may read (or even mutate) the tree it is searching.

use crate::error::{Kind, NodeError, Result};
use crate::node::{Node, Shape};
use crate::scalar::Scalar;

impl Node {
    /// Append `element` to the array at `keys`.
    ///
    /// With no keys the receiver itself must be an array; an empty node
    /// becomes a one-element array. Unlike [`Node::set`], missing keys are
    /// never created.
    pub fn array_add(&self, element: Node, keys: &[&str]) -> Result<()> {
        if keys.is_empty() {
            let mut shape = self.shape_mut();
            if shape.is_empty() {
                *shape = Shape::Array(vec![element]);
                return Ok(());
            }
            return match &mut *shape {
                Shape::Array(items) => {
                    items.push(element);
                    Ok(())
                }
                other => Err(NodeError::WrongShape(other.kind())),
            };
        }

        match &*self.shape() {
            shape if shape.is_empty() => return Err(NodeError::Empty),
            Shape::Array(_) => return Err(NodeError::WrongShape(Kind::Array)),
            _ => {}
        }

        let target = self.get(keys)?;
        let mut shape = target.shape_mut();
        match &mut *shape {
            Shape::Array(items) => {
                items.push(element);
                Ok(())
            }
            other => Err(NodeError::shape_at(keys, other.kind())),
        }
    }

    /// Append a new value node holding `value`.
    pub fn array_add_value(&self, value: impl Into<Scalar>, keys: &[&str]) -> Result<()> {
        self.array_add(Node::value(value), keys)
    }

    /// Append a new array node holding `items`.
    pub fn array_add_array(&self, items: Vec<Node>, keys: &[&str]) -> Result<()> {
        self.array_add(Node::array(items), keys)
    }

    /// First element matching `predicate`, in array order.
    ///
    /// Returns `Ok(None)` when nothing matches, including for empty arrays.
    pub fn array_find_one<F>(&self, mut predicate: F, keys: &[&str]) -> Result<Option<Node>>
    where
        F: FnMut(&Node) -> bool,
    {
        let items = self.get_array(keys)?;
        Ok(items.into_iter().find(|item| predicate(item)))
    }

    /// Every element matching `predicate`, in array order.
    pub fn array_find_all<F>(&self, mut predicate: F, keys: &[&str]) -> Result<Vec<Node>>
    where
        F: FnMut(&Node) -> bool,
    {
        let items = self.get_array(keys)?;
        Ok(items.into_iter().filter(|item| predicate(item)).collect())
    }

    /// Remove every element matching `predicate`.
    ///
    /// The predicate sees every element before anything is removed. Removed
    /// elements are cleared; survivors keep their relative order and are
    /// written back into the resolved array node, so other handles to that
    /// array observe the removal.
    pub fn array_delete<F>(&self, mut predicate: F, keys: &[&str]) -> Result<()>
    where
        F: FnMut(&Node) -> bool,
    {
        let target = self.resolve_array(keys)?;
        let items = target.get_array(&[])?;
        let (removed, kept): (Vec<Node>, Vec<Node>) =
            items.into_iter().partition(|item| predicate(item));

        tracing::debug!(
            removed = removed.len(),
            remaining = kept.len(),
            "deleted matching array elements"
        );

        target.set_array(kept, &[])?;
        removed.iter().for_each(Node::clear);
        Ok(())
    }
}
