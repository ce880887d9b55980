//! The node handle and its shape.
//!
//! A [`Node`] is a shared handle (`Rc<RefCell<..>>`) to one of three shapes:
//! a scalar value, an ordered array of nodes, or a string-keyed map of nodes.
//! Cloning a `Node` clones the handle, not the tree. Storing a node under a
//! key or in an array therefore keeps it aliased: later mutations through
//! either handle are visible through both.
//!
//! Handles are single-threaded (`!Send`, `!Sync`). Callers that need to
//! share a tree across threads have to rebuild it behind their own lock.
//!
//! # Borrowing
//!
//! No method holds a `RefCell` borrow while it calls into another node or
//! into a caller-supplied closure, so aliased and even cyclic trees can be
//! navigated and mutated without borrow panics.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::Kind;
use crate::scalar::Scalar;

/// Internal representation. Exactly one shape is active at a time.
#[derive(Debug)]
pub(crate) enum Shape {
    Value(Scalar),
    Array(Vec<Node>),
    Map(HashMap<String, Node>),
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Map(HashMap::new())
    }
}

impl Shape {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Shape::Value(_) => Kind::Value,
            Shape::Array(_) => Kind::Array,
            Shape::Map(_) => Kind::Map,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Shape::Map(entries) if entries.is_empty())
    }
}

/// A dynamically-shaped tree value.
///
/// A fresh node is an empty map. See the module docs for aliasing rules.
///
/// ```
/// use nested_core::Node;
///
/// let root = Node::new();
/// root.set_value("value1", &["nested_object", "key1"]).unwrap();
/// root.set_array(vec![], &["nested_array"]).unwrap();
/// root.array_add_value("elem1", &["nested_array"]).unwrap();
///
/// assert_eq!(root.get_value(&["nested_object", "key1"]).unwrap(), "value1");
/// assert_eq!(
///     root.to_json_string(),
///     r#"{"nested_array":["elem1"],"nested_object":{"key1":"value1"}}"#
/// );
/// ```
#[derive(Clone, Default)]
pub struct Node(Rc<RefCell<Shape>>);

impl Node {
    /// Create an empty, map-shaped node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value-shaped node.
    pub fn value(value: impl Into<Scalar>) -> Self {
        Self::from_shape(Shape::Value(value.into()))
    }

    /// Create an array-shaped node holding `items` (aliased, not copied).
    pub fn array(items: Vec<Node>) -> Self {
        Self::from_shape(Shape::Array(items))
    }

    /// Create a map-shaped node holding `entries` (aliased, not copied).
    pub fn map(entries: HashMap<String, Node>) -> Self {
        Self::from_shape(Shape::Map(entries))
    }

    pub(crate) fn from_shape(shape: Shape) -> Self {
        Node(Rc::new(RefCell::new(shape)))
    }

    pub(crate) fn shape(&self) -> std::cell::Ref<'_, Shape> {
        self.0.borrow()
    }

    pub(crate) fn shape_mut(&self) -> std::cell::RefMut<'_, Shape> {
        self.0.borrow_mut()
    }

    /// Replace the active shape, returning the previous one.
    pub(crate) fn replace_shape(&self, shape: Shape) -> Shape {
        self.0.replace(shape)
    }

    /// The current shape.
    pub fn kind(&self) -> Kind {
        self.shape().kind()
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    pub fn is_value(&self) -> bool {
        self.kind() == Kind::Value
    }

    /// True for map-shaped nodes, including the empty node.
    pub fn is_map(&self) -> bool {
        self.kind() == Kind::Map
    }

    /// True for a map-shaped node with no entries.
    pub fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }

    /// Element count for arrays, key count for maps, `-1` for values.
    pub fn length(&self) -> isize {
        match &*self.shape() {
            Shape::Value(_) => -1,
            Shape::Array(items) => items.len() as isize,
            Shape::Map(entries) => entries.len() as isize,
        }
    }

    /// True if both handles point at the same node.
    pub fn ptr_eq(a: &Node, b: &Node) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Reset this node to the empty map, clearing every former child first.
    ///
    /// Children are cleared even when other handles still reach them; those
    /// handles observe empty nodes afterwards. The old shape is detached
    /// before recursing, so clearing a cyclic tree terminates and clearing an
    /// already empty node is a no-op.
    pub fn clear(&self) {
        match self.replace_shape(Shape::default()) {
            Shape::Value(_) => {}
            Shape::Array(items) => items.iter().for_each(Node::clear),
            Shape::Map(entries) => entries.values().for_each(Node::clear),
        }
    }

    /// Copy the whole subtree into fresh, unaliased nodes.
    ///
    /// Scalars are copied as stored; no numeric narrowing is applied.
    pub fn deep_clone(&self) -> Node {
        let shape = match &*self.shape() {
            Shape::Value(value) => Shape::Value(value.clone()),
            Shape::Array(items) => Shape::Array(items.iter().map(Node::deep_clone).collect()),
            Shape::Map(entries) => Shape::Map(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.deep_clone()))
                    .collect(),
            ),
        };
        Node::from_shape(shape)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::value(value)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.shape() {
            Shape::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Shape::Array(items) => f.debug_list().entries(items).finish(),
            Shape::Map(entries) => f.debug_map().entries(entries).finish(),
        }
    }
}
