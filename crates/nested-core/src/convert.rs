//! Conversion between nodes, generic objects and JSON text.
//!
//! [`Object`] is the plain, unaliased counterpart of a node tree. It is what
//! the structural operations work on:
//!
//! - `from_object` builds a node tree, narrowing integral floats to `Int`
//! - `to_object` snapshots a node tree
//! - `to_json_string` writes compact JSON with map keys in sorted order;
//!   floats with no fractional part that fit `i64` are written as integers
//! - `equals` compares two snapshots, type-sensitively
//!
//! # JSON parsing
//!
//! `from_json_string` accepts objects and arrays. Everything else falls
//! back to a scalar inferred from the raw text, in this order: `i64`,
//! `f64`, boolean, and finally the text itself. Nesting is accepted up to
//! [`MAX_DEPTH`] levels; deeper documents are not valid input.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::node::{Node, Shape};
use crate::scalar::Scalar;

/// A generic, unaliased tree value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Scalar(Scalar),
    Array(Vec<Object>),
    Map(HashMap<String, Object>),
}

impl Default for Object {
    fn default() -> Self {
        Object::Map(HashMap::new())
    }
}

impl From<Scalar> for Object {
    fn from(value: Scalar) -> Self {
        Object::Scalar(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::Array(items)
    }
}

impl From<HashMap<String, Object>> for Object {
    fn from(entries: HashMap<String, Object>) -> Self {
        Object::Map(entries)
    }
}

impl From<Value> for Object {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Object::Scalar(Scalar::Null),
            Value::Bool(b) => Object::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Object::Scalar(number_to_scalar(&n)),
            Value::String(s) => Object::Scalar(Scalar::String(s)),
            Value::Array(items) => Object::Array(items.into_iter().map(Object::from).collect()),
            Value::Object(entries) => Object::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Object::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        match object {
            Object::Scalar(scalar) => scalar_to_value(scalar),
            Object::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Object::Map(entries) => {
                let mut sorted: Vec<(String, Object)> = entries.into_iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                Value::Object(
                    sorted
                        .into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                )
            }
        }
    }
}

fn number_to_scalar(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::Uint(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn scalar_to_value(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::Int(i) => Value::from(i),
        Scalar::Uint(u) => Value::from(u),
        // Non-finite floats have no JSON form.
        Scalar::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        Scalar::String(s) => Value::String(s),
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Whole-number floats print without a fractional part.
            Object::Scalar(Scalar::Float(f)) => match Scalar::Float(*f).narrowed() {
                Scalar::Int(i) => serializer.serialize_i64(i),
                _ => serializer.serialize_f64(*f),
            },
            Object::Scalar(scalar) => scalar.serialize(serializer),
            Object::Array(items) => serializer.collect_seq(items),
            Object::Map(entries) => {
                let mut sorted: Vec<(&String, &Object)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(b.0));
                let mut map = serializer.serialize_map(Some(sorted.len()))?;
                for (key, value) in sorted {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Deepest array/object nesting accepted when deserializing.
pub const MAX_DEPTH: usize = 10_000;

/// Deserializes one `Object` at a known nesting depth.
#[derive(Clone, Copy)]
struct ObjectSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ObjectSeed {
    type Value = Object;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Object, D::Error> {
        deserializer.deserialize_any(ObjectVisitor { depth: self.depth })
    }
}

struct ObjectVisitor {
    depth: usize,
}

impl ObjectVisitor {
    fn child<E: de::Error>(&self) -> Result<ObjectSeed, E> {
        if self.depth >= MAX_DEPTH {
            return Err(E::custom(format!("nesting deeper than {MAX_DEPTH} levels")));
        }
        Ok(ObjectSeed {
            depth: self.depth + 1,
        })
    }
}

impl<'de> Visitor<'de> for ObjectVisitor {
    type Value = Object;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, a sequence or a string-keyed map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Object, D::Error> {
        ObjectSeed { depth: self.depth }.deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::Bool(b)))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::Int(i)))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Object, E> {
        // Same policy as JSON numbers: prefer Int whenever it fits.
        Ok(Object::Scalar(match i64::try_from(u) {
            Ok(i) => Scalar::Int(i),
            Err(_) => Scalar::Uint(u),
        }))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::Float(f)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::String(s.to_string())))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Object, E> {
        Ok(Object::Scalar(Scalar::String(s)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Object, A::Error> {
        let seed = self.child()?;
        let mut items: Vec<Object> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(seed)? {
            items.push(item);
        }
        Ok(Object::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Object, A::Error> {
        let seed = self.child()?;
        let mut entries = HashMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value_seed(seed)?;
            entries.insert(key, value);
        }
        Ok(Object::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ObjectSeed { depth: 0 }.deserialize(deserializer)
    }
}

/// Parse a complete JSON document.
///
/// serde_json's own recursion limit is lifted in favor of [`MAX_DEPTH`];
/// the stack grows on demand while deeply nested input is read.
fn parse_document(json: &str) -> serde_json::Result<Object> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let object = Object::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(object)
}

impl Node {
    /// Build a node tree from a generic object.
    ///
    /// Maps become map nodes, sequences become array nodes, and everything
    /// else becomes a value node. A float with no fractional part is stored
    /// as `Int`.
    pub fn from_object(object: Object) -> Node {
        match object {
            Object::Scalar(scalar) => Node::value(scalar.narrowed()),
            Object::Array(items) => Node::array(items.into_iter().map(Node::from_object).collect()),
            Object::Map(entries) => Node::map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Node::from_object(value)))
                    .collect(),
            ),
        }
    }

    /// Build a node tree from JSON text.
    ///
    /// Objects and arrays are converted with [`Node::from_object`]; a bare
    /// `null` yields an empty node. Any other input, valid JSON or not,
    /// becomes a value node inferred from the raw text.
    ///
    /// ```
    /// use nested_core::{Node, Scalar};
    ///
    /// assert_eq!(Node::from_json_string("42").get_value(&[]).unwrap(), Scalar::Int(42));
    /// assert_eq!(Node::from_json_string("42.5").get_value(&[]).unwrap(), Scalar::Float(42.5));
    /// assert_eq!(Node::from_json_string("[[4, 5]").get_value(&[]).unwrap(), "[[4, 5]");
    /// assert!(Node::from_json_string(r#"{"a": [1, 2]}"#).is_map());
    /// ```
    pub fn from_json_string(json: &str) -> Node {
        match parse_document(json) {
            Ok(object @ (Object::Map(_) | Object::Array(_))) => Node::from_object(object),
            Ok(Object::Scalar(Scalar::Null)) => Node::new(),
            _ => {
                tracing::debug!(
                    input_len = json.len(),
                    "input is not a JSON object or array, inferring a scalar"
                );
                Node::value(infer_scalar(json))
            }
        }
    }

    /// Build a node tree from a `serde_json::Value`.
    pub fn from_value(value: Value) -> Node {
        Node::from_object(Object::from(value))
    }

    /// Snapshot this tree as a generic object.
    pub fn to_object(&self) -> Object {
        match &*self.shape() {
            Shape::Value(value) => Object::Scalar(value.clone()),
            Shape::Array(items) => Object::Array(items.iter().map(Node::to_object).collect()),
            Shape::Map(entries) => Object::Map(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_object()))
                    .collect(),
            ),
        }
    }

    /// Snapshot this tree as a `serde_json::Value` with sorted map keys.
    pub fn to_value(&self) -> Value {
        Value::from(self.to_object())
    }

    /// Serialize to compact JSON with map keys in sorted order.
    ///
    /// A bare string value is written without its surrounding quotes, so
    /// every scalar renders the way it would be typed.
    pub fn to_json_string(&self) -> String {
        let object = self.to_object();
        match serde_json::to_string(&object) {
            Ok(json) if matches!(object, Object::Scalar(Scalar::String(_))) => {
                strip_quotes(&json).to_string()
            }
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize node");
                String::new()
            }
        }
    }
}

/// Deep structural equality.
///
/// Scalars must match in type as well as value, arrays must match in
/// order; map key order is irrelevant.
pub fn equals(a: &Node, b: &Node) -> bool {
    a.to_object() == b.to_object()
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl From<Object> for Node {
    fn from(object: Object) -> Self {
        Node::from_object(object)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Object::deserialize(deserializer).map(Node::from_object)
    }
}

fn strip_quotes(json: &str) -> &str {
    json.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(json)
}

/// Infer a scalar from text that is not a JSON object or array.
fn infer_scalar(raw: &str) -> Scalar {
    if let Ok(i) = raw.parse::<i64>() {
        Scalar::Int(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        Scalar::Float(f)
    } else if let Some(b) = parse_bool(raw) {
        Scalar::Bool(b)
    } else {
        Scalar::String(raw.to_string())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
