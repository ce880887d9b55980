mod common;

use common::{json, sample};
use nested_core::{Kind, Node, NodeError, Scalar};

fn err_string<T: std::fmt::Debug>(result: Result<T, NodeError>) -> String {
    result.unwrap_err().to_string()
}

// ============================================================================
// Get
// ============================================================================

#[test]
fn get_missing_keys_report_path() {
    let node = sample();
    assert_eq!(err_string(node.get(&["somekey"])), "key 'somekey' not found");
    assert_eq!(
        err_string(node.get(&["nested", "somekey"])),
        "nested: key 'somekey' not found"
    );
    assert_eq!(
        err_string(node.get(&["nested", "nested", "somekey"])),
        "nested.nested: key 'somekey' not found"
    );
}

#[test]
fn get_requires_keys() {
    let err = sample().get(&[]).unwrap_err();
    assert_eq!(err, NodeError::EmptyKeyChain);
    assert_eq!(err.to_string(), "keys list must contain at least one key");
}

#[test]
fn get_cannot_descend_into_arrays_or_values() {
    let node = sample();
    assert_eq!(err_string(node.get(&["array", "somekey"])), "array: is array");
    assert_eq!(
        err_string(node.get(&["nested", "nested", "value", "somekey"])),
        "nested.nested.value: is value"
    );
}

#[test]
fn get_on_array_or_value_receiver() {
    assert_eq!(err_string(Node::array(vec![]).get(&["nested"])), "is array");
    assert_eq!(err_string(Node::value(42).get(&["nested"])), "is value");
}

#[test]
fn get_returns_nodes_of_every_shape() {
    let node = sample();

    let value = node.get(&["nested", "nested", "value"]).unwrap();
    assert_eq!(value.get_value(&[]).unwrap(), "string in nested");

    let value = node.get(&["value"]).unwrap();
    assert!(value.is_value());
    assert_eq!(value.get_value(&[]).unwrap(), Scalar::Int(42));

    let array = node.get(&["array"]).unwrap();
    assert!(array.is_array());
    assert_eq!(array.length(), 2);

    let nested = node.get(&["nested"]).unwrap();
    assert!(nested.is_map());
    assert_eq!(nested.length(), 3);

    let nested = node.get(&["nested", "nested"]).unwrap();
    assert!(nested.is_map());
    assert_eq!(nested.length(), 1);
}

#[test]
fn get_errors_expose_structure() {
    let err = sample().get(&["nested", "nested", "somekey"]).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path().as_deref(), Some("nested.nested"));
    assert_eq!(
        err.root_cause(),
        &NodeError::KeyNotFound("somekey".to_string())
    );

    let err = sample().get(&["array", "x"]).unwrap_err();
    assert!(err.is_wrong_shape());
    assert_eq!(err.kind(), Some(Kind::Array));
}

#[test]
fn error_path_survives_empty_keys() {
    let node = Node::new();
    node.set_value(1, &["", "y"]).unwrap();

    let err = node.get(&["", "x"]).unwrap_err();
    assert_eq!(err.to_string(), ": key 'x' not found");
    assert_eq!(err.path().as_deref(), Some(""));

    let err = node.get(&["", "y", "z"]).unwrap_err();
    assert_eq!(err.to_string(), ".y: is value");
    assert_eq!(err.path().as_deref(), Some(".y"));
}

// ============================================================================
// Set
// ============================================================================

fn new_subtree() -> Node {
    json(r#"{"value": "string in new nested", "nested": {"value": 1042}}"#)
}

#[test]
fn set_requires_keys() {
    assert_eq!(
        err_string(sample().set(new_subtree(), &[])),
        "keys list must contain at least one key"
    );
}

#[test]
fn set_refuses_wrong_shaped_intermediates() {
    let node = sample();
    assert_eq!(
        err_string(node.set(new_subtree(), &["array", "somekey"])),
        "array: is array"
    );
    assert_eq!(
        err_string(node.set(new_subtree(), &["nested", "nested", "value", "somekey"])),
        "nested.nested.value: is value"
    );
}

#[test]
fn set_stores_under_new_key() {
    let node = sample();
    node.set(new_subtree(), &["somekey"]).unwrap();

    assert_eq!(
        node.get_value(&["somekey", "nested", "value"]).unwrap(),
        Scalar::Int(1042)
    );
    assert_eq!(
        node.get_value(&["somekey", "value"]).unwrap(),
        "string in new nested"
    );
}

#[test]
fn set_stores_deep_under_existing_maps() {
    let node = sample();
    node.set(new_subtree(), &["nested", "nested", "somekey"]).unwrap();

    assert_eq!(
        node.get_value(&["nested", "nested", "somekey", "nested", "value"])
            .unwrap(),
        Scalar::Int(1042)
    );
    assert_eq!(node.get(&["nested", "nested"]).unwrap().length(), 2);
}

#[test]
fn set_creates_missing_intermediates() {
    let node = Node::new();
    node.set(new_subtree(), &["nested", "nested", "somekey"]).unwrap();

    let first = node.get(&["nested"]).unwrap();
    let second = node.get(&["nested", "nested"]).unwrap();
    assert!(first.is_map() && !first.is_empty());
    assert!(second.is_map() && !second.is_empty());
    assert_eq!(
        node.get_value(&["nested", "nested", "somekey", "value"])
            .unwrap(),
        "string in new nested"
    );
}

#[test]
fn set_value_auto_creates_path() {
    let node = Node::new();
    node.set_value(5, &["a", "b", "c"]).unwrap();

    let leaf = node.get(&["a", "b", "c"]).unwrap();
    assert_eq!(leaf.get_value(&[]).unwrap(), Scalar::Int(5));
    assert!(node.get(&["a"]).unwrap().is_map());
    assert!(!node.get(&["a", "b"]).unwrap().is_empty());
}

#[test]
fn set_through_value_is_a_shape_error_at_that_key() {
    let node = Node::new();
    node.set_value(1, &["x"]).unwrap();

    let err = node.set_value(2, &["x", "y"]).unwrap_err();

    assert!(err.is_wrong_shape());
    assert_eq!(err.kind(), Some(Kind::Value));
    assert_eq!(err.path().as_deref(), Some("x"));
    assert_eq!(err.to_string(), "x: is value");
}

#[test]
fn set_on_array_or_value_receiver() {
    assert_eq!(err_string(Node::value(1).set(Node::new(), &["k"])), "is value");
    assert_eq!(err_string(Node::array(vec![]).set(Node::new(), &["k"])), "is array");
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_requires_keys() {
    assert_eq!(
        err_string(sample().delete(&[])),
        "keys list must contain at least one key"
    );
}

#[test]
fn delete_reports_missing_and_wrong_shaped_parents() {
    let node = sample();
    assert_eq!(
        err_string(node.delete(&["somekey", "nested"])),
        "key 'somekey' not found"
    );
    assert_eq!(
        err_string(node.delete(&["nested", "array", "somekey"])),
        "nested.array: is array"
    );
    assert_eq!(
        err_string(node.delete(&["nested", "value", "somekey"])),
        "nested.value: is value"
    );
    assert_eq!(err_string(node.delete(&["array", "somekey"])), "array: is array");
    assert_eq!(err_string(node.delete(&["value", "somekey"])), "value: is value");
}

#[test]
fn delete_removes_nested_entries() {
    let node = sample();

    node.delete(&["nested", "nested", "value"]).unwrap();
    assert!(node.get(&["nested", "nested"]).unwrap().is_empty());

    node.delete(&["nested", "value"]).unwrap();
    assert!(node.get(&["nested", "nested"]).is_ok());
    assert!(node.get(&["nested", "array"]).is_ok());
    assert_eq!(
        err_string(node.get(&["nested", "value"])),
        "nested: key 'value' not found"
    );
}

#[test]
fn delete_on_array_or_value_receiver() {
    assert_eq!(err_string(Node::value(42).delete(&["somekey"])), "is value");
    assert_eq!(err_string(Node::array(vec![]).delete(&["somekey"])), "is array");
}

#[test]
fn delete_of_absent_last_key_is_a_no_op() {
    let node = json(r#"{"value1": 142, "value2": 242}"#);

    node.delete(&["somekey"]).unwrap();
    assert_eq!(node.length(), 2);

    node.delete(&["value1"]).unwrap();
    assert_eq!(node, json(r#"{"value2": 242}"#));
}

#[test]
fn delete_clears_the_removed_node() {
    let node = sample();
    let removed = node.get(&["nested", "nested"]).unwrap();

    node.delete(&["nested", "nested"]).unwrap();

    assert!(removed.is_empty());
    assert!(node.get(&["nested", "nested"]).unwrap_err().is_not_found());
}
