#![allow(dead_code)]

use nested_core::Node;

/// The reference tree most tests run against.
///
/// ```text
/// value:  42
/// array:  [142, "string in array"]
/// nested:
///   value:  "string"
///   nested: { value: "string in nested" }
///   array:  [{value: 242}, [{value: "string in nested array"}], {value: 1242}]
/// ```
pub fn sample() -> Node {
    Node::from_json_string(
        r#"{
            "value": 42,
            "array": [142, "string in array"],
            "nested": {
                "value": "string",
                "nested": {"value": "string in nested"},
                "array": [
                    {"value": 242},
                    [{"value": "string in nested array"}],
                    {"value": 1242}
                ]
            }
        }"#,
    )
}

/// Parse JSON text into a node, for building expected trees.
pub fn json(text: &str) -> Node {
    Node::from_json_string(text)
}

/// Assert two node lists are structurally equal, element by element.
pub fn assert_nodes_eq(actual: &[Node], expected: &[Node]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch:\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a, e, "element mismatch:\n  actual:   {a}\n  expected: {e}");
    }
}
