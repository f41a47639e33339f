//! Dotted-key flattening module
//!
//! Converts an arbitrarily nested JSON object into a flat ordered map of
//! dotted-path keys to leaf values, for tabular display. Key order follows
//! the source object's own enumeration order (serde_json `preserve_order`).

use serde_json::{Map, Value};

/// Shape of a value from the flattener's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Primitive: string, number, bool, null
    Scalar,
    /// Object or array with at least one element
    Composite,
    /// Object or array with no elements; kept as a leaf, never recursed into
    EmptyComposite,
}

pub fn shape_of(value: &Value) -> ValueShape {
    match value {
        Value::Object(map) if !map.is_empty() => ValueShape::Composite,
        Value::Array(items) if !items.is_empty() => ValueShape::Composite,
        Value::Object(_) | Value::Array(_) => ValueShape::EmptyComposite,
        _ => ValueShape::Scalar,
    }
}

/// Flatten a JSON object into dotted-path keys.
///
/// `flatten(&{a: 1, b: {c: 2, d: {}}})` yields `{a: 1, "b.c": 2, "b.d": {}}`.
/// Arrays are composites too and flatten with their index as the key segment.
pub fn flatten(map: &Map<String, Value>) -> Map<String, Value> {
    flatten_with_prefix(map, "")
}

pub fn flatten_with_prefix(map: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    let mut result = Map::new();
    for (key, value) in map {
        let full_key = join_key(prefix, key);
        insert_flattened(&mut result, full_key, value);
    }
    result
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn insert_flattened(result: &mut Map<String, Value>, full_key: String, value: &Value) {
    match shape_of(value) {
        ValueShape::Composite => match value {
            Value::Object(inner) => {
                // Later keys overwrite earlier ones on collision; unique
                // dotted paths make collisions impossible in practice
                result.extend(flatten_with_prefix(inner, &full_key));
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    insert_flattened(result, join_key(&full_key, &idx.to_string()), item);
                }
            }
            _ => unreachable!("composite shape is only assigned to objects and arrays"),
        },
        ValueShape::Scalar | ValueShape::EmptyComposite => {
            result.insert(full_key, value.clone());
        }
    }
}
