//! Value classification and the two equality policies.
//!
//! The engine operates on `serde_json::Value`, treated as a closed variant of
//! three structural kinds: primitives (null, booleans, numbers, strings),
//! mappings (objects), and sequences (arrays). All comparator logic pattern
//! matches on this classification rather than inspecting values ad hoc.

use serde_json::Value;

/// The structural kind of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Null, boolean, number, or string.
    Primitive,
    /// An object: unique string keys, order irrelevant for comparison.
    Mapping,
    /// An array: ordered and index-addressable.
    Sequence,
}

/// Classify a value into its structural kind.
pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Object(_) => ValueKind::Mapping,
        Value::Array(_) => ValueKind::Sequence,
        _ => ValueKind::Primitive,
    }
}

/// Returns `true` if the value is not a container.
pub fn is_primitive(value: &Value) -> bool {
    value_kind(value) == ValueKind::Primitive
}

/// Full recursive structural equality.
///
/// Mappings are equal iff they have the same key set and recursively equal
/// values; sequences iff they have the same length and pairwise equal
/// elements; primitives iff their values are identical. Integer and float
/// number representations compare unequal (`1 != 1.0`).
pub fn structural_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(ma), Value::Object(mb)) => {
            ma.len() == mb.len()
                && ma
                    .iter()
                    .all(|(key, va)| mb.get(key).is_some_and(|vb| structural_eq(va, vb)))
        }
        (Value::Array(sa), Value::Array(sb)) => {
            sa.len() == sb.len() && sa.iter().zip(sb).all(|(va, vb)| structural_eq(va, vb))
        }
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
        (Value::Array(_), _) | (_, Value::Array(_)) => false,
        _ => a == b,
    }
}

/// Shallow equality: primitives by value, containers never equal.
///
/// Owned values carry no shared identity, so two structurally identical
/// containers are still distinct instances and compare unequal here. Shallow
/// mode answers "is it the same value", not "is it equivalent content".
pub fn shallow_eq(a: &Value, b: &Value) -> bool {
    is_primitive(a) && is_primitive(b) && a == b
}
