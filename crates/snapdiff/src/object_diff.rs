//! Object-level diff: recursive per-key comparison of two mappings.
//!
//! Every key in the union of both key sets is classified as added, removed,
//! changed, or unchanged. Mapping-valued keys recurse; sequence-valued keys
//! delegate to the positional array diff with deep equality; everything else
//! is compared flat. Shape mismatches (mapping vs. sequence, container vs.
//! primitive) are detected changes, never errors.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::array_diff::{diff_arrays, ArrayDiff, ArrayDiffOptions};
use crate::value::is_primitive;

/// The result of comparing two mappings key by key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ObjectDiff {
    /// Keys present only in the right-hand mapping, with their values.
    pub added: Map<String, Value>,
    /// Keys present only in the left-hand mapping, with their values.
    pub removed: Map<String, Value>,
    /// Keys present in both mappings whose values differ.
    pub changed: BTreeMap<String, ChangedEntry>,
    /// Keys present in both mappings with equal values (left-hand copies).
    pub unchanged: Map<String, Value>,
}

/// How a key present on both sides differs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChangedEntry {
    /// A flat change: primitives, or a change of container kind.
    Value(ValueChange),
    /// Both sides are mappings; the nested per-key diff.
    Object(ObjectDiff),
    /// Both sides are sequences; the positional diff.
    Array(ArrayDiff),
}

/// A flat `from`/`to` pair for a key present on both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueChange {
    /// The left-hand value.
    pub from: Value,
    /// The right-hand value.
    pub to: Value,
}

impl ObjectDiff {
    /// Create an empty object diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two mappings had no differences.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Returns `true` if any key was added, removed, or changed.
    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }

    /// Number of added keys.
    pub fn additions(&self) -> usize {
        self.added.len()
    }

    /// Number of removed keys.
    pub fn removals(&self) -> usize {
        self.removed.len()
    }

    /// Number of changed keys.
    pub fn modifications(&self) -> usize {
        self.changed.len()
    }
}

/// Compute the per-key diff between two mappings.
///
/// Keys present only in `b` are `added`, keys present only in `a` are
/// `removed`; keys present in both are compared by kind. Every key in the
/// union of both key sets lands in exactly one of the four result
/// collections.
///
/// Recursion depth is bounded by input nesting depth. The engine performs no
/// cycle detection; callers comparing untrusted input must bound its depth
/// before calling in.
pub fn diff_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> ObjectDiff {
    let mut result = ObjectDiff::new();

    // Keys present in `a`: removed, or compared against the `b` side.
    for (key, va) in a {
        match b.get(key) {
            Some(vb) => classify_pair(key, va, vb, &mut result),
            None => {
                result.removed.insert(key.clone(), va.clone());
            }
        }
    }

    // Keys present only in `b` are additions.
    for (key, vb) in b {
        if !a.contains_key(key) {
            result.added.insert(key.clone(), vb.clone());
        }
    }

    result
}

fn classify_pair(key: &str, va: &Value, vb: &Value, result: &mut ObjectDiff) {
    match (va, vb) {
        (Value::Object(ma), Value::Object(mb)) => {
            if ma.is_empty() && !mb.is_empty() {
                // A mapping that gained all of its keys is reported the same
                // way as a non-nested addition: a nested result whose `added`
                // is the whole right-hand mapping, with no recursion.
                let nested = ObjectDiff {
                    added: mb.clone(),
                    ..ObjectDiff::new()
                };
                result
                    .changed
                    .insert(key.to_string(), ChangedEntry::Object(nested));
            } else {
                let nested = diff_objects(ma, mb);
                if nested.has_changes() {
                    result
                        .changed
                        .insert(key.to_string(), ChangedEntry::Object(nested));
                } else {
                    result.unchanged.insert(key.to_string(), va.clone());
                }
            }
        }
        (Value::Array(sa), Value::Array(sb)) => {
            let nested = diff_arrays(sa, sb, ArrayDiffOptions { deep: true });
            if nested.has_changes() {
                result
                    .changed
                    .insert(key.to_string(), ChangedEntry::Array(nested));
            } else {
                result.unchanged.insert(key.to_string(), va.clone());
            }
        }
        _ => {
            if is_primitive(va) && is_primitive(vb) && va == vb {
                result.unchanged.insert(key.to_string(), va.clone());
            } else {
                result.changed.insert(
                    key.to_string(),
                    ChangedEntry::Value(ValueChange {
                        from: va.clone(),
                        to: vb.clone(),
                    }),
                );
            }
        }
    }
}
