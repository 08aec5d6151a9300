//! Flattened diff: one `{from, to}` record per differing leaf path.
//!
//! Paths join mapping keys with `.` and sequence positions with `[i]`, e.g.
//! `user.roles[1].active`. Root keys take no leading separator. A purely
//! numeric mapping key is still a mapping key and is dot-joined; only true
//! sequence positions use the bracket form.
//!
//! Absence is distinct from null throughout: a side with no value at a path
//! is `None`, a side holding an explicit null is `Some(Value::Null)`.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::array_diff::{diff_arrays, ArrayDiffOptions};
use crate::object_diff::{diff_objects, ChangedEntry};

/// A single flattened change. `None` means the side had no value at the path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlatChange {
    /// The left-hand leaf value, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    /// The right-hand leaf value, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
}

/// A mapping from leaf path to change record, ordered by path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlatDiff {
    entries: BTreeMap<String, FlatChange>,
}

impl FlatDiff {
    /// Create an empty flat diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no differing leaves.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of differing leaves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the change record at a path.
    pub fn get(&self, path: &str) -> Option<&FlatChange> {
        self.entries.get(path)
    }

    /// Iterate entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FlatChange)> {
        self.entries.iter()
    }

    /// The differing leaf paths, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn insert(&mut self, path: String, change: FlatChange) {
        self.entries.insert(path, change);
    }
}

/// Flatten every difference between two mappings into path-keyed records.
///
/// Runs the per-key comparator, then walks its result: added and removed
/// subtrees expand to their leaves, nested mapping diffs recurse at the
/// extended path, and sequence diffs expand position by position. For any
/// two roots the emitted path set equals the set of leaf paths at which a
/// full recursive walk of both trees finds a difference, one entry each;
/// equal trees produce an empty result.
pub fn diff_flattened(a: &Map<String, Value>, b: &Map<String, Value>) -> FlatDiff {
    let mut flat = FlatDiff::new();
    flatten_mappings(a, b, "", &mut flat);
    flat
}

/// Join a mapping key onto a parent path. Root keys take no separator;
/// purely numeric keys are mapping keys and are dot-joined like any other.
fn join_key(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn join_index(base: &str, index: usize) -> String {
    format!("{base}[{index}]")
}

fn flatten_mappings(a: &Map<String, Value>, b: &Map<String, Value>, prefix: &str, flat: &mut FlatDiff) {
    let nested = diff_objects(a, b);

    for (key, value) in &nested.added {
        expand_added(value, join_key(prefix, key), flat);
    }
    for (key, value) in &nested.removed {
        expand_removed(value, join_key(prefix, key), flat);
    }

    for (key, entry) in &nested.changed {
        let path = join_key(prefix, key);
        match entry {
            ChangedEntry::Object(_) => {
                // The comparator attaches a nested object diff only when both
                // sides are mappings; re-derive them and recurse.
                if let (Some(Value::Object(ma)), Some(Value::Object(mb))) = (a.get(key), b.get(key))
                {
                    flatten_mappings(ma, mb, &path, flat);
                }
            }
            ChangedEntry::Array(_) => {
                if let (Some(Value::Array(sa)), Some(Value::Array(sb))) = (a.get(key), b.get(key)) {
                    flatten_sequences(sa, sb, &path, flat);
                }
            }
            ChangedEntry::Value(change) => {
                flat.insert(
                    path,
                    FlatChange {
                        from: Some(change.from.clone()),
                        to: Some(change.to.clone()),
                    },
                );
            }
        }
    }
}

/// Positional flattening of two sequences rooted at `path`.
fn flatten_sequences(a: &[Value], b: &[Value], path: &str, flat: &mut FlatDiff) {
    let positional = diff_arrays(a, b, ArrayDiffOptions { deep: true });

    for change in &positional.changed {
        let element_path = join_index(path, change.index);
        match (&a[change.index], &b[change.index]) {
            (Value::Object(ma), Value::Object(mb)) => {
                flatten_mappings(ma, mb, &element_path, flat);
            }
            (Value::Array(sa), Value::Array(sb)) => {
                flatten_sequences(sa, sb, &element_path, flat);
            }
            (va, vb) => {
                flat.insert(
                    element_path,
                    FlatChange {
                        from: Some(va.clone()),
                        to: Some(vb.clone()),
                    },
                );
            }
        }
    }

    // Trailing positions exist on exactly one side.
    for (index, value) in b.iter().enumerate().skip(a.len()) {
        expand_added(value, join_index(path, index), flat);
    }
    for (index, value) in a.iter().enumerate().skip(b.len()) {
        expand_removed(value, join_index(path, index), flat);
    }
}

/// Emit `{from: absent, to: leaf}` for every leaf inside a value present
/// only on the right-hand side. Empty containers contribute no leaves.
fn expand_added(value: &Value, path: String, flat: &mut FlatDiff) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                expand_added(inner, join_key(&path, key), flat);
            }
        }
        Value::Array(seq) => {
            for (index, inner) in seq.iter().enumerate() {
                expand_added(inner, join_index(&path, index), flat);
            }
        }
        _ => {
            flat.insert(
                path,
                FlatChange {
                    from: None,
                    to: Some(value.clone()),
                },
            );
        }
    }
}

/// Emit `{from: leaf, to: absent}` for every leaf inside a value present
/// only on the left-hand side.
fn expand_removed(value: &Value, path: String, flat: &mut FlatDiff) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                expand_removed(inner, join_key(&path, key), flat);
            }
        }
        Value::Array(seq) => {
            for (index, inner) in seq.iter().enumerate() {
                expand_removed(inner, join_index(&path, index), flat);
            }
        }
        _ => {
            flat.insert(
                path,
                FlatChange {
                    from: Some(value.clone()),
                    to: None,
                },
            );
        }
    }
}
