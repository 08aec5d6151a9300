//! Property tests for the engine's structural laws: bucket completeness,
//! direction symmetry, identity, the array length laws, and flatten
//! completeness against an independent leaf-walk oracle.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::{Map, Value};

use snapdiff::{diff_arrays, diff_flattened, diff_objects, ArrayDiffOptions};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 24, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..5)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_mapping() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,3}", arb_value(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

fn arb_sequence() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_value(), 0..8)
}

/// Independent oracle: collect every path at which a full recursive walk of
/// both trees finds a leaf-level difference.
fn leaf_walk_paths(a: &Map<String, Value>, b: &Map<String, Value>) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    walk_mappings(a, b, "", &mut paths);
    paths
}

fn join(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn walk_mappings(a: &Map<String, Value>, b: &Map<String, Value>, path: &str, out: &mut BTreeSet<String>) {
    for (key, va) in a {
        let child = join(path, key);
        match b.get(key) {
            Some(vb) => walk_pair(va, vb, &child, out),
            None => collect_leaves(va, &child, out),
        }
    }
    for (key, vb) in b {
        if !a.contains_key(key) {
            collect_leaves(vb, &join(path, key), out);
        }
    }
}

fn walk_pair(va: &Value, vb: &Value, path: &str, out: &mut BTreeSet<String>) {
    match (va, vb) {
        (Value::Object(ma), Value::Object(mb)) => walk_mappings(ma, mb, path, out),
        (Value::Array(sa), Value::Array(sb)) => {
            let common = sa.len().min(sb.len());
            for index in 0..common {
                walk_pair(&sa[index], &sb[index], &format!("{path}[{index}]"), out);
            }
            for index in common..sa.len() {
                collect_leaves(&sa[index], &format!("{path}[{index}]"), out);
            }
            for index in common..sb.len() {
                collect_leaves(&sb[index], &format!("{path}[{index}]"), out);
            }
        }
        _ => {
            if va != vb {
                out.insert(path.to_string());
            }
        }
    }
}

fn collect_leaves(value: &Value, path: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                collect_leaves(inner, &join(path, key), out);
            }
        }
        Value::Array(seq) => {
            for (index, inner) in seq.iter().enumerate() {
                collect_leaves(inner, &format!("{path}[{index}]"), out);
            }
        }
        _ => {
            out.insert(path.to_string());
        }
    }
}

proptest! {
    #[test]
    fn every_union_key_classified_exactly_once(a in arb_mapping(), b in arb_mapping()) {
        let diff = diff_objects(&a, &b);
        let union: BTreeSet<&String> = a.keys().chain(b.keys()).collect();

        for key in &union {
            let hits = [
                diff.added.contains_key(key.as_str()),
                diff.removed.contains_key(key.as_str()),
                diff.changed.contains_key(key.as_str()),
                diff.unchanged.contains_key(key.as_str()),
            ];
            prop_assert_eq!(
                hits.iter().filter(|hit| **hit).count(),
                1,
                "key {} classified in {:?}",
                key,
                hits
            );
        }

        let total =
            diff.added.len() + diff.removed.len() + diff.changed.len() + diff.unchanged.len();
        prop_assert_eq!(total, union.len());
    }

    #[test]
    fn direction_swap_mirrors_added_and_removed(a in arb_mapping(), b in arb_mapping()) {
        let forward = diff_objects(&a, &b);
        let backward = diff_objects(&b, &a);
        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
    }

    #[test]
    fn self_diff_is_all_unchanged(a in arb_mapping()) {
        let diff = diff_objects(&a, &a);
        prop_assert!(diff.is_empty());
        prop_assert_eq!(&diff.unchanged, &a);
    }

    #[test]
    fn self_array_diff_deep_is_all_unchanged(values in arb_sequence()) {
        let diff = diff_arrays(&values, &values, ArrayDiffOptions { deep: true });
        prop_assert!(diff.is_empty());
        prop_assert_eq!(&diff.unchanged, &values);
    }

    #[test]
    fn array_length_laws(a in arb_sequence(), b in arb_sequence()) {
        for deep in [false, true] {
            let diff = diff_arrays(&a, &b, ArrayDiffOptions { deep });
            prop_assert_eq!(diff.changed.len() + diff.unchanged.len(), a.len().min(b.len()));
            prop_assert_eq!(diff.added.len(), b.len().saturating_sub(a.len()));
            prop_assert_eq!(diff.removed.len(), a.len().saturating_sub(b.len()));
        }
    }

    #[test]
    fn changed_indices_ascend(a in arb_sequence(), b in arb_sequence()) {
        let diff = diff_arrays(&a, &b, ArrayDiffOptions::default());
        let indices: Vec<usize> = diff.changed.iter().map(|c| c.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn self_flatten_is_empty(a in arb_mapping()) {
        prop_assert!(diff_flattened(&a, &a).is_empty());
    }

    #[test]
    fn flatten_paths_match_leaf_walk(a in arb_mapping(), b in arb_mapping()) {
        let flat = diff_flattened(&a, &b);
        let actual: BTreeSet<String> = flat.paths().map(str::to_string).collect();
        let expected = leaf_walk_paths(&a, &b);
        prop_assert_eq!(actual, expected);
    }
}
