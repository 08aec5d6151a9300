//! Array-level diff: strictly positional comparison of two sequences.
//!
//! Elements are compared index by index, never realigned by content. An
//! element that moved between indices is reported as changed at both
//! positions. The equality policy for container elements is selectable:
//! deep structural comparison, or shallow comparison in which distinct
//! container instances never match.

use serde::Serialize;
use serde_json::Value;

use crate::value::{shallow_eq, structural_eq};

/// Options for [`diff_arrays`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayDiffOptions {
    /// Compare container elements by full structural equality instead of
    /// reporting every container pair as changed. Defaults to `false`.
    pub deep: bool,
}

/// The result of comparing two sequences position by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArrayDiff {
    /// Trailing values of the right-hand sequence beyond the left-hand length.
    pub added: Vec<Value>,
    /// Trailing values of the left-hand sequence beyond the right-hand length.
    pub removed: Vec<Value>,
    /// Index-aligned pairs that differ, in ascending index order.
    pub changed: Vec<IndexChange>,
    /// Values equal at the same index in both sequences (left-hand copies).
    pub unchanged: Vec<Value>,
}

/// A differing pair of values at one index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexChange {
    /// The position in both sequences.
    pub index: usize,
    /// The left-hand value at that position.
    pub from: Value,
    /// The right-hand value at that position.
    pub to: Value,
}

impl ArrayDiff {
    /// Create an empty array diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two sequences had no differences.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Returns `true` if any position was added, removed, or changed.
    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }
}

/// Compute the positional diff between two sequences.
///
/// For every index present in both sequences the pair lands in `unchanged`
/// or `changed` depending on the equality policy. Indices past the shorter
/// length land in `added` (when `b` is longer) or `removed` (when `a` is
/// longer), never both. Each output field is in ascending index order.
pub fn diff_arrays(a: &[Value], b: &[Value], options: ArrayDiffOptions) -> ArrayDiff {
    let mut result = ArrayDiff::new();
    let common = a.len().min(b.len());

    for index in 0..common {
        let (va, vb) = (&a[index], &b[index]);
        let equal = if options.deep {
            structural_eq(va, vb)
        } else {
            shallow_eq(va, vb)
        };
        if equal {
            result.unchanged.push(va.clone());
        } else {
            result.changed.push(IndexChange {
                index,
                from: va.clone(),
                to: vb.clone(),
            });
        }
    }

    result.added.extend(b[common..].iter().cloned());
    result.removed.extend(a[common..].iter().cloned());

    result
}
