//! Dispatch between the nested and flattened diff forms.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::flat_diff::{diff_flattened, FlatDiff};
use crate::object_diff::{diff_objects, ObjectDiff};

/// Options for [`smart_diff`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmartDiffOptions {
    /// Return the flattened path-keyed form instead of the nested form.
    /// Defaults to `false`.
    pub flatten: bool,
}

/// Either diff form, chosen by [`SmartDiffOptions::flatten`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SmartDiff {
    /// The nested per-key classification.
    Nested(ObjectDiff),
    /// The flattened path-keyed change set.
    Flat(FlatDiff),
}

impl SmartDiff {
    /// Returns `true` if no differences were found, in either form.
    pub fn is_empty(&self) -> bool {
        match self {
            SmartDiff::Nested(diff) => diff.is_empty(),
            SmartDiff::Flat(diff) => diff.is_empty(),
        }
    }
}

/// Compare two mappings, choosing the result form from the options.
///
/// A thin dispatcher over [`diff_objects`] and [`diff_flattened`]; it
/// carries no comparison logic of its own.
pub fn smart_diff(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    options: SmartDiffOptions,
) -> SmartDiff {
    if options.flatten {
        SmartDiff::Flat(diff_flattened(a, b))
    } else {
        SmartDiff::Nested(diff_objects(a, b))
    }
}
