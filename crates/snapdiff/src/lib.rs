//! Structural diff engine for JSON-like values.
//!
//! Computes what changed between two snapshots of tree-shaped data (plain
//! mappings, ordered sequences, and primitives) at three levels of
//! granularity: per-key classification, positional array comparison, and a
//! flattened path-keyed change set suitable for display or patch generation.
//!
//! The engine is a pure function over in-memory [`serde_json::Value`] trees:
//! no I/O, no shared state, and no failure modes -- any shape mismatch
//! between the two sides is a detected change, never an error. Recursion
//! depth is bounded by input nesting depth and there is no cycle detection;
//! callers comparing untrusted input must bound its depth first.
//!
//! # Key Types
//!
//! - [`ObjectDiff`] / [`ChangedEntry`] -- Per-key diff (added/removed/changed/unchanged)
//! - [`ArrayDiff`] / [`IndexChange`] -- Strictly positional sequence diff
//! - [`FlatDiff`] / [`FlatChange`] -- Path-keyed leaf change set
//! - [`SmartDiff`] -- Dispatch between the nested and flattened forms

pub mod array_diff;
pub mod flat_diff;
pub mod object_diff;
pub mod smart;
pub mod value;

pub use array_diff::{diff_arrays, ArrayDiff, ArrayDiffOptions, IndexChange};
pub use flat_diff::{diff_flattened, FlatChange, FlatDiff};
pub use object_diff::{diff_objects, ChangedEntry, ObjectDiff, ValueChange};
pub use smart::{smart_diff, SmartDiff, SmartDiffOptions};
pub use value::{is_primitive, shallow_eq, structural_eq, value_kind, ValueKind};
