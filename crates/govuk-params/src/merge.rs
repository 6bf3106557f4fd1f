//! Deep merge engine
//!
//! Folds an overlay tree into a base tree:
//!
//! - object vs object: keys are merged recursively, overlay wins on conflict
//! - array vs array: overlay items are appended after the base items
//! - anything else: the overlay value replaces the base value
//!
//! The strategies for objects and arrays are configurable through
//! [`MergeConfig`]. A [`Merger`] is an immutable value; build one per
//! composition and share it freely between threads.

use crate::tree::ParamTree;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How two arrays found at the same key are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceStrategy {
	/// Overlay items follow base items.
	#[default]
	Append,
	/// Overlay array replaces the base array.
	Override,
}

/// How two objects found at the same key are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingStrategy {
	/// Keys are merged recursively.
	#[default]
	Merge,
	/// Overlay object replaces the base object.
	Override,
}

/// Strategy set for a [`Merger`].
///
/// Scalars and type conflicts always take the overlay value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
	pub sequences: SequenceStrategy,
	pub mappings: MappingStrategy,
}

/// Deep merge engine
///
/// # Examples
///
/// ```
/// use govuk_params::{Merger, to_tree};
/// use serde_json::json;
///
/// let merger = Merger::default();
/// let merged = merger.merge(
/// 	to_tree(json!({"a": {"x": 1}})).unwrap(),
/// 	to_tree(json!({"a": {"y": 2}})).unwrap(),
/// );
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": {"x": 1, "y": 2}}));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Merger {
	config: MergeConfig,
}

impl Merger {
	/// Create a merger from a strategy set
	pub fn new(config: MergeConfig) -> Self {
		Self { config }
	}

	/// The strategy set this merger was built from
	pub fn config(&self) -> &MergeConfig {
		&self.config
	}

	/// Merge `overlay` into `base` and return the result.
	///
	/// Both trees are taken by value; callers keeping a copy of `base` never
	/// observe the merge.
	pub fn merge(&self, mut base: ParamTree, overlay: ParamTree) -> ParamTree {
		self.merge_into(&mut base, overlay);
		base
	}

	/// Merge two arbitrary values.
	///
	/// # Examples
	///
	/// ```
	/// use govuk_params::Merger;
	/// use serde_json::json;
	///
	/// let merger = Merger::default();
	/// assert_eq!(merger.merge_value(json!([1, 2]), json!([3])), json!([1, 2, 3]));
	/// assert_eq!(merger.merge_value(json!("a"), json!({"b": 1})), json!({"b": 1}));
	/// ```
	pub fn merge_value(&self, base: Value, overlay: Value) -> Value {
		match (base, overlay) {
			(Value::Object(mut base), Value::Object(overlay)) => match self.config.mappings {
				MappingStrategy::Merge => {
					self.merge_into(&mut base, overlay);
					Value::Object(base)
				}
				MappingStrategy::Override => Value::Object(overlay),
			},
			(Value::Array(mut base), Value::Array(overlay)) => match self.config.sequences {
				SequenceStrategy::Append => {
					base.extend(overlay);
					Value::Array(base)
				}
				SequenceStrategy::Override => Value::Array(overlay),
			},
			(_, overlay) => overlay,
		}
	}

	/// Merge two arrays index by index.
	///
	/// Overlay item `i` is deep-merged into base item `i`. Overlay items past
	/// the end of `base` are appended.
	///
	/// # Examples
	///
	/// ```
	/// use govuk_params::Merger;
	/// use serde_json::json;
	///
	/// let merger = Merger::default();
	/// let items = merger.merge_positional(
	/// 	vec![json!({"text": "A"}), json!({"text": "B"})],
	/// 	vec![json!({"checked": true})],
	/// );
	/// assert_eq!(items, vec![json!({"text": "A", "checked": true}), json!({"text": "B"})]);
	/// ```
	pub fn merge_positional(&self, mut base: Vec<Value>, overlay: Vec<Value>) -> Vec<Value> {
		for (index, item) in overlay.into_iter().enumerate() {
			match base.get_mut(index) {
				Some(slot) => {
					let current = std::mem::take(slot);
					*slot = self.merge_value(current, item);
				}
				None => {
					tracing::trace!(index, "appending overlay item without a base counterpart");
					base.push(item);
				}
			}
		}
		base
	}

	fn merge_into(&self, base: &mut ParamTree, overlay: ParamTree) {
		for (key, value) in overlay {
			match base.get_mut(&key) {
				Some(slot) => {
					let current = std::mem::take(slot);
					*slot = self.merge_value(current, value);
				}
				None => {
					base.insert(key, value);
				}
			}
		}
	}
}
