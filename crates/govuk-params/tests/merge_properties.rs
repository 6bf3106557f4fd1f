//! Property tests for the deep merge engine

use govuk_params::{Merger, ParamTree, to_tree};
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

fn leaf() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<i32>().prop_map(|n| json!(n)),
		"[a-z]{0,8}".prop_map(Value::String),
	]
}

fn value() -> impl Strategy<Value = Value> {
	leaf().prop_recursive(3, 24, 4, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
			prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
				.prop_map(|m| Value::Object(m.into_iter().collect())),
		]
	})
}

fn param_tree() -> impl Strategy<Value = ParamTree> {
	prop::collection::btree_map("[a-z]{1,4}", value(), 0..5).prop_map(|m| m.into_iter().collect())
}

proptest! {
	#[test]
	fn merging_empty_overlay_is_identity(base in param_tree()) {
		let merged = Merger::default().merge(base.clone(), ParamTree::new());
		prop_assert_eq!(merged, base);
	}

	#[test]
	fn merging_into_empty_base_yields_overlay(overlay in param_tree()) {
		let merged = Merger::default().merge(ParamTree::new(), overlay.clone());
		prop_assert_eq!(merged, overlay);
	}

	#[test]
	fn appended_sequences_keep_every_item(
		base in prop::collection::vec(leaf(), 0..6),
		overlay in prop::collection::vec(leaf(), 0..6),
	) {
		let merged = Merger::default()
			.merge_value(Value::Array(base.clone()), Value::Array(overlay.clone()));
		let mut expected = base;
		expected.extend(overlay);
		prop_assert_eq!(merged, Value::Array(expected));
	}

	#[test]
	fn base_only_keys_survive(base in param_tree(), overlay in param_tree()) {
		let merged = Merger::default().merge(base.clone(), overlay.clone());
		for key in base.keys() {
			prop_assert!(merged.contains_key(key));
		}
		for key in overlay.keys() {
			prop_assert!(merged.contains_key(key));
		}
	}
}

#[rstest]
fn test_merge_never_replaces_sequence_with_overlay() {
	let merged = Merger::default().merge(
		to_tree(json!({"items": [1, 2]})).unwrap(),
		to_tree(json!({"items": [3]})).unwrap(),
	);
	assert_eq!(merged["items"], json!([1, 2, 3]));
	assert_ne!(merged["items"], json!([3]));
}

#[rstest]
fn test_caller_copy_of_base_is_untouched() {
	let base = to_tree(json!({"attributes": {"class": "a"}})).unwrap();
	let kept = base.clone();
	let _ = Merger::default().merge(base, to_tree(json!({"attributes": {"id": "b"}})).unwrap());
	assert_eq!(kept, to_tree(json!({"attributes": {"class": "a"}})).unwrap());
}
