//! Validation error trees and the error summary
//!
//! Form libraries report errors as a tree mirroring the form: a mapping of
//! field name to messages, to a nested sub-form, or to a list of repeated
//! sub-forms. [`flatten_errors`] turns that tree into the ordered
//! `{text, href}` list the error summary component links from.

use crate::field::FormField;
use govuk_params::{Merger, ParamTree, string_form};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Default `titleText` of the error summary
pub const DEFAULT_ERROR_SUMMARY_TITLE: &str = "There is a problem";

/// Field name to DOM id lookup used when building anchors
pub type IdMap = HashMap<String, String>;

/// Nested validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorTree {
	/// Errors keyed by field name, in form order
	Fields(Vec<(String, ErrorTree)>),
	/// Messages of one field, or a list of repeated sub-forms
	List(Vec<ErrorTree>),
	/// A single message
	Message(String),
}

impl ErrorTree {
	/// Build a tree from `(field, messages)` pairs, the shape a flat form
	/// reports.
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::ErrorTree;
	///
	/// let tree = ErrorTree::from_field_errors([("email", vec!["Enter an email"])]);
	/// assert_eq!(
	/// 	tree,
	/// 	ErrorTree::Fields(vec![(
	/// 		"email".to_string(),
	/// 		ErrorTree::List(vec![ErrorTree::Message("Enter an email".to_string())]),
	/// 	)])
	/// );
	/// ```
	pub fn from_field_errors<I, K, M, S>(errors: I) -> Self
	where
		I: IntoIterator<Item = (K, M)>,
		K: Into<String>,
		M: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Fields(
			errors
				.into_iter()
				.map(|(field, messages)| {
					let messages = messages.into_iter().map(|m| Self::Message(m.into())).collect();
					(field.into(), Self::List(messages))
				})
				.collect(),
		)
	}

	// Text shown for a message list: its first message, descending into
	// nested lists.
	fn first_message(&self) -> Option<&str> {
		match self {
			Self::Message(message) => Some(message),
			Self::List(items) => items.first().and_then(Self::first_message),
			Self::Fields(_) => None,
		}
	}
}

impl From<Value> for ErrorTree {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => {
				Self::Fields(map.into_iter().map(|(k, v)| (k, v.into())).collect())
			}
			Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
			other => Self::Message(string_form(&other)),
		}
	}
}

impl From<&str> for ErrorTree {
	fn from(message: &str) -> Self {
		Self::Message(message.to_string())
	}
}

impl From<String> for ErrorTree {
	fn from(message: String) -> Self {
		Self::Message(message)
	}
}

/// One linked entry of the error summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
	pub text: String,
	pub href: String,
}

impl ErrorEntry {
	fn at(text: impl Into<String>, prefix: &str) -> Self {
		Self {
			text: text.into(),
			href: format!("#{}", prefix.trim_end_matches('-')),
		}
	}
}

impl From<ErrorEntry> for Value {
	fn from(entry: ErrorEntry) -> Self {
		let mut map = ParamTree::new();
		map.insert("text".to_string(), Value::String(entry.text));
		map.insert("href".to_string(), Value::String(entry.href));
		Value::Object(map)
	}
}

/// Flatten an error tree into summary entries.
///
/// Field names are resolved through `id_map` and joined with `-` onto
/// `prefix` to build each anchor. Repeated sub-forms contribute their index
/// to the path. A message list contributes its first message only.
///
/// # Examples
///
/// ```
/// use govuk_widgets::{ErrorEntry, ErrorTree, IdMap, flatten_errors};
/// use serde_json::json;
///
/// let tree = ErrorTree::from(json!({"child": {"name": ["Required"]}}));
/// let id_map = IdMap::from([("child".to_string(), "child-id".to_string())]);
///
/// assert_eq!(
/// 	flatten_errors(&tree, &id_map, ""),
/// 	vec![ErrorEntry { text: "Required".to_string(), href: "#child-id-name".to_string() }]
/// );
/// ```
pub fn flatten_errors(errors: &ErrorTree, id_map: &IdMap, prefix: &str) -> Vec<ErrorEntry> {
	let mut entries = Vec::new();
	collect(errors, id_map, prefix, &mut entries);
	entries
}

fn collect(errors: &ErrorTree, id_map: &IdMap, prefix: &str, entries: &mut Vec<ErrorEntry>) {
	match errors {
		ErrorTree::Fields(fields) => {
			for (key, value) in fields {
				let key = id_map.get(key).unwrap_or(key);
				collect(value, id_map, &format!("{prefix}{key}-"), entries);
			}
		}
		ErrorTree::List(items) => match items.first() {
			None => {
				tracing::debug!(prefix, "skipping empty error list");
			}
			Some(ErrorTree::Fields(_)) => {
				for (index, item) in items.iter().enumerate() {
					collect(item, id_map, &format!("{prefix}{index}-"), entries);
				}
			}
			Some(first) => match first.first_message() {
				Some(message) => entries.push(ErrorEntry::at(message, prefix)),
				None => {
					tracing::debug!(prefix, "skipping error list without a message");
				}
			},
		},
		ErrorTree::Message(message) => entries.push(ErrorEntry::at(message.as_str(), prefix)),
	}
}

/// Build the `id_map` for a set of fields: field name to DOM id, for fields
/// that have one.
pub fn id_map_for<'a, F, I>(fields: I) -> IdMap
where
	F: FormField + ?Sized + 'a,
	I: IntoIterator<Item = &'a F>,
{
	fields
		.into_iter()
		.filter_map(|field| field.id().map(|id| (field.name().to_string(), id.to_string())))
		.collect()
}

/// Params for the error summary component.
///
/// Produces `{titleText, errorList}` and deep-merges `overrides` on top, so
/// extra entries in `overrides.errorList` are appended.
///
/// # Examples
///
/// ```
/// use govuk_params::{Merger, ParamTree};
/// use govuk_widgets::{DEFAULT_ERROR_SUMMARY_TITLE, ErrorTree, IdMap, error_summary};
/// use serde_json::json;
///
/// let tree = ErrorTree::from(json!({"email": ["Enter an email"]}));
/// let summary = error_summary(
/// 	&Merger::default(),
/// 	&tree,
/// 	&IdMap::new(),
/// 	DEFAULT_ERROR_SUMMARY_TITLE,
/// 	ParamTree::new(),
/// );
///
/// assert_eq!(summary["titleText"], json!("There is a problem"));
/// assert_eq!(summary["errorList"], json!([{"text": "Enter an email", "href": "#email"}]));
/// ```
pub fn error_summary(
	merger: &Merger,
	errors: &ErrorTree,
	id_map: &IdMap,
	title: &str,
	overrides: ParamTree,
) -> ParamTree {
	let entries: Vec<Value> = flatten_errors(errors, id_map, "")
		.into_iter()
		.map(Value::from)
		.collect();
	tracing::debug!(count = entries.len(), "built error summary");

	let mut params = ParamTree::new();
	params.insert("titleText".to_string(), Value::from(title));
	params.insert("errorList".to_string(), Value::Array(entries));
	merger.merge(params, overrides)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bound_field::BoundField;
	use rstest::rstest;
	use serde_json::json;

	fn entry(text: &str, href: &str) -> ErrorEntry {
		ErrorEntry {
			text: text.to_string(),
			href: href.to_string(),
		}
	}

	#[rstest]
	fn test_nested_form_uses_id_map() {
		let tree = ErrorTree::from(json!({"child": {"name": ["Required"]}}));
		let id_map = IdMap::from([("child".to_string(), "child-id".to_string())]);

		assert_eq!(flatten_errors(&tree, &id_map, ""), vec![entry("Required", "#child-id-name")]);
	}

	#[rstest]
	fn test_repeated_sub_forms_use_index() {
		let tree = ErrorTree::from(json!({"items": [{"name": ["Required"]}]}));
		assert_eq!(
			flatten_errors(&tree, &IdMap::new(), ""),
			vec![entry("Required", "#items-0-name")]
		);
	}

	#[rstest]
	fn test_only_first_message_per_list() {
		let tree = ErrorTree::from(json!({"email": ["Enter an email", "Too long"]}));
		assert_eq!(
			flatten_errors(&tree, &IdMap::new(), ""),
			vec![entry("Enter an email", "#email")]
		);
	}

	#[rstest]
	fn test_every_leaf_across_the_tree() {
		let tree = ErrorTree::from(json!({
			"name": ["Enter your name"],
			"address": {"line1": ["Enter line 1"], "postcode": ["Enter a postcode"]},
			"people": [{"age": ["Too young"]}, {"age": ["Too old"]}],
		}));

		assert_eq!(
			flatten_errors(&tree, &IdMap::new(), ""),
			vec![
				entry("Enter your name", "#name"),
				entry("Enter line 1", "#address-line1"),
				entry("Enter a postcode", "#address-postcode"),
				entry("Too young", "#people-0-age"),
				entry("Too old", "#people-1-age"),
			]
		);
	}

	#[rstest]
	fn test_empty_list_emits_nothing() {
		let tree = ErrorTree::from(json!({"name": [], "email": ["Required"]}));
		assert_eq!(flatten_errors(&tree, &IdMap::new(), ""), vec![entry("Required", "#email")]);
	}

	#[rstest]
	#[case(json!({"age": 42}), "42")]
	#[case(json!({"age": [true]}), "true")]
	#[case(json!({"age": [["Nested first", "x"]]}), "Nested first")]
	fn test_other_leaf_values_are_stringified(#[case] errors: Value, #[case] text: &str) {
		let tree = ErrorTree::from(errors);
		assert_eq!(flatten_errors(&tree, &IdMap::new(), ""), vec![entry(text, "#age")]);
	}

	#[rstest]
	fn test_bare_message_and_prefix() {
		assert_eq!(
			flatten_errors(&ErrorTree::from("Form error"), &IdMap::new(), "form-"),
			vec![entry("Form error", "#form")]
		);
		assert_eq!(
			flatten_errors(&ErrorTree::from("Form error"), &IdMap::new(), ""),
			vec![entry("Form error", "#")]
		);
	}

	#[rstest]
	fn test_id_map_only_for_fields_with_id() {
		let fields = [BoundField::new("name").with_id("name-input"), BoundField::new("email")];
		let id_map = id_map_for(&fields);

		assert_eq!(id_map.len(), 1);
		assert_eq!(id_map.get("name").map(String::as_str), Some("name-input"));
	}

	#[rstest]
	fn test_summary_merges_overrides() {
		let tree = ErrorTree::from_field_errors([("email", vec!["Enter an email"])]);
		let overrides = govuk_params::to_tree(json!({
			"titleText": "Fix these",
			"errorList": [{"text": "Something else", "href": "#other"}],
			"classes": "extra",
		}))
		.unwrap();

		let summary = error_summary(
			&Merger::default(),
			&tree,
			&IdMap::new(),
			DEFAULT_ERROR_SUMMARY_TITLE,
			overrides,
		);

		assert_eq!(
			Value::Object(summary),
			json!({
				"titleText": "Fix these",
				"errorList": [
					{"text": "Enter an email", "href": "#email"},
					{"text": "Something else", "href": "#other"},
				],
				"classes": "extra",
			})
		);
	}
}
