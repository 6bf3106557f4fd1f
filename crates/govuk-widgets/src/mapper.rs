//! Field to params mapping
//!
//! Two mapping variants exist:
//!
//! - [`map_plain`] for single-value fields (inputs, textareas, a single checkbox)
//! - [`map_iterable`] for fields presented as a group of options (checkboxes,
//!   radios), fed by [`prepare_iterable`]
//!
//! The variant for a given component is chosen explicitly through
//! [`ParamMapping`].

use crate::field::{FormField, IterableField, SubField};
use govuk_params::{Merger, ParamTree, text_node};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keyword overrides supplied by the caller at render time.
///
/// The `params` key carries an override tree merged into the component
/// params; every other unreserved key becomes an HTML attribute.
pub type Kwargs = ParamTree;

/// Mapping variant used by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamMapping {
	Plain,
	Iterable,
}

impl ParamMapping {
	/// Map `field` with this variant.
	///
	/// The iterable variant expects `items` in `kwargs`, as produced by
	/// [`prepare_iterable`].
	pub fn map<F>(self, merger: &Merger, field: &F, kwargs: Kwargs) -> ParamTree
	where
		F: FormField + ?Sized,
	{
		match self {
			Self::Plain => map_plain(merger, field, kwargs),
			Self::Iterable => map_iterable(merger, field, kwargs),
		}
	}
}

/// Map a single-value field onto component params
///
/// # Examples
///
/// ```
/// use govuk_params::{Merger, to_tree};
/// use govuk_widgets::{BoundField, map_plain};
/// use serde_json::json;
///
/// let field = BoundField::new("email").with_label("Email address");
/// let kwargs = to_tree(json!({"id": "email", "type": "email", "spellcheck": false})).unwrap();
///
/// let params = map_plain(&Merger::default(), &field, kwargs);
/// assert_eq!(params["id"], json!("email"));
/// assert_eq!(params["type"], json!("email"));
/// assert_eq!(params["label"], json!({"text": "Email address"}));
/// assert_eq!(params["attributes"], json!({"spellcheck": false}));
/// ```
pub fn map_plain<F>(merger: &Merger, field: &F, mut kwargs: Kwargs) -> ParamTree
where
	F: FormField + ?Sized,
{
	let mut params = ParamTree::new();
	params.insert("id".to_string(), kwargs.shift_remove("id").unwrap_or(Value::Null));
	params.insert("name".to_string(), Value::from(field.name()));
	params.insert("label".to_string(), text_node(field.label_text()));
	params.insert("attributes".to_string(), Value::Object(ParamTree::new()));
	let hint = match field.description() {
		Some(description) if !description.is_empty() => text_node(description),
		_ => Value::Null,
	};
	params.insert("hint".to_string(), hint);

	for key in ["value", "type"] {
		if let Some(value) = kwargs.shift_remove(key) {
			params.insert(key.to_string(), value);
		}
	}

	kwargs.shift_remove("items");

	if let Some(overrides) = kwargs.shift_remove("params").and_then(override_tree) {
		params = merger.merge(params, overrides);
	}

	if let Some(error) = field.errors().first() {
		params.insert("errorMessage".to_string(), text_node(error.as_str()));
	}

	let slot = params
		.entry("attributes")
		.or_insert_with(|| Value::Object(ParamTree::new()));
	let current = match std::mem::take(slot) {
		Value::Object(attributes) => attributes,
		Value::Null => ParamTree::new(),
		other => {
			tracing::warn!(
				field = field.name(),
				value = %other,
				"discarding non-object attributes override"
			);
			ParamTree::new()
		}
	};
	let mut attributes = merger.merge(current, kwargs);
	normalize_boolean_attributes(&mut attributes);
	*slot = Value::Object(attributes);

	tracing::trace!(field = field.name(), "mapped plain field params");
	params
}

/// Fill in the kwargs an option group needs before mapping.
///
/// - `id` defaults to the field id
/// - `required` is set when the field is flagged required and the caller
///   did not decide otherwise
/// - `items` is built from the field's options
///
/// # Examples
///
/// ```
/// use govuk_widgets::{BoundField, Kwargs, prepare_iterable};
/// use serde_json::json;
///
/// let field = BoundField::new("contact")
/// 	.with_id("contact")
/// 	.required()
/// 	.with_choices([("email", "Email"), ("phone", "Phone")], &["phone"]);
///
/// let kwargs = prepare_iterable(&field, Kwargs::new());
/// assert_eq!(kwargs["id"], json!("contact"));
/// assert_eq!(kwargs["required"], json!(true));
/// assert_eq!(
/// 	kwargs["items"],
/// 	json!([
/// 		{"text": "Email", "value": "email"},
/// 		{"text": "Phone", "value": "phone", "checked": true},
/// 	])
/// );
/// ```
pub fn prepare_iterable<F>(field: &F, mut kwargs: Kwargs) -> Kwargs
where
	F: IterableField + ?Sized,
{
	if !kwargs.contains_key("id") {
		kwargs.insert("id".to_string(), field.id().map_or(Value::Null, Value::from));
	}

	if !kwargs.contains_key("required") && field.has_flag("required") {
		kwargs.insert("required".to_string(), Value::Bool(true));
	}

	let items = field.subfields().into_iter().map(option_item).collect();
	kwargs.insert("items".to_string(), Value::Array(items));
	kwargs
}

/// Map an option group onto component params.
///
/// Only `items` and `params` are read from `kwargs`; the remaining keys are
/// not passed through as attributes. Item overrides in `params.items` are
/// merged into the option at the same index.
///
/// # Examples
///
/// ```
/// use govuk_params::{Merger, to_tree};
/// use govuk_widgets::{BoundField, map_iterable};
/// use serde_json::json;
///
/// let field = BoundField::new("contact");
/// let kwargs = to_tree(json!({
/// 	"items": [{"text": "Email", "value": "email"}, {"text": "Phone", "value": "phone"}],
/// 	"params": {"items": [{"hint": {"text": "We reply within a day"}}]},
/// }))
/// .unwrap();
///
/// let params = map_iterable(&Merger::default(), &field, kwargs);
/// assert_eq!(params["items"][0]["hint"], json!({"text": "We reply within a day"}));
/// assert_eq!(params["items"].as_array().unwrap().len(), 2);
/// ```
pub fn map_iterable<F>(merger: &Merger, field: &F, mut kwargs: Kwargs) -> ParamTree
where
	F: FormField + ?Sized,
{
	let items = match kwargs.shift_remove("items") {
		Some(Value::Array(items)) => items,
		Some(other) => {
			tracing::warn!(field = field.name(), value = %other, "ignoring non-array items");
			Vec::new()
		}
		None => Vec::new(),
	};

	let mut params = ParamTree::new();
	params.insert("name".to_string(), Value::from(field.name()));
	params.insert("items".to_string(), Value::Array(items));
	params.insert("hint".to_string(), text_node(field.description().unwrap_or_default()));

	if let Some(mut overrides) = kwargs.shift_remove("params").and_then(override_tree) {
		match overrides.shift_remove("items") {
			Some(Value::Array(item_overrides)) => {
				if let Some(Value::Array(items)) = params.get_mut("items") {
					let base = std::mem::take(items);
					*items = merger.merge_positional(base, item_overrides);
				}
			}
			Some(other) => {
				tracing::warn!(
					field = field.name(),
					value = %other,
					"ignoring non-array item overrides"
				);
			}
			None => {}
		}
		params = merger.merge(params, overrides);
	}

	if let Some(error) = field.errors().first() {
		params.insert("errorMessage".to_string(), text_node(error.as_str()));
	}

	tracing::trace!(field = field.name(), "mapped iterable field params");
	params
}

/// Rewrite `true` attribute values to the attribute name, so
/// `required=true` renders as `required="required"`.
pub fn normalize_boolean_attributes(attributes: &mut ParamTree) {
	for (key, value) in attributes.iter_mut() {
		if *value == Value::Bool(true) {
			*value = Value::String(key.clone());
		}
	}
}

fn option_item(option: &dyn SubField) -> Value {
	let mut item = ParamTree::new();
	item.insert("text".to_string(), Value::from(option.label_text()));
	item.insert("value".to_string(), Value::String(option.value()));
	if option.is_selected() {
		item.insert("checked".to_string(), Value::Bool(true));
	}
	Value::Object(item)
}

fn override_tree(value: Value) -> Option<ParamTree> {
	match value {
		Value::Object(tree) => Some(tree),
		Value::Null => None,
		other => {
			tracing::warn!(value = %other, "ignoring params override that is not an object");
			None
		}
	}
}
