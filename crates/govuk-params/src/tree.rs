//! Param tree type and value helpers

use serde_json::{Map, Value};

/// Params passed to a component macro.
///
/// Key order is preserved so rendered attributes and error lists follow the
/// order in which they were supplied.
pub type ParamTree = Map<String, Value>;

/// Build a `{"text": ...}` node, the shape used by `label`, `hint` and
/// `errorMessage`.
///
/// # Examples
///
/// ```
/// use govuk_params::text_node;
/// use serde_json::json;
///
/// assert_eq!(text_node("Full name"), json!({"text": "Full name"}));
/// ```
pub fn text_node(text: impl Into<String>) -> Value {
	let mut node = Map::new();
	node.insert("text".to_string(), Value::String(text.into()));
	Value::Object(node)
}

/// Convert any JSON value into a tree.
///
/// Objects are unwrapped, `null` becomes an empty tree and anything else
/// yields `None`.
///
/// # Examples
///
/// ```
/// use govuk_params::to_tree;
/// use serde_json::json;
///
/// assert_eq!(to_tree(json!({"a": 1})).unwrap().len(), 1);
/// assert!(to_tree(json!(null)).unwrap().is_empty());
/// assert!(to_tree(json!([1])).is_none());
/// ```
pub fn to_tree(value: Value) -> Option<ParamTree> {
	match value {
		Value::Object(map) => Some(map),
		Value::Null => Some(ParamTree::new()),
		_ => None,
	}
}

/// Truthiness of a form value.
///
/// `null`, `false`, zero, the empty string and empty collections are falsy.
///
/// # Examples
///
/// ```
/// use govuk_params::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("y")));
/// assert!(is_truthy(&json!(1)));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(null)));
/// assert!(!is_truthy(&json!([])));
/// ```
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// String form of a value.
///
/// Strings are returned without quotes; every other value uses its JSON
/// representation.
///
/// # Examples
///
/// ```
/// use govuk_params::string_form;
/// use serde_json::json;
///
/// assert_eq!(string_form(&json!("Required")), "Required");
/// assert_eq!(string_form(&json!(42)), "42");
/// assert_eq!(string_form(&json!(true)), "true");
/// ```
pub fn string_form(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
