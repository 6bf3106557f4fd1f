//! Field mapping tests
//!
//! Exercises the mappers through a form library's own field types rather
//! than the bundled `BoundField`.

use govuk_params::{Merger, to_tree};
use govuk_widgets::{
	ErrorTree, FormField, IterableField, Kwargs, ParamMapping, SubField, WidgetKind, error_summary,
	id_map_for, prepare_iterable,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Channel {
	label: &'static str,
	value: &'static str,
	data: Value,
}

impl SubField for Channel {
	fn label_text(&self) -> &str {
		self.label
	}

	fn value(&self) -> String {
		self.value.to_string()
	}

	fn data(&self) -> &Value {
		&self.data
	}
}

struct ContactField {
	errors: Vec<String>,
	flags: Vec<String>,
	channels: Vec<Channel>,
}

impl FormField for ContactField {
	fn name(&self) -> &str {
		"contact"
	}

	fn id(&self) -> Option<&str> {
		Some("contact-id")
	}

	fn label_text(&self) -> &str {
		"How should we contact you?"
	}

	fn description(&self) -> Option<&str> {
		Some("Select all that apply")
	}

	fn errors(&self) -> &[String] {
		&self.errors
	}

	fn flags(&self) -> &[String] {
		&self.flags
	}
}

impl IterableField for ContactField {
	fn subfields(&self) -> Vec<&dyn SubField> {
		self.channels.iter().map(|o| o as &dyn SubField).collect()
	}
}

#[fixture]
fn contact() -> ContactField {
	ContactField {
		errors: vec![],
		flags: vec!["required".to_string()],
		channels: vec![
			Channel {
				label: "Email",
				value: "email",
				data: json!("email"),
			},
			Channel {
				label: "Phone",
				value: "phone",
				data: Value::Null,
			},
		],
	}
}

fn kwargs(value: Value) -> Kwargs {
	to_tree(value).unwrap()
}

#[rstest]
fn test_option_group_end_to_end(contact: ContactField) {
	let merger = Merger::default();
	let prepared = prepare_iterable(
		&contact,
		kwargs(json!({"params": {"items": [{}, {"hint": {"text": "UK only"}}]}})),
	);
	let params = WidgetKind::Checkboxes.mapping().map(&merger, &contact, prepared);

	assert_eq!(
		Value::Object(params),
		json!({
			"name": "contact",
			"items": [
				{"text": "Email", "value": "email", "checked": true},
				{"text": "Phone", "value": "phone", "hint": {"text": "UK only"}},
			],
			"hint": {"text": "Select all that apply"},
		})
	);
}

#[rstest]
fn test_option_group_through_trait_object(contact: ContactField) {
	let field: &dyn IterableField = &contact;
	let prepared = prepare_iterable(field, Kwargs::new());

	assert_eq!(prepared["id"], json!("contact-id"));
	assert_eq!(prepared["required"], json!(true));
	assert_eq!(prepared["items"].as_array().map(Vec::len), Some(2));
}

#[rstest]
fn test_plain_mapping_of_custom_field(mut contact: ContactField) {
	contact.errors.push("Select how to contact you".to_string());
	let params = ParamMapping::Plain.map(
		&Merger::default(),
		&contact,
		kwargs(json!({"id": "contact-id", "autofocus": true, "data-module": "x"})),
	);

	assert_eq!(params["hint"], json!({"text": "Select all that apply"}));
	assert_eq!(params["errorMessage"], json!({"text": "Select how to contact you"}));
	assert_eq!(params["attributes"], json!({"autofocus": "autofocus", "data-module": "x"}));
}

#[rstest]
fn test_summary_for_form_fields(contact: ContactField) {
	let fields: Vec<&dyn FormField> = vec![&contact];
	let id_map = id_map_for(fields);
	let tree = ErrorTree::from(json!({
		"contact": ["Select how to contact you"],
		"name": ["Enter your name"],
	}));

	let summary = error_summary(
		&Merger::default(),
		&tree,
		&id_map,
		"There is a problem",
		Default::default(),
	);

	assert_eq!(
		summary["errorList"],
		json!([
			{"text": "Select how to contact you", "href": "#contact-id"},
			{"text": "Enter your name", "href": "#name"},
		])
	);
}
