use crate::field::{FormField, IterableField, SubField};
use serde_json::Value;

/// BoundField is an owned snapshot of a field ready to be mapped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundField {
	name: String,
	html_name: String,
	id: Option<String>,
	label: String,
	description: Option<String>,
	errors: Vec<String>,
	flags: Vec<String>,
	choices: Vec<BoundChoice>,
}

impl BoundField {
	/// Create a field with a label derived from its name
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::{BoundField, FormField};
	///
	/// let field = BoundField::new("first_name");
	/// assert_eq!(field.name(), "first_name");
	/// assert_eq!(field.label_text(), "First Name");
	/// assert_eq!(field.id(), None);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			label: default_label(&name),
			html_name: name.clone(),
			name,
			..Self::default()
		}
	}
	/// Prefix the HTML name
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::{BoundField, FormField};
	///
	/// let field = BoundField::new("email").with_prefix("user");
	/// assert_eq!(field.name(), "user-email");
	/// ```
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		let prefix = prefix.into();
		self.html_name = if prefix.is_empty() {
			self.name.clone()
		} else {
			format!("{prefix}-{}", self.name)
		};
		self
	}
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}
	/// Use the HTML name as the DOM id
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::{BoundField, FormField};
	///
	/// let field = BoundField::new("email").with_prefix("user").with_auto_id();
	/// assert_eq!(field.id(), Some("user-email"));
	/// ```
	pub fn with_auto_id(mut self) -> Self {
		self.id = Some(self.html_name.clone());
		self
	}
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
	pub fn with_error(mut self, error: impl Into<String>) -> Self {
		self.errors.push(error.into());
		self
	}
	pub fn with_errors<I, S>(mut self, errors: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.errors.extend(errors.into_iter().map(Into::into));
		self
	}
	pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
		self.flags.push(flag.into());
		self
	}
	/// Mark the field as required
	pub fn required(self) -> Self {
		self.with_flag("required")
	}
	pub fn with_choice(mut self, choice: BoundChoice) -> Self {
		self.choices.push(choice);
		self
	}
	/// Add `(value, label)` choices, checking those listed in `selected`
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::{BoundField, IterableField, SubField};
	///
	/// let field = BoundField::new("colour")
	/// 	.with_choices([("red", "Red"), ("blue", "Blue")], &["blue"]);
	/// let options = field.subfields();
	/// assert!(!options[0].is_selected());
	/// assert!(options[1].is_selected());
	/// ```
	pub fn with_choices<I, V, L>(mut self, choices: I, selected: &[&str]) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		for (value, label) in choices {
			let value = value.into();
			let checked = selected.contains(&value.as_str());
			self.choices.push(BoundChoice::new(value, label).checked(checked));
		}
		self
	}
}

impl FormField for BoundField {
	fn name(&self) -> &str {
		&self.html_name
	}

	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	fn label_text(&self) -> &str {
		&self.label
	}

	fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	fn errors(&self) -> &[String] {
		&self.errors
	}

	fn flags(&self) -> &[String] {
		&self.flags
	}
}

impl IterableField for BoundField {
	fn subfields(&self) -> Vec<&dyn SubField> {
		self.choices.iter().map(|c| c as &dyn SubField).collect()
	}
}

/// One option of a checkbox or radio group
#[derive(Debug, Clone, PartialEq)]
pub struct BoundChoice {
	value: String,
	label: String,
	data: Value,
	checked: Option<bool>,
}

impl BoundChoice {
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::{BoundChoice, SubField};
	///
	/// let choice = BoundChoice::new("yes", "Yes");
	/// assert_eq!(choice.value(), "yes");
	/// assert!(!choice.is_selected());
	/// ```
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			data: Value::Null,
			checked: None,
		}
	}
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = Some(checked);
		self
	}
	/// Bound data, consulted when no explicit checked state is set
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = data;
		self
	}
}

impl SubField for BoundChoice {
	fn label_text(&self) -> &str {
		&self.label
	}

	fn value(&self) -> String {
		self.value.clone()
	}

	fn checked(&self) -> Option<bool> {
		self.checked
	}

	fn data(&self) -> &Value {
		&self.data
	}
}

// "first_name" -> "First Name"
fn default_label(name: &str) -> String {
	name.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
