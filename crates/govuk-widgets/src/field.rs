//! Field collaborator traits
//!
//! The mappers only read from fields; validation and data binding belong to
//! the form library that implements these traits.

use govuk_params::is_truthy;
use serde_json::Value;

/// A form field as seen by the parameter mappers
pub trait FormField {
	/// Name submitted with the form
	fn name(&self) -> &str;

	/// DOM id, if one has been assigned
	fn id(&self) -> Option<&str>;

	/// Label text
	fn label_text(&self) -> &str;

	/// Description rendered as the component hint
	fn description(&self) -> Option<&str> {
		None
	}

	/// Validation errors, in the order they were raised
	fn errors(&self) -> &[String];

	/// Field flags such as `required`
	fn flags(&self) -> &[String] {
		&[]
	}

	fn has_flag(&self, flag: &str) -> bool {
		self.flags().iter().any(|f| f == flag)
	}
}

/// One selectable option of an [`IterableField`]
pub trait SubField {
	fn label_text(&self) -> &str;

	/// Value submitted when the option is selected
	fn value(&self) -> String;

	/// Explicit selection state, when the option tracks one
	fn checked(&self) -> Option<bool> {
		None
	}

	/// Bound data for the option
	fn data(&self) -> &Value;

	/// Whether the option is currently selected.
	///
	/// Uses [`SubField::checked`] when present, otherwise the truthiness of
	/// [`SubField::data`].
	fn is_selected(&self) -> bool {
		self.checked().unwrap_or_else(|| is_truthy(self.data()))
	}
}

/// A field made of a fixed set of selectable options (checkboxes, radios)
pub trait IterableField: FormField {
	fn subfields(&self) -> Vec<&dyn SubField>;
}
