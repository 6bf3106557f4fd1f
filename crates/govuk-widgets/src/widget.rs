//! Component catalogue

use crate::mapper::ParamMapping;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GOV.UK Frontend components a field can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
	TextInput,
	PasswordInput,
	Textarea,
	CharacterCount,
	/// A single checkbox bound to a boolean field
	Checkbox,
	Checkboxes,
	Radios,
	DateInput,
	FileUpload,
	Submit,
}

impl WidgetKind {
	pub const ALL: [WidgetKind; 10] = [
		Self::TextInput,
		Self::PasswordInput,
		Self::Textarea,
		Self::CharacterCount,
		Self::Checkbox,
		Self::Checkboxes,
		Self::Radios,
		Self::DateInput,
		Self::FileUpload,
		Self::Submit,
	];

	/// Template rendered for this component unless overridden in settings
	///
	/// # Examples
	///
	/// ```
	/// use govuk_widgets::WidgetKind;
	///
	/// assert_eq!(WidgetKind::Radios.default_template(), "govuk/radios.html");
	/// ```
	pub fn default_template(self) -> &'static str {
		match self {
			Self::TextInput | Self::PasswordInput => "govuk/input.html",
			Self::Textarea => "govuk/textarea.html",
			Self::CharacterCount => "govuk/character-count.html",
			Self::Checkbox => "govuk/checkbox.html",
			Self::Checkboxes => "govuk/checkboxes.html",
			Self::Radios => "govuk/radios.html",
			Self::DateInput => "govuk/date-input.html",
			Self::FileUpload => "govuk/file-upload.html",
			Self::Submit => "govuk/button.html",
		}
	}

	/// Mapping variant used to build this component's params
	pub fn mapping(self) -> ParamMapping {
		match self {
			Self::Checkboxes | Self::Radios => ParamMapping::Iterable,
			_ => ParamMapping::Plain,
		}
	}

	/// Settings key for this component
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TextInput => "text_input",
			Self::PasswordInput => "password_input",
			Self::Textarea => "textarea",
			Self::CharacterCount => "character_count",
			Self::Checkbox => "checkbox",
			Self::Checkboxes => "checkboxes",
			Self::Radios => "radios",
			Self::DateInput => "date_input",
			Self::FileUpload => "file_upload",
			Self::Submit => "submit",
		}
	}
}

impl fmt::Display for WidgetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
