//! # GOV.UK Forms
//!
//! Render form fields with GOV.UK Frontend components.
//!
//! Form libraries describe fields with names, labels, descriptions, values
//! and validation errors. GOV.UK Frontend macros expect a `params` tree with
//! fixed key names. This crate maps one onto the other:
//!
//! - **Deep merge** of caller overrides into field-derived params ([`params`])
//! - **Plain and option-group mapping** of fields to params ([`widgets`])
//! - **Error summaries** built from nested validation errors ([`widgets`])
//! - **Rendering** through Tera with params exposed as `params` ([`templates`])
//!
//! ## Quick Example
//!
//! ```
//! use govuk_forms::{FormsSettings, GovForms};
//! use govuk_forms::templates::TeraRenderer;
//! use govuk_forms::widgets::{BoundField, Kwargs, WidgetKind};
//!
//! let mut renderer = TeraRenderer::new();
//! renderer
//! 	.add_raw_template(
//! 		"govuk/input.html",
//! 		concat!(
//! 			r#"<label for="{{ params.id }}">{{ params.label.text }}</label>"#,
//! 			r#"<input id="{{ params.id }}" name="{{ params.name }}">"#,
//! 		),
//! 	)
//! 	.unwrap();
//!
//! let forms = GovForms::new(FormsSettings::default(), renderer);
//! let field = BoundField::new("full_name").with_auto_id();
//!
//! let html = forms.render_field(WidgetKind::TextInput, &field, Kwargs::new()).unwrap();
//! assert_eq!(
//! 	html.as_str(),
//! 	r#"<label for="full_name">Full Name</label><input id="full_name" name="full_name">"#
//! );
//! ```

pub mod error;
pub mod forms;
pub mod settings;

pub use error::{Error, Result};
pub use forms::GovForms;
pub use settings::FormsSettings;

/// Parameter trees and the deep merge engine
pub mod params {
	pub use govuk_params::*;
}

/// Field mapping and error summaries
pub mod widgets {
	pub use govuk_widgets::*;
}

/// Rendering boundary
pub mod templates {
	pub use govuk_templates::*;
}
