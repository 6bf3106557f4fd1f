//! Tera-based component renderer
//!
//! Component templates receive the mapped params under the fixed name
//! `params`, mirroring the `params` argument of the GOV.UK Frontend macros:
//!
//! ```tera
//! {% import "govuk/macros.html" as govuk %}
//! {{ govuk::input(params=params) }}
//! ```
//!
//! # Examples
//!
//! ```
//! use govuk_params::to_tree;
//! use govuk_templates::{TemplateRenderer, TeraRenderer};
//! use serde_json::json;
//!
//! let mut renderer = TeraRenderer::new();
//! renderer
//! 	.add_raw_template(
//! 		"govuk/input.html",
//! 		r#"<input id="{{ params.id }}" name="{{ params.name }}">"#,
//! 	)
//! 	.unwrap();
//!
//! let params = to_tree(json!({"id": "email", "name": "email"})).unwrap();
//! let html = renderer.render("govuk/input.html", &params).unwrap();
//! assert_eq!(html.as_str(), r#"<input id="email" name="email">"#);
//! ```

use crate::error::{TemplateError, TemplateResult};
use crate::functions::ErrorSummaryFunction;
use crate::safe_string::SafeString;
use govuk_params::{Merger, ParamTree};
use tera::{Context, Tera};

/// Name the params tree is exposed under in component templates
pub const PARAMS_KEY: &str = "params";

/// Renders a component template with a params tree
pub trait TemplateRenderer: Send + Sync {
	/// Render `template` with `params` bound to [`PARAMS_KEY`]
	fn render(&self, template: &str, params: &ParamTree) -> TemplateResult<SafeString>;

	/// Whether `template` can be rendered
	fn has_template(&self, template: &str) -> bool;
}

/// Tera-backed [`TemplateRenderer`]
///
/// Each renderer owns its own [`Tera`] instance.
#[derive(Debug, Default)]
pub struct TeraRenderer {
	tera: Tera,
}

impl TeraRenderer {
	/// Create a renderer without templates
	pub fn new() -> Self {
		Self::default()
	}

	/// Load every template matching `glob`, e.g. `"templates/**/*.html"`
	pub fn from_glob(glob: &str) -> TemplateResult<Self> {
		let tera = Tera::new(glob).map_err(TemplateError::Load)?;
		tracing::debug!(
			glob,
			count = tera.get_template_names().count(),
			"loaded component templates"
		);
		Ok(Self { tera })
	}

	/// Register a template from a string
	pub fn add_raw_template(&mut self, name: &str, content: &str) -> TemplateResult<()> {
		self.tera
			.add_raw_template(name, content)
			.map_err(TemplateError::Load)
	}

	/// Load every template matching `glob` into this renderer
	pub fn extend_from_glob(&mut self, glob: &str) -> TemplateResult<()> {
		let other = Tera::new(glob).map_err(TemplateError::Load)?;
		self.tera.extend(&other).map_err(TemplateError::Load)
	}

	/// Expose the error summary builder to templates as
	/// `govuk_error_summary(errors=..., id_map=..., params=...)`
	pub fn register_error_summary(&mut self, merger: Merger, title: impl Into<String>) {
		self.tera.register_function(
			ErrorSummaryFunction::NAME,
			ErrorSummaryFunction::new(merger, title),
		);
	}
}

impl TemplateRenderer for TeraRenderer {
	fn render(&self, template: &str, params: &ParamTree) -> TemplateResult<SafeString> {
		if !self.has_template(template) {
			return Err(TemplateError::TemplateNotFound(template.to_string()));
		}

		let mut context = Context::new();
		context.insert(PARAMS_KEY, params);

		self.tera
			.render(template, &context)
			.map(SafeString::from)
			.map_err(|source| {
				tracing::warn!(template, error = %source, "component template failed to render");
				TemplateError::Render {
					template: template.to_string(),
					source,
				}
			})
	}

	fn has_template(&self, template: &str) -> bool {
		self.tera.get_template_names().any(|name| name == template)
	}
}
