//! Field rendering entry point
//!
//! [`GovForms`] composes the pieces: settings, one [`Merger`] built from
//! them, and a [`TemplateRenderer`]. Nothing here is global; build one
//! `GovForms` at startup and share it.

use crate::error::{Error, Result};
use crate::settings::FormsSettings;
use govuk_params::{Merger, ParamTree};
use govuk_templates::{SafeString, TemplateRenderer, TeraRenderer};
use govuk_widgets::{
	ErrorTree, FormField, IdMap, IterableField, Kwargs, ParamMapping, WidgetKind, error_summary,
	prepare_iterable,
};
use serde_json::Value;

/// Maps and renders form fields as GOV.UK Frontend components
pub struct GovForms {
	settings: FormsSettings,
	merger: Merger,
	renderer: Box<dyn TemplateRenderer>,
}

impl GovForms {
	/// Compose from settings and a renderer
	pub fn new(settings: FormsSettings, renderer: impl TemplateRenderer + 'static) -> Self {
		Self {
			merger: Merger::new(settings.merge),
			settings,
			renderer: Box::new(renderer),
		}
	}

	/// Build a Tera renderer from `settings.template_dirs` and register the
	/// `govuk_error_summary` template function on it
	pub fn from_settings(settings: FormsSettings) -> Result<Self> {
		let merger = Merger::new(settings.merge);
		let mut renderer = TeraRenderer::new();
		for glob in &settings.template_dirs {
			renderer.extend_from_glob(glob)?;
		}
		renderer.register_error_summary(merger, settings.error_summary_title.clone());
		Ok(Self::new(settings, renderer))
	}

	pub fn settings(&self) -> &FormsSettings {
		&self.settings
	}

	pub fn merger(&self) -> &Merger {
		&self.merger
	}

	pub fn renderer(&self) -> &dyn TemplateRenderer {
		self.renderer.as_ref()
	}

	/// Params for `field` rendered as `kind`.
	///
	/// `id` defaults to the field's own id when the caller does not pass one.
	/// Fails with [`Error::WidgetMismatch`] when `kind` is an option group.
	///
	/// # Examples
	///
	/// ```
	/// use govuk_forms::{FormsSettings, GovForms};
	/// use govuk_forms::templates::TeraRenderer;
	/// use govuk_forms::widgets::{BoundField, Kwargs, WidgetKind};
	/// use serde_json::json;
	///
	/// let forms = GovForms::new(FormsSettings::default(), TeraRenderer::new());
	/// let field = BoundField::new("email").with_auto_id().required();
	///
	/// let mut kwargs = Kwargs::new();
	/// kwargs.insert("required".to_string(), json!(true));
	/// let params = forms.map_field(WidgetKind::TextInput, &field, kwargs).unwrap();
	///
	/// assert_eq!(params["id"], json!("email"));
	/// assert_eq!(params["attributes"], json!({"required": "required"}));
	/// assert!(forms.map_field(WidgetKind::Radios, &field, Kwargs::new()).is_err());
	/// ```
	pub fn map_field<F>(&self, kind: WidgetKind, field: &F, mut kwargs: Kwargs) -> Result<ParamTree>
	where
		F: FormField + ?Sized,
	{
		let mapping = expect_mapping(kind, ParamMapping::Plain)?;
		if !kwargs.contains_key("id") {
			kwargs.insert("id".to_string(), field.id().map_or(Value::Null, Value::from));
		}
		Ok(mapping.map(&self.merger, field, kwargs))
	}

	/// Params for an option group rendered as `kind`.
	///
	/// Items are built from the field's options before mapping. Fails with
	/// [`Error::WidgetMismatch`] when `kind` is a single-value component.
	pub fn map_iterable_field<F>(
		&self,
		kind: WidgetKind,
		field: &F,
		kwargs: Kwargs,
	) -> Result<ParamTree>
	where
		F: IterableField + ?Sized,
	{
		let mapping = expect_mapping(kind, ParamMapping::Iterable)?;
		let kwargs = prepare_iterable(field, kwargs);
		Ok(mapping.map(&self.merger, field, kwargs))
	}

	/// Render `field` with the template configured for `kind`
	pub fn render_field<F>(&self, kind: WidgetKind, field: &F, kwargs: Kwargs) -> Result<SafeString>
	where
		F: FormField + ?Sized,
	{
		let params = self.map_field(kind, field, kwargs)?;
		self.render(kind, &params)
	}

	/// Render an option group with the template configured for `kind`
	pub fn render_iterable_field<F>(
		&self,
		kind: WidgetKind,
		field: &F,
		kwargs: Kwargs,
	) -> Result<SafeString>
	where
		F: IterableField + ?Sized,
	{
		let params = self.map_iterable_field(kind, field, kwargs)?;
		self.render(kind, &params)
	}

	/// Params for the error summary component, titled from settings
	pub fn error_summary(
		&self,
		errors: &ErrorTree,
		id_map: &IdMap,
		overrides: ParamTree,
	) -> ParamTree {
		error_summary(
			&self.merger,
			errors,
			id_map,
			&self.settings.error_summary_title,
			overrides,
		)
	}

	fn render(&self, kind: WidgetKind, params: &ParamTree) -> Result<SafeString> {
		let template = self.settings.template_for(kind);
		tracing::trace!(%kind, template, "rendering component");
		Ok(self.renderer.render(template, params)?)
	}
}

fn expect_mapping(kind: WidgetKind, entry: ParamMapping) -> Result<ParamMapping> {
	let expected = kind.mapping();
	if expected == entry {
		Ok(expected)
	} else {
		tracing::warn!(%kind, ?expected, "widget mapped through the wrong entry point");
		Err(Error::WidgetMismatch { kind, expected })
	}
}

impl std::fmt::Debug for GovForms {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GovForms")
			.field("settings", &self.settings)
			.field("merger", &self.merger)
			.finish_non_exhaustive()
	}
}
