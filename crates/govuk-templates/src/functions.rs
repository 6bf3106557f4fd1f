//! Template functions
//!
//! `govuk_error_summary` builds the error summary params from inside a
//! template:
//!
//! ```tera
//! {% set summary = govuk_error_summary(errors=form_errors, id_map=form_ids) %}
//! {{ govuk::error_summary(params=summary) }}
//! ```

use govuk_params::{Merger, ParamTree};
use govuk_widgets::{ErrorTree, IdMap, error_summary};
use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Tera function producing error summary params
///
/// Arguments:
/// - `errors`: the nested error tree (defaults to no errors)
/// - `id_map`: object mapping field names to DOM ids
/// - `params`: overrides merged over the generated params
#[derive(Debug, Clone)]
pub struct ErrorSummaryFunction {
	merger: Merger,
	title: String,
}

impl ErrorSummaryFunction {
	/// Name the function is registered under
	pub const NAME: &'static str = "govuk_error_summary";

	pub fn new(merger: Merger, title: impl Into<String>) -> Self {
		Self {
			merger,
			title: title.into(),
		}
	}
}

impl tera::Function for ErrorSummaryFunction {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let errors = args.get("errors").cloned().map(ErrorTree::from);
		let id_map = match args.get("id_map") {
			Some(Value::Object(map)) => map
				.iter()
				.filter_map(|(name, id)| id.as_str().map(|id| (name.clone(), id.to_string())))
				.collect(),
			Some(Value::Null) | None => IdMap::new(),
			Some(_) => {
				return Err(tera::Error::msg(
					"govuk_error_summary: `id_map` must be an object",
				));
			}
		};
		let overrides = match args.get("params") {
			Some(Value::Object(map)) => map.clone(),
			Some(Value::Null) | None => ParamTree::new(),
			Some(_) => {
				return Err(tera::Error::msg(
					"govuk_error_summary: `params` must be an object",
				));
			}
		};

		let errors = errors.unwrap_or_else(|| ErrorTree::Fields(Vec::new()));
		let summary = error_summary(&self.merger, &errors, &id_map, &self.title, overrides);
		Ok(Value::Object(summary))
	}
}
