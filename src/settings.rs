//! Form rendering settings
//!
//! Settings are plain `serde` structs, usually loaded from a TOML file:
//!
//! ```toml
//! error_summary_title = "Check your answers"
//! template_dirs = ["templates/**/*.html"]
//!
//! [templates]
//! radios = "components/radios.html"
//!
//! [merge]
//! sequences = "append"
//! mappings = "merge"
//! ```

use crate::error::Result;
use govuk_params::MergeConfig;
use govuk_widgets::{DEFAULT_ERROR_SUMMARY_TITLE, WidgetKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Settings for [`GovForms`](crate::GovForms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsSettings {
	/// `titleText` of the error summary
	pub error_summary_title: String,

	/// Globs of component templates to load, e.g. `"templates/**/*.html"`
	pub template_dirs: Vec<String>,

	/// Template overrides keyed by component (`text_input`, `radios`, ...)
	pub templates: HashMap<String, String>,

	/// Strategy set for the deep merge engine
	pub merge: MergeConfig,
}

impl Default for FormsSettings {
	fn default() -> Self {
		Self {
			error_summary_title: DEFAULT_ERROR_SUMMARY_TITLE.to_string(),
			template_dirs: Vec::new(),
			templates: HashMap::new(),
			merge: MergeConfig::default(),
		}
	}
}

impl FormsSettings {
	/// Parse settings from TOML
	///
	/// # Examples
	///
	/// ```
	/// use govuk_forms::FormsSettings;
	/// use govuk_forms::widgets::WidgetKind;
	///
	/// let settings = FormsSettings::from_toml_str(r#"
	/// error_summary_title = "Check your answers"
	///
	/// [templates]
	/// radios = "components/radios.html"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.error_summary_title, "Check your answers");
	/// assert_eq!(settings.template_for(WidgetKind::Radios), "components/radios.html");
	/// assert_eq!(settings.template_for(WidgetKind::TextInput), "govuk/input.html");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Read and parse a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading form settings");
		Self::from_toml_str(&content)
	}

	/// Template used for `kind`
	pub fn template_for(&self, kind: WidgetKind) -> &str {
		self.templates
			.get(kind.as_str())
			.map(String::as_str)
			.unwrap_or_else(|| kind.default_template())
	}
}
