use govuk_templates::TemplateError;
use govuk_widgets::{ParamMapping, WidgetKind};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Template(#[from] TemplateError),
	#[error("Widget `{kind}` uses the {expected:?} mapping")]
	WidgetMismatch {
		kind: WidgetKind,
		expected: ParamMapping,
	},
	#[error("Invalid settings: {0}")]
	Settings(#[from] toml::de::Error),
	#[error("Failed to read settings: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
