/// Errors raised at the rendering boundary
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
	#[error("Template not found: {0}")]
	TemplateNotFound(String),
	#[error("Failed to render {template}: {source}")]
	Render {
		template: String,
		#[source]
		source: tera::Error,
	},
	#[error("Failed to load templates: {0}")]
	Load(#[source] tera::Error),
}

pub type TemplateResult<T> = Result<T, TemplateError>;
