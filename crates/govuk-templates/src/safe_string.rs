/// Markup returned by a component template.
///
/// Params are escaped by Tera while rendering, so the output can be embedded
/// in a page as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeString(String);

impl SafeString {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for SafeString {
	fn from(markup: String) -> Self {
		SafeString(markup)
	}
}

impl std::fmt::Display for SafeString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
