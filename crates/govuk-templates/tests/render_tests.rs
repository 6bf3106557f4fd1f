//! Rendering boundary tests

use govuk_params::{Merger, to_tree};
use govuk_templates::{TemplateError, TemplateRenderer, TeraRenderer};
use rstest::rstest;
use serde_json::json;
use std::fs;

#[rstest]
fn test_templates_loaded_from_directory() {
	let dir = tempfile::tempdir().unwrap();
	fs::create_dir_all(dir.path().join("govuk")).unwrap();
	fs::write(
		dir.path().join("govuk/textarea.html"),
		concat!(
			r#"<textarea name="{{ params.name }}" "#,
			r#"rows="{{ params.rows | default(value=5) }}"></textarea>"#,
		),
	)
	.unwrap();

	let glob = format!("{}/**/*.html", dir.path().display());
	let renderer = TeraRenderer::from_glob(&glob).unwrap();
	assert!(renderer.has_template("govuk/textarea.html"));

	let params = to_tree(json!({"name": "more-detail"})).unwrap();
	let html = renderer.render("govuk/textarea.html", &params).unwrap();
	assert_eq!(html.as_str(), r#"<textarea name="more-detail" rows="5"></textarea>"#);
}

#[rstest]
fn test_broken_template_fails_to_load() {
	let mut renderer = TeraRenderer::new();
	let err = renderer
		.add_raw_template("govuk/input.html", "{% if params.id %}")
		.unwrap_err();
	assert!(matches!(err, TemplateError::Load(_)));
}

#[rstest]
fn test_error_summary_function_in_template() {
	let mut renderer = TeraRenderer::new();
	renderer.register_error_summary(Merger::default(), "There is a problem");
	renderer
		.add_raw_template(
			"govuk/error-summary.html",
			concat!(
				"{% set summary = govuk_error_summary(errors=params.errors, id_map=params.ids) %}",
				"<h2>{{ summary.titleText }}</h2>",
				"{% for entry in summary.errorList %}",
				r#"<a href="{{ entry.href }}">{{ entry.text }}</a>"#,
				"{% endfor %}",
			),
		)
		.unwrap();

	let params = to_tree(json!({
		"errors": {"name": ["Enter your name"], "dob": {"year": ["Enter a year"]}},
		"ids": {"dob": "date-of-birth"},
	}))
	.unwrap();
	let html = renderer.render("govuk/error-summary.html", &params).unwrap();

	assert_eq!(
		html.as_str(),
		concat!(
			"<h2>There is a problem</h2>",
			r##"<a href="#name">Enter your name</a>"##,
			r##"<a href="#date-of-birth-year">Enter a year</a>"##,
		)
	);
}
