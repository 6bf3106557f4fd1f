//! Parameter trees for GOV.UK Frontend component macros
//!
//! Every component macro takes a single `params` argument: a nested
//! key/value structure with fixed key names (`id`, `name`, `label`, `hint`,
//! `attributes`, `items`, `errorMessage`, ...). This crate provides:
//!
//! - [`ParamTree`], an insertion-ordered JSON object used for those params
//! - [`Merger`], the deep merge engine that folds caller overrides into
//!   field-derived defaults
//! - [`MergeConfig`], the immutable strategy set a [`Merger`] is built from
//!
//! ## Example
//!
//! ```
//! use govuk_params::{Merger, ParamTree};
//! use serde_json::json;
//!
//! let merger = Merger::default();
//! let base: ParamTree = json!({"label": {"text": "Name"}, "items": [1, 2]})
//! 	.as_object()
//! 	.cloned()
//! 	.unwrap();
//! let overlay: ParamTree = json!({"label": {"classes": "govuk-label--l"}, "items": [3]})
//! 	.as_object()
//! 	.cloned()
//! 	.unwrap();
//!
//! let merged = merger.merge(base, overlay);
//! assert_eq!(
//! 	serde_json::Value::Object(merged),
//! 	json!({"label": {"text": "Name", "classes": "govuk-label--l"}, "items": [1, 2, 3]})
//! );
//! ```

pub mod merge;
pub mod tree;

pub use merge::{MappingStrategy, MergeConfig, Merger, SequenceStrategy};
pub use tree::{ParamTree, is_truthy, string_form, text_node, to_tree};
