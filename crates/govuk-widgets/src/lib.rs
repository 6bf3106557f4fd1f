//! Form field mapping for GOV.UK Frontend components
//!
//! This crate turns form fields into the params GOV.UK Frontend macros expect:
//! - Single-value fields (inputs, textareas, a single checkbox)
//! - Option groups (checkboxes, radios) with per-option overrides
//! - Nested validation errors flattened into an error summary
//!
//! Fields are read through the [`FormField`], [`IterableField`] and
//! [`SubField`] traits; [`BoundField`] and [`BoundChoice`] are ready-made
//! owned implementations.

pub mod bound_field;
pub mod errors;
pub mod field;
pub mod mapper;
pub mod widget;

pub use bound_field::{BoundChoice, BoundField};
pub use errors::{
	DEFAULT_ERROR_SUMMARY_TITLE, ErrorEntry, ErrorTree, IdMap, error_summary, flatten_errors,
	id_map_for,
};
pub use field::{FormField, IterableField, SubField};
pub use mapper::{
	Kwargs, ParamMapping, map_iterable, map_plain, normalize_boolean_attributes,
	prepare_iterable,
};
pub use widget::WidgetKind;
