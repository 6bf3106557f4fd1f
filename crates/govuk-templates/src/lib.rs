//! # GOV.UK Templates
//!
//! Rendering boundary for GOV.UK Frontend component params using Tera.
//!
//! ## Features
//!
//! - [`TemplateRenderer`]: the interface the form layer renders through
//! - [`TeraRenderer`]: Tera implementation exposing params as `params`
//! - `govuk_error_summary` template function for error summaries
//! - [`SafeString`] for already-escaped output

pub mod error;
pub mod functions;
pub mod renderer;
pub mod safe_string;

pub use error::{TemplateError, TemplateResult};
pub use functions::ErrorSummaryFunction;
pub use renderer::{PARAMS_KEY, TemplateRenderer, TeraRenderer};
pub use safe_string::SafeString;
