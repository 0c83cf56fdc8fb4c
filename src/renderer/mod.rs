//! Template rendering.
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: the MiniJinja-backed implementation
//! - `filters`: custom filters available to templates

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

use crate::constants::CONTEXT_NAMESPACE;
use serde_json::json;

/// Wraps resolved answers the way reference templates address them
/// (`{{ cookiecutter.project_slug }}`).
pub fn template_context(answers: &serde_json::Value) -> serde_json::Value {
    json!({ CONTEXT_NAMESPACE: answers })
}
