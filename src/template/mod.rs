//! Template tree rendering
//!
//! - `operation`: what happens to one template entry
//! - `processor`: maps template entries to operations

pub mod operation;
pub mod processor;

use crate::renderer::MiniJinjaRenderer;

/// Returns the renderer used for template trees.
pub fn get_template_engine() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new()
}
