//! Interactive prompts for the project questions
//!
//! - `interface`: abstract prompt traits
//! - `dialoguer`: terminal implementation

pub mod dialoguer;
pub mod interface;

pub use interface::*;

use crate::prompt::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
