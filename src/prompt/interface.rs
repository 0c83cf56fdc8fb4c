//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library, so answer
//! collection can be driven by scripted providers in tests.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Shown and accepted on empty input; `None` makes the answer mandatory
    pub default: Option<String>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ConfirmationPrompter {}

impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter {}
