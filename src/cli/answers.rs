use crate::{
    constants::{defaults, keys, STDIN_INDICATOR},
    context::{parse_modules, split_modules, ApiLayer, GenerationContext},
    error::{Error, Result},
    ioutils::{parse_string_to_json, read_from},
    prompt::{ConfirmationConfig, PromptProvider, TextPromptConfig},
    renderer::filters::slugify,
};
use serde_json::{json, Map, Value};

/// Everything the project questions resolve to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectAnswers {
    pub project_name: String,
    pub description: String,
    pub project_slug: String,
    pub version: String,
    pub modules: Vec<String>,
    pub author: String,
    pub include_sync_api: bool,
    pub include_async_api: bool,
}

impl ProjectAnswers {
    /// The answers as the template engine sees them. Flags become `"yes"`/`"no"`.
    pub fn to_context(&self) -> Value {
        json!({
            keys::PROJECT_NAME: self.project_name,
            keys::DESCRIPTION: self.description,
            keys::PROJECT_SLUG: self.project_slug,
            keys::VERSION: self.version,
            keys::MODULES: self.modules,
            keys::AUTHOR: self.author,
            keys::INCLUDE_SYNC_API: ApiLayer::from_flag(self.include_sync_api).as_answer(),
            keys::INCLUDE_ASYNC_API: ApiLayer::from_flag(self.include_async_api).as_answer(),
        })
    }

    pub fn generation_context(&self) -> GenerationContext {
        GenerationContext::from_answers(&self.to_context())
    }
}

/// Resolves `--answers`: inline JSON, or `-` to read JSON from stdin.
pub fn read_preset_answers(cli_answers: Option<String>) -> Result<Map<String, Value>> {
    match cli_answers {
        None => Ok(Map::new()),
        Some(arg) if arg == STDIN_INDICATOR => parse_string_to_json(read_from(std::io::stdin())?),
        Some(arg) => parse_string_to_json(arg),
    }
}

/// Collects answers from `--answers` and, for whatever is still missing, from prompts.
pub struct AnswerCollector<'a, P: PromptProvider> {
    prompter: &'a P,
    non_interactive: bool,
}

impl<'a, P: PromptProvider> AnswerCollector<'a, P> {
    pub fn new(prompter: &'a P, non_interactive: bool) -> Self {
        Self { prompter, non_interactive }
    }

    pub fn collect_answers(&self, preset: &Map<String, Value>) -> Result<ProjectAnswers> {
        let project_name = self.text(preset, keys::PROJECT_NAME, "Project title", None)?;
        if project_name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".into()));
        }
        let description = self.text(
            preset,
            keys::DESCRIPTION,
            "Project description",
            Some(defaults::DESCRIPTION),
        )?;
        let version = self.text(preset, keys::VERSION, "Version", Some(defaults::VERSION))?;
        let modules = match preset.get(keys::MODULES) {
            Some(value) => parse_modules(value),
            None if self.non_interactive => Vec::new(),
            None => split_modules(&self.prompter.prompt_text(&TextPromptConfig {
                prompt: "Your subject area".to_string(),
                default: None,
            })?),
        };
        let author = self.text(
            preset,
            keys::AUTHOR,
            "Author (First name and last name)",
            Some(""),
        )?;
        let include_sync_api = self.confirm(
            preset,
            keys::INCLUDE_SYNC_API,
            "Include sync API?",
            defaults::INCLUDE_SYNC_API,
        )?;
        let include_async_api = self.confirm(
            preset,
            keys::INCLUDE_ASYNC_API,
            "Include async API?",
            defaults::INCLUDE_ASYNC_API,
        )?;

        let project_slug = match preset.get(keys::PROJECT_SLUG).and_then(Value::as_str) {
            Some(slug) => slug.to_string(),
            None => slugify(&project_name),
        };

        Ok(ProjectAnswers {
            project_name,
            description,
            project_slug,
            version,
            modules,
            author,
            include_sync_api,
            include_async_api,
        })
    }

    fn text(
        &self,
        preset: &Map<String, Value>,
        key: &str,
        prompt: &str,
        default: Option<&str>,
    ) -> Result<String> {
        if let Some(value) = preset.get(key) {
            return Ok(match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            });
        }
        if self.non_interactive {
            return default.map(str::to_string).ok_or_else(|| {
                Error::ValidationError(format!("'{key}' is required in non-interactive mode"))
            });
        }
        // Interactive sessions must answer questions whose default is empty.
        let default = default.filter(|d| !d.is_empty()).map(str::to_string);
        self.prompter.prompt_text(&TextPromptConfig { prompt: prompt.to_string(), default })
    }

    fn confirm(
        &self,
        preset: &Map<String, Value>,
        key: &str,
        prompt: &str,
        default: bool,
    ) -> Result<bool> {
        if let Some(value) = preset.get(key) {
            return Ok(match value {
                Value::Bool(b) => *b,
                other => ApiLayer::from_answer(Some(other)).is_enabled(),
            });
        }
        if self.non_interactive {
            return Ok(default);
        }
        self.prompter.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })
    }
}
