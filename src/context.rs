//! Resolved generation parameters consumed by the materializer.
//!
//! The loader only ever sees plain values: placeholders have been substituted by
//! the renderer before anything here runs, so parsing never fails and never
//! touches the filesystem.

use crate::constants::{keys, CONTEXT_NAMESPACE, DISABLED_ANSWER, ENABLED_ANSWER};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;

/// Whether an optional API layer is kept in the generated project.
///
/// Only the exact answer `"no"` disables a layer. Anything else, including a
/// missing or unexpected value, keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiLayer {
    #[default]
    Enabled,
    Disabled,
}

impl ApiLayer {
    pub fn from_answer(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == DISABLED_ANSWER => ApiLayer::Disabled,
            _ => ApiLayer::Enabled,
        }
    }

    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            ApiLayer::Enabled
        } else {
            ApiLayer::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == ApiLayer::Enabled
    }

    /// The literal answer handed to templates.
    pub fn as_answer(self) -> &'static str {
        match self {
            ApiLayer::Enabled => ENABLED_ANSWER,
            ApiLayer::Disabled => DISABLED_ANSWER,
        }
    }
}

impl Display for ApiLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ApiLayer::Enabled => "enabled",
            ApiLayer::Disabled => "disabled",
        };
        write!(f, "{s}")
    }
}

/// Immutable description of one generation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationContext {
    modules: Vec<String>,
    sync_api: ApiLayer,
    async_api: ApiLayer,
    project_slug: Option<String>,
}

impl GenerationContext {
    pub fn new(modules: Vec<String>, sync_api: ApiLayer, async_api: ApiLayer) -> Self {
        Self { modules, sync_api, async_api, project_slug: None }
    }

    /// Builds a context from resolved answers.
    ///
    /// Accepts either the answers object itself or an object that nests them
    /// under the `cookiecutter` key.
    pub fn from_answers(answers: &Value) -> Self {
        let answers = match answers.get(CONTEXT_NAMESPACE) {
            Some(nested @ Value::Object(_)) => nested,
            _ => answers,
        };

        Self {
            modules: answers.get(keys::MODULES).map(parse_modules).unwrap_or_default(),
            sync_api: ApiLayer::from_answer(answers.get(keys::INCLUDE_SYNC_API)),
            async_api: ApiLayer::from_answer(answers.get(keys::INCLUDE_ASYNC_API)),
            project_slug: answers
                .get(keys::PROJECT_SLUG)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn sync_api(&self) -> ApiLayer {
        self.sync_api
    }

    pub fn async_api(&self) -> ApiLayer {
        self.async_api
    }

    pub fn project_slug(&self) -> Option<&str> {
        self.project_slug.as_deref()
    }

    /// Rejects module lists that cannot be materialized cleanly.
    ///
    /// Catches names that collide once lower-cased and names that would escape
    /// their layer directory. Runs before any filesystem mutation.
    pub fn validate_modules(&self) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for module in &self.modules {
            let normalized = module_dir_name(module);
            if normalized == "."
                || normalized == ".."
                || normalized.contains(['/', '\\'])
            {
                return Err(Error::ValidationError(format!(
                    "module name '{module}' is not a valid directory name"
                )));
            }
            if let Some(previous) = seen.get(&normalized) {
                return Err(Error::DuplicateModule {
                    module: module.clone(),
                    previous: previous.to_string(),
                });
            }
            seen.insert(normalized, module);
        }
        Ok(())
    }
}

/// The directory and file stem used for a module.
pub fn module_dir_name(module: &str) -> String {
    module.to_lowercase()
}

/// Splits a comma-separated module list, dropping blank entries.
pub fn split_modules(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes the `modules` answer, given either as a string or as an array.
pub fn parse_modules(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => split_modules(s),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => {
                    log::debug!("Skipping non-scalar module entry: {item}");
                    None
                }
            })
            .filter(|m| !m.is_empty())
            .collect(),
        Value::Null => Vec::new(),
        other => {
            log::warn!("Unexpected modules value {other}, treating it as empty");
            Vec::new()
        }
    }
}
