//! `stencil materialize`: runs the materializer against an already rendered project.
//!
//! Input is either a plain answers object or the payload scaffolding engines
//! hand to post-generation hooks:
//!
//! ```json
//! { "template_dir": "/path/to/template", "output_dir": "/path/to/project", "answers": { ... } }
//! ```

use crate::{
    cli::MaterializeArgs,
    config::{Config, Layout},
    constants::STDIN_INDICATOR,
    context::GenerationContext,
    error::{Error, Result},
    ioutils::read_from,
    materializer::Materializer,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// Data a post-generation hook receives on stdin.
#[derive(Debug, Deserialize)]
pub struct HookPayload {
    pub template_dir: Option<PathBuf>,
    /// Root of the generated project
    pub output_dir: PathBuf,
    pub answers: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MaterializeInput {
    Hook(HookPayload),
    Answers(serde_json::Map<String, Value>),
}

impl MaterializeInput {
    pub fn parse(raw: &str) -> Result<Self> {
        let input: MaterializeInput = serde_json::from_str(raw).map_err(|e| {
            Error::HookInputError(format!(
                "expected an answers object or a hook payload ({e})"
            ))
        })?;
        if let MaterializeInput::Hook(payload) = &input {
            if !payload.answers.is_object() {
                return Err(Error::HookInputError(format!(
                    "'answers' must be an object, got: {}",
                    payload.answers
                )));
            }
        }
        Ok(input)
    }

    pub fn context(&self) -> GenerationContext {
        match self {
            MaterializeInput::Hook(payload) => GenerationContext::from_answers(&payload.answers),
            MaterializeInput::Answers(map) => {
                GenerationContext::from_answers(&Value::Object(map.clone()))
            }
        }
    }

    fn output_dir(&self) -> Option<&PathBuf> {
        match self {
            MaterializeInput::Hook(payload) => Some(&payload.output_dir),
            MaterializeInput::Answers(_) => None,
        }
    }

    fn template_dir(&self) -> Option<&PathBuf> {
        match self {
            MaterializeInput::Hook(payload) => payload.template_dir.as_ref(),
            MaterializeInput::Answers(_) => None,
        }
    }
}

/// Main entry point for `stencil materialize`
pub fn run(args: MaterializeArgs) -> Result<()> {
    let raw = match args.answers.as_deref() {
        Some(STDIN_INDICATOR) => read_from(std::io::stdin())?,
        Some(inline) => inline.to_string(),
        None => {
            return Err(Error::HookInputError(
                "pass answers with --answers, or --answers - to read them from stdin".into(),
            ))
        }
    };
    let input = MaterializeInput::parse(&raw)?;

    let context = input.context();
    let project_root = args
        .project_dir
        .clone()
        .or_else(|| input.output_dir().cloned())
        .or_else(|| context.project_slug().map(PathBuf::from))
        .ok_or_else(|| {
            Error::HookInputError(
                "no project directory given and the input names neither output_dir nor project_slug"
                    .into(),
            )
        })?;
    if !project_root.is_dir() {
        return Err(Error::HookInputError(format!(
            "project directory '{}' does not exist",
            project_root.display()
        )));
    }

    let (layout, strict_modules) = match args.template.as_ref().or(input.template_dir()) {
        Some(template_dir) => {
            let Config::V1(config) = Config::load_config(template_dir)?;
            config.validate()?;
            (config.layout, config.strict_modules)
        }
        None => (Layout::default(), false),
    };

    let applied = Materializer::new(project_root.clone(), layout)
        .with_dry_run(args.dry_run)
        .with_strict(args.strict || strict_modules)
        .run(&context)?;

    let prefix = if args.dry_run { "[DRY RUN] " } else { "" };
    println!(
        "{prefix}Materialized {} module(s) in {} ({} operation(s)).",
        context.modules().len(),
        project_root.display(),
        applied.len()
    );
    Ok(())
}
