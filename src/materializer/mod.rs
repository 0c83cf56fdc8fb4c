//! Post-generation module materialization.
//!
//! Turns the generic `example` scaffold of a rendered project into one subtree
//! per requested module, in three ordered phases:
//!
//! 1. prune the API layers that were not requested,
//! 2. copy every `example` subtree and the template controller once per module,
//! 3. delete the `example` subtrees.
//!
//! Every step checks that its source exists and silently skips otherwise. Any
//! filesystem error aborts the pass; changes already made stay on disk.

pub mod operation;

use crate::{
    config::Layout,
    context::{module_dir_name, ApiLayer, GenerationContext},
    error::{Error, Result},
    ext::PathExt,
    ioutils::{copy_dir_all, write_new_file},
};
use std::fs;
use std::path::{Path, PathBuf};

pub use operation::MaterializeOperation;

pub struct Materializer {
    project_root: PathBuf,
    layout: Layout,
    dry_run: bool,
    strict: bool,
    /// Dry-run bookkeeping, so later phases see the effect of earlier ones.
    simulated_created: Vec<PathBuf>,
    simulated_removed: Vec<PathBuf>,
}

impl Materializer {
    /// Creates a materializer for the project rooted at `project_root`.
    pub fn new<P: Into<PathBuf>>(project_root: P, layout: Layout) -> Self {
        Self {
            project_root: project_root.into(),
            layout,
            dry_run: false,
            strict: false,
            simulated_created: Vec::new(),
            simulated_removed: Vec::new(),
        }
    }

    /// Log every operation without touching the filesystem.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate module names and destinations before the first mutation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Runs the whole pass: prune, materialize every module in order, clean up.
    pub fn run(&mut self, context: &GenerationContext) -> Result<Vec<MaterializeOperation>> {
        log::debug!(
            "Materializing {} module(s) in {} (sync API {}, async API {})",
            context.modules().len(),
            self.project_root.display(),
            context.sync_api(),
            context.async_api()
        );

        if self.strict {
            context.validate_modules()?;
            self.check_destinations(context)?;
        }

        let mut applied = self.prune_api_layers(context)?;
        for module in context.modules() {
            applied.extend(self.materialize_module(module)?);
        }
        applied.extend(self.cleanup_examples()?);
        Ok(applied)
    }

    /// Deletes the API layer subtrees that were not requested.
    pub fn prune_api_layers(
        &mut self,
        context: &GenerationContext,
    ) -> Result<Vec<MaterializeOperation>> {
        let layers = [
            (context.sync_api(), self.layout.sync_api_root(&self.project_root)),
            (context.async_api(), self.layout.async_api_root(&self.project_root)),
        ];

        let mut applied = Vec::new();
        for (layer, path) in layers {
            if layer == ApiLayer::Enabled {
                continue;
            }
            if !self.exists(&path) {
                log::debug!("API layer {} already absent, skipping", path.display());
                continue;
            }
            applied.push(self.apply(MaterializeOperation::RemoveTree { target: path })?);
        }
        Ok(applied)
    }

    /// Copies every `example` subtree and the template controller for one module.
    pub fn materialize_module(&mut self, module: &str) -> Result<Vec<MaterializeOperation>> {
        let name = module_dir_name(module);
        let mut applied = Vec::new();

        for example in self.layout.example_dirs(&self.project_root) {
            if !self.exists(&example) {
                log::debug!("Template subtree {} not found, skipping", example.display());
                continue;
            }
            let target = sibling(&example, &name);
            applied.push(self.apply(MaterializeOperation::CopyTree { source: example, target })?);
        }

        let template = self.layout.controller_template_path(&self.project_root);
        if self.exists(&template) {
            let content = fs::read_to_string(&template)?
                .replace(&self.layout.controller_template, &name);
            let target = sibling(&template, &self.layout.controller_file_name(&name));
            applied.push(self.apply(MaterializeOperation::WriteController {
                source: template,
                target,
                content,
            })?);
        } else {
            log::debug!("Controller template {} not found, skipping", template.display());
        }

        Ok(applied)
    }

    /// Deletes the `example` subtrees. The template controller is kept.
    pub fn cleanup_examples(&mut self) -> Result<Vec<MaterializeOperation>> {
        let mut applied = Vec::new();
        for example in self.layout.example_dirs(&self.project_root) {
            if self.exists(&example) {
                applied.push(self.apply(MaterializeOperation::RemoveTree { target: example })?);
            }
        }
        Ok(applied)
    }

    /// Fails with [`Error::DestinationExists`] if any module target is already taken.
    fn check_destinations(&self, context: &GenerationContext) -> Result<()> {
        let examples: Vec<PathBuf> = self
            .layout
            .example_dirs(&self.project_root)
            .into_iter()
            .filter(|example| example.exists())
            .collect();
        let template = self.layout.controller_template_path(&self.project_root);
        let controller_survives = context.sync_api().is_enabled() && template.exists();

        for module in context.modules() {
            let name = module_dir_name(module);
            let mut targets: Vec<PathBuf> =
                examples.iter().map(|example| sibling(example, &name)).collect();
            if controller_survives {
                targets.push(sibling(&template, &self.layout.controller_file_name(&name)));
            }
            if let Some(taken) = targets.into_iter().find(|target| target.exists()) {
                return Err(Error::DestinationExists { path: taken.display().to_string() });
            }
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        if path.is_within_any(&self.simulated_created) {
            return true;
        }
        if path.is_within_any(&self.simulated_removed) {
            return false;
        }
        path.exists()
    }

    fn apply(&mut self, operation: MaterializeOperation) -> Result<MaterializeOperation> {
        log::debug!("Applying {}", operation.error_context());

        let result = if self.dry_run {
            self.simulate(&operation)
        } else {
            execute(&operation)
        };
        if let Err(e) = result {
            log::error!("Failed to {}: {e}", operation.error_context());
            return Err(e);
        }

        log::info!("{}", operation.get_message(self.dry_run));
        Ok(operation)
    }

    fn simulate(&mut self, operation: &MaterializeOperation) -> Result<()> {
        match operation {
            MaterializeOperation::RemoveTree { target } => {
                self.simulated_removed.push(target.clone());
            }
            MaterializeOperation::CopyTree { target, .. }
            | MaterializeOperation::WriteController { target, .. } => {
                if self.exists(target) {
                    return Err(Error::DestinationExists {
                        path: target.display().to_string(),
                    });
                }
                self.simulated_created.push(target.clone());
            }
        }
        Ok(())
    }
}

fn execute(operation: &MaterializeOperation) -> Result<()> {
    match operation {
        MaterializeOperation::RemoveTree { target } => {
            if target.is_dir() {
                fs::remove_dir_all(target)?;
            } else {
                fs::remove_file(target)?;
            }
        }
        MaterializeOperation::CopyTree { source, target } => copy_dir_all(source, target)?,
        MaterializeOperation::WriteController { target, content, .. } => {
            write_new_file(content, target)?
        }
    }
    Ok(())
}

/// `path` with its last component replaced by `name`.
fn sibling(path: &Path, name: &str) -> PathBuf {
    path.with_file_name(name)
}
