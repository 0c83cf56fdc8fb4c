use crate::constants::layout as defaults;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Names of every directory and file the materializer touches.
///
/// All paths are relative: `source_dir` to the project root, everything else
/// to the source directory (or, for `controllers_dir`, to the sync API dir).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub source_dir: String,
    pub template_layers: Vec<String>,
    pub example_dir: String,
    pub presentation_dir: String,
    pub sync_api_dir: String,
    pub async_api_dir: String,
    pub controllers_dir: String,
    pub controller_template: String,
    pub controller_extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_dir: defaults::SOURCE_DIR.to_string(),
            template_layers: defaults::TEMPLATE_LAYERS
                .iter()
                .map(|layer| layer.to_string())
                .collect(),
            example_dir: defaults::EXAMPLE_DIR.to_string(),
            presentation_dir: defaults::PRESENTATION_DIR.to_string(),
            sync_api_dir: defaults::SYNC_API_DIR.to_string(),
            async_api_dir: defaults::ASYNC_API_DIR.to_string(),
            controllers_dir: defaults::CONTROLLERS_DIR.to_string(),
            controller_template: defaults::CONTROLLER_TEMPLATE.to_string(),
            controller_extension: defaults::CONTROLLER_EXTENSION.to_string(),
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("source_dir", &self.source_dir),
            ("example_dir", &self.example_dir),
            ("presentation_dir", &self.presentation_dir),
            ("sync_api_dir", &self.sync_api_dir),
            ("async_api_dir", &self.async_api_dir),
            ("controllers_dir", &self.controllers_dir),
            ("controller_template", &self.controller_template),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "layout.{name} must not be empty"
                )));
            }
        }
        if self.template_layers.iter().any(|layer| layer.trim().is_empty()) {
            return Err(Error::ConfigValidation(
                "layout.template_layers must not contain empty entries".into(),
            ));
        }
        if self.controller_template.contains(['/', '\\']) {
            return Err(Error::ConfigValidation(
                "layout.controller_template must be a file stem, not a path".into(),
            ));
        }
        if self.sync_api_dir == self.async_api_dir {
            return Err(Error::ConfigValidation(
                "layout.sync_api_dir and layout.async_api_dir must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_dir)
    }

    /// `<src>/<layer>/<example>` for every template layer.
    pub fn example_dirs(&self, project_root: &Path) -> Vec<PathBuf> {
        let source_root = self.source_root(project_root);
        self.template_layers
            .iter()
            .map(|layer| source_root.join(layer).join(&self.example_dir))
            .collect()
    }

    pub fn sync_api_root(&self, project_root: &Path) -> PathBuf {
        self.source_root(project_root)
            .join(&self.presentation_dir)
            .join(&self.sync_api_dir)
    }

    pub fn async_api_root(&self, project_root: &Path) -> PathBuf {
        self.source_root(project_root)
            .join(&self.presentation_dir)
            .join(&self.async_api_dir)
    }

    pub fn controllers_root(&self, project_root: &Path) -> PathBuf {
        self.sync_api_root(project_root).join(&self.controllers_dir)
    }

    /// File name of a controller with the given stem, e.g. `billing.py`.
    pub fn controller_file_name(&self, stem: &str) -> String {
        if self.controller_extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{}", self.controller_extension)
        }
    }

    pub fn controller_template_path(&self, project_root: &Path) -> PathBuf {
        self.controllers_root(project_root)
            .join(self.controller_file_name(&self.controller_template))
    }
}
