//! Configuration loading and management

use crate::config::layout::Layout;
use crate::constants::{CONFIG_FILENAMES, DEFAULT_PROJECT_DIR, DEFAULT_REQUIRED_TOOLS};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Template configuration. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigV1 {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default = "get_default_required_tools")]
    pub required_tools: Vec<String>,
    /// Reject colliding module names before the filesystem is touched.
    #[serde(default)]
    pub strict_modules: bool,
    /// Globs (relative to the template root) copied verbatim instead of rendered.
    #[serde(default)]
    pub copy_without_render: Vec<String>,
    #[serde(default = "get_default_project_dir")]
    pub project_dir: String,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            required_tools: get_default_required_tools(),
            strict_modules: false,
            copy_without_render: Vec::new(),
            project_dir: get_default_project_dir(),
        }
    }
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        if self.project_dir.trim().is_empty() {
            return Err(Error::ConfigValidation("project_dir must not be empty".into()));
        }
        if self.required_tools.iter().any(|tool| tool.trim().is_empty()) {
            return Err(Error::ConfigValidation(
                "required_tools must not contain empty entries".into(),
            ));
        }
        self.layout.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Loads the first config file found in `template_root`.
    ///
    /// A template without a config file gets [`ConfigV1::default`], which
    /// describes the reference backend template.
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if config_file_path.exists() {
                log::debug!("Loading configuration from {}", config_file_path.display());
                let content = std::fs::read_to_string(config_file_path)?;
                let config: Config = match *config_file_name {
                    "stencil.json" => serde_json::from_str(&content)?,
                    "stencil.yaml" | "stencil.yml" => serde_yaml::from_str(&content)?,
                    _ => unreachable!(),
                };

                return Ok(config);
            }
        }

        log::debug!(
            "No configuration file in '{}' (tried {}), using defaults",
            template_root.display(),
            CONFIG_FILENAMES.join(", ")
        );
        Ok(Config::V1(ConfigV1::default()))
    }
}

fn get_default_required_tools() -> Vec<String> {
    DEFAULT_REQUIRED_TOOLS.iter().map(|tool| tool.to_string()).collect()
}

fn get_default_project_dir() -> String {
    DEFAULT_PROJECT_DIR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config, ConfigV1::default());
        assert_eq!(config.required_tools, vec!["docker"]);
        assert_eq!(config.project_dir, "{{ cookiecutter.project_slug }}");
    }

    #[test]
    fn loads_yaml_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("stencil.yaml"),
            r#"schemaVersion: v1
required_tools: []
strict_modules: true
layout:
  controller_extension: ts
"#,
        )
        .unwrap();

        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert!(config.required_tools.is_empty());
        assert!(config.strict_modules);
        assert_eq!(config.layout.controller_extension, "ts");
        assert_eq!(config.layout.sync_api_dir, "api");
    }

    #[test]
    fn json_config_takes_precedence() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("stencil.json"),
            r#"{"schemaVersion": "v1", "project_dir": "service"}"#,
        )
        .unwrap();
        std::fs::write(
            tmp.path().join("stencil.yml"),
            "schemaVersion: v1\nproject_dir: ignored\n",
        )
        .unwrap();

        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config.project_dir, "service");
    }

    #[test]
    fn unknown_schema_version_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("stencil.yaml"), "schemaVersion: v9\n").unwrap();
        assert!(matches!(Config::load_config(tmp.path()), Err(Error::YAMLParseError(_))));
    }

    #[test]
    fn validate_rejects_empty_project_dir() {
        let config = ConfigV1 { project_dir: "  ".into(), ..ConfigV1::default() };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }
}
