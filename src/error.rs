use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to parse .stencilignore file. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to clone repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Prompt failed: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    /// Input that cannot be turned into a project (missing project name, unsafe module name).
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A module would be materialized onto a path that already exists.
    #[error("Cannot materialize module: destination '{path}' already exists.")]
    DestinationExists { path: String },

    /// Two requested modules normalize to the same lower-cased name.
    #[error("Module '{module}' collides with an earlier module named '{previous}'.")]
    DuplicateModule { module: String, previous: String },

    #[error("Required tool '{tool}' is not available: {reason}")]
    MissingTool { tool: String, reason: String },

    #[error("Failed to read the post-generation payload: {0}.")]
    HookInputError(String),

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
