//! Constants used throughout the stencil application

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["stencil.json", "stencil.yaml", "stencil.yml"];

/// Ignore file name
pub const IGNORE_FILE: &str = ".stencilignore";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Template directory holding the generated project, relative to the template root
pub const DEFAULT_PROJECT_DIR: &str = "{{ cookiecutter.project_slug }}";

/// Key under which answers are exposed to templates
pub const CONTEXT_NAMESPACE: &str = "cookiecutter";

/// Tools that must be installed before a project is generated
pub const DEFAULT_REQUIRED_TOOLS: &[&str] = &["docker"];

/// The only answer that turns an API layer off
pub const DISABLED_ANSWER: &str = "no";

/// The answer written for an enabled API layer
pub const ENABLED_ANSWER: &str = "yes";

/// Answer keys shared by the prompts, the renderer and the materializer
pub mod keys {
    pub const PROJECT_NAME: &str = "project_name";
    pub const DESCRIPTION: &str = "description";
    pub const PROJECT_SLUG: &str = "project_slug";
    pub const VERSION: &str = "version";
    pub const MODULES: &str = "modules";
    pub const AUTHOR: &str = "author";
    pub const INCLUDE_SYNC_API: &str = "include_sync_api";
    pub const INCLUDE_ASYNC_API: &str = "include_async_api";
}

/// Defaults for the project questions
pub mod defaults {
    pub const DESCRIPTION: &str = "My awesome FastAPI project";
    pub const VERSION: &str = "0.1.0";
    pub const INCLUDE_SYNC_API: bool = true;
    pub const INCLUDE_ASYNC_API: bool = false;
}

/// Default project layout, relative to the generated project root
pub mod layout {
    pub const SOURCE_DIR: &str = "src";
    pub const TEMPLATE_LAYERS: &[&str] = &["application", "domain"];
    pub const EXAMPLE_DIR: &str = "example";
    pub const PRESENTATION_DIR: &str = "presentation";
    pub const SYNC_API_DIR: &str = "api";
    pub const ASYNC_API_DIR: &str = "async_api";
    pub const CONTROLLERS_DIR: &str = "v1/controllers";
    pub const CONTROLLER_TEMPLATE: &str = "healthcheck";
    pub const CONTROLLER_EXTENSION: &str = "py";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
