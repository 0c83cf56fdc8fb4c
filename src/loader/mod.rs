use crate::error::Result;
use crate::loader::{git::GitLoader, local::LocalLoader};
use std::path::PathBuf;

pub mod git;
pub mod interface;
pub mod local;

pub use interface::{LoadedTemplate, TemplateLoader};

#[derive(Debug)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl TemplateSource {
    pub fn from_string(s: &str) -> Self {
        if GitLoader::<&str>::is_git_url(s) {
            TemplateSource::Git(s.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

/// Resolves a template path or git URL and loads the template.
pub fn get_template(s: &str) -> Result<LoadedTemplate> {
    let source = TemplateSource::from_string(s);
    log::debug!("Loading template from {source}");

    match source {
        TemplateSource::Git(repo) => GitLoader::new(repo).load(),
        TemplateSource::FileSystem(path) => LocalLoader::new(path).load(),
    }
}
