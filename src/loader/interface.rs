use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A template ready to be rendered.
///
/// Remote templates live in a temporary checkout that is removed when this
/// value is dropped.
#[derive(Debug)]
pub struct LoadedTemplate {
    root: PathBuf,
    _checkout: Option<TempDir>,
}

impl LoadedTemplate {
    pub fn local(root: PathBuf) -> Self {
        Self { root, _checkout: None }
    }

    pub fn checkout(checkout: TempDir, root: PathBuf) -> Self {
        Self { root, _checkout: Some(checkout) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    fn load(&self) -> Result<LoadedTemplate>;
}
