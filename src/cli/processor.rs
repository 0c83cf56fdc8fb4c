use crate::{
    error::{Error, Result},
    ioutils::create_dir_all,
    template::{operation::TemplateOperation, processor::TemplateProcessor},
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Applies the operations a [`TemplateProcessor`] derives from a template tree.
pub struct FileProcessor<'a> {
    processor: TemplateProcessor<'a, PathBuf>,
}

impl<'a> FileProcessor<'a> {
    pub fn new(processor: TemplateProcessor<'a, PathBuf>) -> Self {
        Self { processor }
    }

    /// Processes every entry below `root`, parents before children.
    ///
    /// Entries whose path cannot be rendered are skipped with a warning; any
    /// other failure aborts the walk.
    pub fn process_all_files(&self, root: &Path) -> Result<()> {
        for dir_entry in WalkDir::new(root).sort_by_file_name() {
            let template_entry = dir_entry?.path().to_path_buf();
            match self.processor.process(&template_entry) {
                Ok(TemplateOperation::Ignore { source }) => {
                    log::debug!("Ignoring '{}'", source.display());
                }
                Ok(file_operation) => {
                    if let Err(e) = self.handle_file_operation(&file_operation) {
                        if let Some(target) = file_operation.target_path() {
                            log::error!("Failed to create '{}': {e}", target.display());
                        }
                        return Err(e);
                    }
                    log::debug!("{}", file_operation.get_message());
                }
                Err(e @ Error::ProcessError { .. }) => log::warn!("{e}"),
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn handle_file_operation(&self, file_operation: &TemplateOperation) -> Result<()> {
        match file_operation {
            TemplateOperation::Write { target, content } => {
                ensure_parent(target)?;
                std::fs::write(target, content).map_err(Error::from)
            }
            TemplateOperation::Copy { source, target } => {
                ensure_parent(target)?;
                std::fs::copy(source, target).map(|_| ()).map_err(Error::from)
            }
            TemplateOperation::CreateDirectory { target } => create_dir_all(target),
            TemplateOperation::Ignore { .. } => Ok(()),
        }
    }
}

fn ensure_parent(target: &Path) -> Result<()> {
    match target.parent() {
        Some(parent) => create_dir_all(parent),
        None => Ok(()),
    }
}
