use std::path::PathBuf;

#[derive(Debug)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf },
    Write { target: PathBuf, content: String },
    CreateDirectory { target: PathBuf },
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            TemplateOperation::Copy { target, .. } => Some(target),
            TemplateOperation::Write { target, .. } => Some(target),
            TemplateOperation::CreateDirectory { target } => Some(target),
            TemplateOperation::Ignore { .. } => None,
        }
    }

    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }
            TemplateOperation::CreateDirectory { target } => {
                format!("Creating directory '{}'", target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("Writing to '{}'", target.display())
            }
            TemplateOperation::Ignore { source } => {
                format!("Ignoring '{}' (matches ignore pattern)", source.display())
            }
        }
    }
}
