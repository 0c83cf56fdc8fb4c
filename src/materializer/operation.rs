use std::path::PathBuf;

/// A single filesystem change made by the materializer.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterializeOperation {
    /// A whole subtree was deleted (a pruned API layer or an `example` template).
    RemoveTree { target: PathBuf },
    /// A template subtree was deep-copied for a module.
    CopyTree { source: PathBuf, target: PathBuf },
    /// The template controller was duplicated with the module name substituted.
    WriteController { source: PathBuf, target: PathBuf, content: String },
}

impl MaterializeOperation {
    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            MaterializeOperation::RemoveTree { target } => {
                format!("remove '{}'", target.display())
            }
            MaterializeOperation::CopyTree { source, target } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            MaterializeOperation::WriteController { source, target, .. } => {
                format!(
                    "write controller '{}' from '{}'",
                    target.display(),
                    source.display()
                )
            }
        }
    }

    /// The human-readable notice logged once the operation is applied.
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            MaterializeOperation::RemoveTree { target } => {
                format!("{prefix}[-] Removed {}", target.display())
            }
            MaterializeOperation::CopyTree { target, .. } => {
                format!("{prefix}[+] Created {}", target.display())
            }
            MaterializeOperation::WriteController { target, .. } => {
                format!("{prefix}[+] Created controller: {}", target.display())
            }
        }
    }
}
