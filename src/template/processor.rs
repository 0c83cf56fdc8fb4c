use globset::GlobSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

pub struct TemplateProcessor<'a, P: AsRef<Path>> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    ignored: &'a GlobSet,
    verbatim: &'a GlobSet,

    /// Other
    template_root: P,
    output_root: P,
    context: &'a serde_json::Value,
}

impl<'a, P: AsRef<Path>> TemplateProcessor<'a, P> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: P,
        output_root: P,
        context: &'a serde_json::Value,
        ignored: &'a GlobSet,
        verbatim: &'a GlobSet,
    ) -> Self {
        Self { engine, ignored, verbatim, template_root, output_root, context }
    }

    /// Renders the part of `template_entry` below the template root.
    ///
    /// A component that renders to an empty string (e.g. a conditional
    /// directory whose condition is false) makes the entry invalid.
    fn render_relative_path(&self, template_entry: &Path) -> Result<PathBuf> {
        let relative = template_entry
            .strip_prefix(self.template_root.as_ref())
            .map_err(|e| Error::ProcessError {
                source_path: template_entry.display().to_string(),
                e: e.to_string(),
            })?;

        let mut rendered = PathBuf::new();
        for component in relative.components() {
            let Component::Normal(part) = component else {
                continue;
            };
            let part = Path::new(part);
            let rendered_part = self.engine.render_path(part, self.context)?;
            if rendered_part.trim().is_empty() {
                return Err(Error::ProcessError {
                    source_path: template_entry.display().to_string(),
                    e: format!("'{}' renders to an empty path component", part.display()),
                });
            }
            rendered.push(rendered_part);
        }
        Ok(rendered)
    }

    /// Processes a template entry and determines the appropriate operation.
    pub fn process<E: AsRef<Path>>(&self, template_entry: E) -> Result<TemplateOperation> {
        let template_entry = template_entry.as_ref().to_path_buf();

        if self.ignored.is_match(&template_entry) {
            return Ok(TemplateOperation::Ignore { source: template_entry });
        }

        let target = self.output_root.as_ref().join(self.render_relative_path(&template_entry)?);

        if template_entry.is_dir() {
            return Ok(TemplateOperation::CreateDirectory { target });
        }

        if self.verbatim.is_match(&template_entry) {
            return Ok(TemplateOperation::Copy { source: template_entry, target });
        }

        match String::from_utf8(fs::read(&template_entry)?) {
            Ok(template_content) => {
                let name = template_entry.file_name().and_then(|n| n.to_str());
                let content = self.engine.render(&template_content, self.context, name)?;
                Ok(TemplateOperation::Write { target, content })
            }
            Err(_) => {
                log::debug!(
                    "'{}' is not UTF-8, copying without rendering",
                    template_entry.to_str_checked().unwrap_or("<non-unicode path>")
                );
                Ok(TemplateOperation::Copy { source: template_entry, target })
            }
        }
    }
}
