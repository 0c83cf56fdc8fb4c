use crate::{constants::IGNORE_FILE, error::Result, ext::PathExt};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns always excluded from rendering, relative to the template root
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/**",
    ".git",
    ".hg/**",
    ".hg",
    ".svn/**",
    ".svn",
    "**/.DS_Store",
    "**/__pycache__",
    "**/__pycache__/**",
    ".stencilignore",
    "hooks",
    "hooks/**",
    "cookiecutter.json",
    "stencil.yaml",
    "stencil.yml",
    "stencil.json",
];

/// Builds a glob set from template-root-relative patterns.
pub fn build_globset<P, S>(template_root: P, patterns: &[S]) -> Result<GlobSet>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let template_root = template_root.as_ref();
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let absolute = template_root.join(pattern.as_ref());
        let absolute = absolute.to_str_checked()?;
        debug!("Adding pattern: {absolute} to globset");
        builder.add(Glob::new(absolute)?);
    }
    Ok(builder.build()?)
}

/// Reads the built-in patterns plus `.stencilignore` (if any) into a glob set.
pub fn parse_ignore_file<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let template_root = template_root.as_ref();

    let mut patterns: Vec<String> =
        DEFAULT_IGNORE_PATTERNS.iter().map(|pattern| pattern.to_string()).collect();

    match read_to_string(template_root.join(IGNORE_FILE)) {
        Ok(contents) => patterns.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        ),
        Err(_) => debug!("No {IGNORE_FILE} file found, using default patterns."),
    }

    build_globset(template_root, &patterns)
}
