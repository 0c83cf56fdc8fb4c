use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Ensures the output directory is safe to write to.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to a file that must not exist yet.
///
/// Fails with [`Error::DestinationExists`] instead of truncating an existing file.
pub fn write_new_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest_path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => {
                Error::DestinationExists { path: dest_path.display().to_string() }
            }
            _ => Error::IoError(e),
        })?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Recursively copies `source` to `target`, which must not exist yet.
///
/// Symlinks are followed, so the copy holds file contents rather than links.
pub fn copy_dir_all<P: AsRef<Path>>(source: P, target: P) -> Result<()> {
    let source = source.as_ref();
    let target = target.as_ref();

    if target.exists() {
        return Err(Error::DestinationExists { path: target.display().to_string() });
    }

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|e| {
            Error::ProcessError {
                source_path: entry.path().display().to_string(),
                e: e.to_string(),
            }
        })?;
        let dest = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Moves a directory tree. Falls back to copy-then-delete when a plain rename
/// is not possible (e.g. across filesystems).
pub fn move_dir<P: AsRef<Path>>(source: P, target: P) -> Result<()> {
    let source = source.as_ref();
    let target = target.as_ref();

    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }

    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::debug!(
                "Rename of '{}' failed ({e}), copying instead",
                source.display()
            );
            copy_dir_all(source, target)?;
            fs::remove_dir_all(source).map_err(Error::IoError)
        }
    }
}

pub fn parse_string_to_json(
    buf: String,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(&buf)?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::ValidationError(format!(
            "answers must be a JSON object, got: {other}"
        ))),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
