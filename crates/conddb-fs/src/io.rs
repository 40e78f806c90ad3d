//! File write and copy helpers for fixture trees

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Write content to a file, replacing any previous version.
///
/// Uses write-to-temp-then-rename so an interrupted run never leaves a
/// half-written fixture behind.
pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Generate temp file path in same directory (ensures same filesystem)
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Write text content to a file, replacing any previous version.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "writing file");
    write_bytes(path, content.as_bytes())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Copy a single file, replacing any previous version of the destination.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    tracing::debug!(src = %src.display(), dest = %dest.display(), "copying file");
    let content = fs::read(src).map_err(|e| Error::io(src, e))?;
    write_bytes(dest, &content)
}

/// Remove a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "removing file");
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Create the requested directories (and missing parents), if needed.
///
/// Already-existing directories are left untouched, so repeated calls are
/// idempotent.
pub fn materialize_dirs<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<()> {
    for path in paths {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}
