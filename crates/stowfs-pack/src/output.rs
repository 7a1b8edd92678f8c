//! Writing generated sources to disk.

use std::path::Path;

use tracing::debug;

use crate::error::PackError;

/// Write `data` to `path`, creating missing parent directories.
///
/// Returns `Ok(false)` without touching the filesystem when `data` is empty.
/// An existing target is only replaced when `force` is set, and never when it
/// is a directory.
pub fn write_file(path: &Path, data: &[u8], force: bool) -> Result<bool, PackError> {
    if data.is_empty() {
        return Ok(false);
    }
    if path.as_os_str().is_empty() {
        return Err(PackError::InvalidPath("output path is empty".to_string()));
    }

    if let Ok(metadata) = std::fs::metadata(path) {
        if !force {
            return Err(PackError::AlreadyExists(path.to_path_buf()));
        }
        if metadata.is_dir() {
            return Err(PackError::TargetIsDirectory(path.to_path_buf()));
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, data)?;
    debug!(path = %path.display(), bytes = data.len(), "wrote output");
    Ok(true)
}
