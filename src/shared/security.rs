use crate::shared::error::DiffError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest dependency tree report accepted as input (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an input path points at a readable dependency tree file.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its target.
///
/// # Errors
/// Returns an error if the path does not exist, is a symbolic link, is not a
/// regular file, or is larger than [`MAX_FILE_SIZE`].
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DiffError::InvalidInputPath {
        path: path.to_path_buf(),
        reason: if e.kind() == std::io::ErrorKind::NotFound {
            "File does not exist".to_string()
        } else {
            format!("Failed to read path metadata: {}", e)
        },
    })?;

    reject_symlink(
        path,
        &metadata,
        "Pass the dependency tree file itself instead of a link to it",
    )?;

    if !metadata.is_file() {
        return Err(DiffError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates that a report can be written to `path`.
///
/// The file itself may be missing, but its parent directory must exist. An
/// existing target must be a regular file and not a symbolic link (dangling
/// links included).
///
/// # Errors
/// Returns an error for a missing parent directory, a symlinked target, or a
/// target that is not a regular file.
pub fn validate_output_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(DiffError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    reject_symlink(path, &metadata, "Write the report to a regular file path")?;
    if !metadata.is_file() {
        return Err(DiffError::FileWriteError {
            path: path.to_path_buf(),
            details: "Report target exists and is not a regular file".to_string(),
        }
        .into());
    }
    Ok(())
}

fn reject_symlink(path: &Path, metadata: &fs::Metadata, hint: &str) -> Result<()> {
    if metadata.is_symlink() {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: "Path is a symbolic link".to_string(),
            hint: hint.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Trim the report to the dependency:tree section".to_string(),
        }
        .into());
    }
    Ok(())
}
