use crate::ports::outbound::DependencyTreeReader;
use crate::shared::error::DiffError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading dependency tree reports from disk
///
/// Each file is validated (regular file, not a symlink, size limit) and then
/// read in one go, so the handle is closed before the next file is opened.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_tree(&self, path: &Path) -> Result<String> {
        validate_input_file(path)?;

        fs::read_to_string(path).map_err(|e| {
            DiffError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
