use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DiffError;
use crate::shared::security::validate_output_file;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter writing a rendered report to `--output` or a
/// config-declared path
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        validate_output_file(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| DiffError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for a report that has stdout to itself
#[derive(Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write report to stdout: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_replaces_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diff.md");
        fs::write(&path, "# stale report with more text than the new one\n").unwrap();

        FileSystemWriter::new(path.clone())
            .present("# Dependency Tree Diff\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Dependency Tree Diff\n");
    }

    #[test]
    fn test_missing_report_directory_names_report_path() {
        let err = FileSystemWriter::new(PathBuf::from("/nonexistent/reports/diff.json"))
            .present("{}")
            .unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Failed to write to file: /nonexistent/reports/diff.json"));
        assert!(message.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_report_leaves_link_target_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("notes.md");
        fs::write(&target, "keep me").unwrap();
        let link = temp_dir.path().join("diff.md");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("# diff");

        assert!(result.unwrap_err().to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    }
}
