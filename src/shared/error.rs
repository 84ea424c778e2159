use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI systems can use these to tell "the trees differ" apart from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Comparison finished (or finished with changes and `--fail-on-changes` is off)
    Success = 0,
    /// Changes were found and `--fail-on-changes` was requested
    ChangesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, malformed tree, unwritable report, ...)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ChangesDetected => write!(f, "Changes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency tree comparison.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Failed to read dependency tree: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse dependency tree: {path} (line {line})\nDetails: {details}\n\n💡 Hint: Generate the input with `mvn dependency:tree` and pass the captured output")]
    TreeParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Pass dependency tree files with --original and --new")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
