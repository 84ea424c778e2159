use crate::shared::error::DiffError;
use crate::shared::Result;
use std::path::PathBuf;

/// DiffRequest - Internal request DTO for the comparison use case
#[derive(Debug, Clone)]
pub struct DiffRequest {
    /// Dependency tree files describing the "before" state, in merge order
    pub original_files: Vec<PathBuf>,
    /// Dependency tree files describing the "after" state, in merge order
    pub new_files: Vec<PathBuf>,
    /// `group:artifact` patterns removed from both sides before comparing
    pub exclude_patterns: Vec<String>,
}

impl DiffRequest {
    pub fn new(
        original_files: Vec<PathBuf>,
        new_files: Vec<PathBuf>,
        exclude_patterns: Vec<String>,
    ) -> Self {
        Self {
            original_files,
            new_files,
            exclude_patterns,
        }
    }

    pub fn builder() -> DiffRequestBuilder {
        DiffRequestBuilder::default()
    }
}

/// Builder for [`DiffRequest`], validating that both sides have input
#[derive(Debug, Default)]
pub struct DiffRequestBuilder {
    original_files: Vec<PathBuf>,
    new_files: Vec<PathBuf>,
    exclude_patterns: Vec<String>,
}

impl DiffRequestBuilder {
    pub fn original_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.original_files.push(path.into());
        self
    }

    pub fn original_files(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.original_files.extend(paths);
        self
    }

    pub fn new_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.new_files.push(path.into());
        self
    }

    pub fn new_files(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.new_files.extend(paths);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn build(self) -> Result<DiffRequest> {
        if self.original_files.is_empty() {
            return Err(DiffError::Validation {
                message: "at least one original dependency tree file is required".to_string(),
            }
            .into());
        }
        if self.new_files.is_empty() {
            return Err(DiffError::Validation {
                message: "at least one new dependency tree file is required".to_string(),
            }
            .into());
        }

        Ok(DiffRequest::new(
            self.original_files,
            self.new_files,
            self.exclude_patterns,
        ))
    }
}
