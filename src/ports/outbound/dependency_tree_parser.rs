use crate::dependency_diff::domain::Dependency;
use crate::shared::Result;
use std::path::Path;

/// DependencyTreeParser port turning report text into dependency records
pub trait DependencyTreeParser {
    /// Parses every dependency listed in `content`, in listing order
    ///
    /// # Arguments
    /// * `source` - Where the content came from, used in error messages
    /// * `content` - Raw report text
    ///
    /// # Errors
    /// Returns an error if a dependency line is malformed.
    fn parse(&self, source: &Path, content: &str) -> Result<Vec<Dependency>>;
}
