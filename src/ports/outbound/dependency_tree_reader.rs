use crate::shared::Result;
use std::path::Path;

/// DependencyTreeReader port for reading one dependency tree report
///
/// Implementations must read the source to completion and release it before
/// returning, whether or not the read succeeded.
pub trait DependencyTreeReader {
    /// Reads the raw text of a dependency tree report
    ///
    /// # Errors
    /// Returns an error if the source does not exist or cannot be read.
    fn read_tree(&self, path: &Path) -> Result<String>;
}
