use crate::application::dto::{DiffRequest, DiffResponse};
use crate::shared::Result;

/// DependencyDiffPort - Inbound port for comparing two sets of dependency trees
///
/// This is the application's public entry point used by the CLI.
pub trait DependencyDiffPort {
    /// Reads, merges and compares the original and new dependency trees
    ///
    /// # Errors
    /// Returns an error if:
    /// - An input file cannot be read
    /// - An input file contains a malformed dependency line
    /// - An exclusion pattern is invalid
    fn compare(&self, request: DiffRequest) -> Result<DiffResponse>;
}
