use crate::dependency_diff::domain::VersionChange;
use crate::shared::Result;

/// DiffReporter port - a sink receiving the results of one comparison
///
/// Callbacks arrive in a fixed sequence: every added dependency, every removed
/// dependency, then major, minor and micro upgrades, and finally one `done()`.
/// Sinks are free to print immediately or buffer until `done()`.
pub trait DiffReporter {
    fn add_new_dependency(&mut self, gav: &str) -> Result<()>;

    fn add_removed_dependency(&mut self, gav: &str) -> Result<()>;

    fn add_major_version_upgrade(&mut self, change: &VersionChange) -> Result<()>;

    fn add_minor_version_upgrade(&mut self, change: &VersionChange) -> Result<()>;

    fn add_micro_version_upgrade(&mut self, change: &VersionChange) -> Result<()>;

    /// Signals that no further callbacks will follow
    fn done(&mut self) -> Result<()>;
}
