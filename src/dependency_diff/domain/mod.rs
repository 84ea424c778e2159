pub mod dependency;
pub mod dependency_diff;
pub mod dependency_set;
pub mod merge_conflict;
pub mod version;
pub mod version_change;

pub use dependency::{Dependency, DependencyKey};
pub use dependency_diff::DependencyDiff;
pub use dependency_set::DependencySet;
pub use merge_conflict::MergeConflict;
pub use version::{Version, VersionComponent};
pub use version_change::{ChangeSeverity, VersionChange};
