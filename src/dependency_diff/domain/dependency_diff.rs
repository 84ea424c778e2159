use super::{Dependency, VersionChange};

/// Result of comparing two canonical dependency sets.
///
/// Every list is already in its reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDiff {
    pub added: Vec<Dependency>,
    pub removed: Vec<Dependency>,
    pub major: Vec<VersionChange>,
    pub minor: Vec<VersionChange>,
    pub micro: Vec<VersionChange>,
}

impl DependencyDiff {
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len() + self.major.len() + self.minor.len() + self.micro.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}
