use crate::dependency_diff::domain::DependencyDiff;

/// DiffResponse - Result of the dependency tree comparison use case
#[derive(Debug, Clone)]
pub struct DiffResponse {
    /// Distinct dependencies on the original side after merging
    pub original_count: usize,
    /// Distinct dependencies on the new side after merging
    pub new_count: usize,
    /// Number of merge conflicts reported while reading both sides
    pub conflict_count: usize,
    pub diff: DependencyDiff,
}
