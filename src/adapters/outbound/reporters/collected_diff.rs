use crate::dependency_diff::domain::VersionChange;

/// Buffer of diff callbacks for sinks that render only on `done()`
#[derive(Debug, Default, Clone)]
pub struct CollectedDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub major: Vec<VersionChange>,
    pub minor: Vec<VersionChange>,
    pub micro: Vec<VersionChange>,
}

impl CollectedDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.major.is_empty()
            && self.minor.is_empty()
            && self.micro.is_empty()
    }

    /// Version change tiers with their headings, most severe first
    pub fn upgrade_sections(&self) -> [(&'static str, &[VersionChange]); 3] {
        [
            ("Major version upgrades", self.major.as_slice()),
            ("Minor version upgrades", self.minor.as_slice()),
            ("Micro version upgrades", self.micro.as_slice()),
        ]
    }
}
