use crate::dependency_diff::domain::{Dependency, DependencyKey, DependencySet, MergeConflict};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// DependencyMerger service folding several dependency listings into one
/// canonical set.
///
/// Sources are merged in the order they are fed; for an identity defined more
/// than once the last definition wins. The merger remembers, per key, which
/// source defined it last, so each conflict can name the superseded source
/// without rescanning earlier sources.
#[derive(Debug, Default)]
pub struct DependencyMerger {
    merged: DependencySet,
    last_source: HashMap<DependencyKey, PathBuf>,
}

impl DependencyMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one source's dependencies into the canonical set.
    ///
    /// # Returns
    /// The conflicts found while merging this source, in listing order. A
    /// redefinition with an identical GAV string is not a conflict.
    pub fn merge_source<I>(&mut self, source: &Path, dependencies: I) -> Vec<MergeConflict>
    where
        I: IntoIterator<Item = Dependency>,
    {
        let mut conflicts = Vec::new();

        for dependency in dependencies {
            let key = dependency.key().clone();

            if let (Some(existing), Some(existing_source)) =
                (self.merged.get(&key), self.last_source.get(&key))
            {
                if existing.gav() != dependency.gav() {
                    conflicts.push(MergeConflict {
                        dependency: dependency.clone(),
                        source: source.to_path_buf(),
                        superseded: existing.clone(),
                        superseded_source: existing_source.clone(),
                    });
                }
            }

            self.last_source.insert(key, source.to_path_buf());
            self.merged.insert(dependency);
        }

        conflicts
    }

    /// Number of distinct identities merged so far
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    pub fn finish(self) -> DependencySet {
        self.merged
    }
}
