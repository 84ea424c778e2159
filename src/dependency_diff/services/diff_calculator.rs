use crate::dependency_diff::domain::{
    ChangeSeverity, Dependency, DependencyDiff, DependencySet, VersionChange,
};

/// DiffCalculator service comparing two canonical dependency sets.
///
/// Pure logic: results are sorted by GAV string so they never depend on the
/// iteration order of the input sets.
pub struct DiffCalculator;

impl DiffCalculator {
    /// Computes additions, removals and tiered version changes.
    ///
    /// # Arguments
    /// * `original` - Canonical set of the "before" snapshot
    /// * `new` - Canonical set of the "after" snapshot
    pub fn calculate(original: &DependencySet, new: &DependencySet) -> DependencyDiff {
        let mut diff = DependencyDiff {
            added: Self::only_in_left(new, original),
            removed: Self::only_in_left(original, new),
            ..DependencyDiff::default()
        };

        for new_dep in new.iter() {
            let Some(original_dep) = original.get(new_dep.key()) else {
                continue;
            };
            let tier = match ChangeSeverity::classify(original_dep, new_dep) {
                Some(ChangeSeverity::Major) => &mut diff.major,
                Some(ChangeSeverity::Minor) => &mut diff.minor,
                Some(ChangeSeverity::Micro) => &mut diff.micro,
                None => continue,
            };
            tier.push(VersionChange::new(original_dep.clone(), new_dep.clone()));
        }

        for tier in [&mut diff.major, &mut diff.minor, &mut diff.micro] {
            tier.sort_by(|a, b| a.original_gav().cmp(b.original_gav()));
        }

        diff
    }

    /// Dependencies whose key is present in `left` but not in `right`, sorted by GAV.
    fn only_in_left(left: &DependencySet, right: &DependencySet) -> Vec<Dependency> {
        let mut only_left: Vec<Dependency> = left
            .iter()
            .filter(|dep| !right.contains_key(dep.key()))
            .cloned()
            .collect();
        only_left.sort_by(|a, b| a.gav().cmp(b.gav()));
        only_left
    }
}
