use super::{Dependency, DependencyKey};
use std::collections::HashMap;

/// Canonical `DependencyKey -> Dependency` mapping for one side of a comparison.
///
/// Iteration follows first-insertion order of each key; replacing an existing
/// key keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    entries: Vec<Dependency>,
    index: HashMap<DependencyKey, usize>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a dependency, returning the one it replaced, if any.
    pub fn insert(&mut self, dependency: Dependency) -> Option<Dependency> {
        match self.index.get(dependency.key()) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position], dependency)),
            None => {
                self.index
                    .insert(dependency.key().clone(), self.entries.len());
                self.entries.push(dependency);
                None
            }
        }
    }

    pub fn get(&self, key: &DependencyKey) -> Option<&Dependency> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn contains_key(&self, key: &DependencyKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.entries.iter()
    }

    /// Keeps only the dependencies for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Dependency) -> bool,
    {
        self.entries.retain(|dep| keep(dep));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, dep)| (dep.key().clone(), position))
            .collect();
    }
}

impl FromIterator<Dependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut set = DependencySet::new();
        for dependency in iter {
            set.insert(dependency);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(artifact: &str, version: &str) -> Dependency {
        Dependency::new("org.acme", artifact, Some("jar"), None, version).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut set = DependencySet::new();
        assert!(set.insert(dep("core", "1.0")).is_none());
        let key = dep("core", "9.9").key().clone();
        assert_eq!(set.get(&key).unwrap().gav(), "org.acme:core:jar:1.0");
        assert!(set.contains_key(&key));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_replace_keeps_first_insertion_position() {
        let mut set = DependencySet::new();
        set.insert(dep("a", "1.0"));
        set.insert(dep("b", "1.0"));
        let replaced = set.insert(dep("a", "2.0"));

        assert_eq!(replaced.unwrap().gav(), "org.acme:a:jar:1.0");
        let gavs: Vec<&str> = set.iter().map(Dependency::gav).collect();
        assert_eq!(gavs, vec!["org.acme:a:jar:2.0", "org.acme:b:jar:1.0"]);
    }

    #[test]
    fn test_retain_rebuilds_index() {
        let mut set: DependencySet = vec![dep("a", "1"), dep("b", "1"), dep("c", "1")]
            .into_iter()
            .collect();
        set.retain(|d| d.key().artifact_id() != "a");

        assert_eq!(set.len(), 2);
        assert!(!set.contains_key(dep("a", "1").key()));
        assert_eq!(set.get(dep("c", "1").key()).unwrap().gav(), "org.acme:c:jar:1");
    }

    #[test]
    fn test_empty_set() {
        let set = DependencySet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
