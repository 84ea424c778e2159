use super::Dependency;
use std::fmt;

/// Severity tier of a version change, evaluated major first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSeverity {
    Major,
    Minor,
    Micro,
}

impl ChangeSeverity {
    /// Classifies the change from `original` to `new`, or `None` when the
    /// three version slots are all equal.
    pub fn classify(original: &Dependency, new: &Dependency) -> Option<Self> {
        let (from, to) = (original.version(), new.version());
        if !to.same_major(from) {
            Some(ChangeSeverity::Major)
        } else if !to.same_minor(from) {
            Some(ChangeSeverity::Minor)
        } else if !to.same_micro(from) {
            Some(ChangeSeverity::Micro)
        } else {
            None
        }
    }
}

/// The same dependency seen at two versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    original: Dependency,
    new: Dependency,
}

impl VersionChange {
    pub fn new(original: Dependency, new: Dependency) -> Self {
        debug_assert_eq!(original.key(), new.key());
        Self { original, new }
    }

    pub fn original_gav(&self) -> &str {
        self.original.gav()
    }

    pub fn new_gav(&self) -> &str {
        self.new.gav()
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.original.gav(), self.new.gav())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(version: &str) -> Dependency {
        Dependency::new("org.acme", "core", Some("jar"), None, version).unwrap()
    }

    #[test]
    fn test_classify_major() {
        assert_eq!(
            ChangeSeverity::classify(&dep("1.0.0"), &dep("2.0.0")),
            Some(ChangeSeverity::Major)
        );
        // Minor and micro differences do not matter once major differs
        assert_eq!(
            ChangeSeverity::classify(&dep("1.2.3"), &dep("2.5.9")),
            Some(ChangeSeverity::Major)
        );
    }

    #[test]
    fn test_classify_minor() {
        assert_eq!(
            ChangeSeverity::classify(&dep("1.2.3"), &dep("1.3.0")),
            Some(ChangeSeverity::Minor)
        );
    }

    #[test]
    fn test_classify_micro() {
        assert_eq!(
            ChangeSeverity::classify(&dep("1.2.3"), &dep("1.2.4")),
            Some(ChangeSeverity::Micro)
        );
    }

    #[test]
    fn test_classify_unchanged() {
        assert_eq!(ChangeSeverity::classify(&dep("1.2.3"), &dep("1.2.3")), None);
    }

    #[test]
    fn test_version_change_accessors() {
        let change = VersionChange::new(dep("1.0.0"), dep("1.1.0"));
        assert_eq!(change.original_gav(), "org.acme:core:jar:1.0.0");
        assert_eq!(change.new_gav(), "org.acme:core:jar:1.1.0");
        assert_eq!(
            change.to_string(),
            "org.acme:core:jar:1.0.0 -> org.acme:core:jar:1.1.0"
        );
    }
}
