use super::Version;
use crate::shared::Result;
use std::fmt;

/// Maximum length of a single coordinate field
const MAX_COORDINATE_FIELD_LENGTH: usize = 255;

/// Identity of a dependency, excluding its version.
///
/// Used as the map key so the same artifact at two versions is seen as one
/// dependency whose version changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    group_id: String,
    artifact_id: String,
    packaging: Option<String>,
    classifier: Option<String>,
}

impl DependencyKey {
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// `group:artifact`, the form exclusion patterns are matched against
    pub fn group_artifact(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl From<&Dependency> for DependencyKey {
    fn from(dependency: &Dependency) -> Self {
        dependency.key.clone()
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(packaging) = &self.packaging {
            write!(f, ":{}", packaging)?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        Ok(())
    }
}

/// A single resolved dependency as listed in a dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    key: DependencyKey,
    version: Version,
    gav: String,
}

impl Dependency {
    /// Creates a dependency from its coordinate fields.
    ///
    /// Empty packaging/classifier values are treated as absent.
    ///
    /// # Errors
    /// Returns an error if the group or artifact id is empty or a field is too long.
    pub fn new(
        group_id: &str,
        artifact_id: &str,
        packaging: Option<&str>,
        classifier: Option<&str>,
        version: &str,
    ) -> Result<Self> {
        for (name, value) in [("group id", group_id), ("artifact id", artifact_id)] {
            if value.trim().is_empty() {
                anyhow::bail!("Dependency {} cannot be empty", name);
            }
        }
        for value in [Some(group_id), Some(artifact_id), packaging, classifier, Some(version)]
            .into_iter()
            .flatten()
        {
            if value.len() > MAX_COORDINATE_FIELD_LENGTH {
                anyhow::bail!(
                    "Coordinate field is too long ({} bytes). Maximum allowed: {} bytes",
                    value.len(),
                    MAX_COORDINATE_FIELD_LENGTH
                );
            }
        }

        let key = DependencyKey {
            group_id: group_id.trim().to_string(),
            artifact_id: artifact_id.trim().to_string(),
            packaging: non_empty(packaging),
            classifier: non_empty(classifier),
        };
        let version = Version::parse(version);
        let gav = format!("{}:{}", key, version);

        Ok(Self {
            key,
            version,
            gav,
        })
    }

    pub fn key(&self) -> &DependencyKey {
        &self.key
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Full coordinate including the version; used for display and ordering.
    pub fn gav(&self) -> &str {
        &self.gav
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gav)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gav_without_classifier() {
        let dep = Dependency::new("org.jboss", "jboss-dmr", Some("jar"), None, "1.5.0.Final")
            .unwrap();
        assert_eq!(dep.gav(), "org.jboss:jboss-dmr:jar:1.5.0.Final");
    }

    #[test]
    fn test_gav_with_classifier() {
        let dep = Dependency::new("io.netty", "netty-transport", Some("jar"), Some("linux"), "4.1.0")
            .unwrap();
        assert_eq!(dep.gav(), "io.netty:netty-transport:jar:linux:4.1.0");
    }

    #[test]
    fn test_gav_without_packaging() {
        let dep = Dependency::new("org.acme", "core", None, None, "1.0.0").unwrap();
        assert_eq!(dep.gav(), "org.acme:core:1.0.0");
    }

    #[test]
    fn test_empty_group_rejected() {
        assert!(Dependency::new("", "core", None, None, "1.0").is_err());
        assert!(Dependency::new("org.acme", "  ", None, None, "1.0").is_err());
    }

    #[test]
    fn test_overlong_field_rejected() {
        let long = "a".repeat(MAX_COORDINATE_FIELD_LENGTH + 1);
        assert!(Dependency::new("org.acme", &long, None, None, "1.0").is_err());
    }

    #[test]
    fn test_key_ignores_version() {
        let a = Dependency::new("org.acme", "core", Some("jar"), None, "1.0.0").unwrap();
        let b = Dependency::new("org.acme", "core", Some("jar"), None, "2.0.0").unwrap();
        assert_eq!(a.key(), b.key());

        let keys: HashSet<DependencyKey> = [&a, &b].into_iter().map(DependencyKey::from).collect();
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_key_distinguishes_classifier_and_packaging() {
        let plain = Dependency::new("org.acme", "core", Some("jar"), None, "1.0").unwrap();
        let tests = Dependency::new("org.acme", "core", Some("jar"), Some("tests"), "1.0").unwrap();
        let pom = Dependency::new("org.acme", "core", Some("pom"), None, "1.0").unwrap();
        assert_ne!(plain.key(), tests.key());
        assert_ne!(plain.key(), pom.key());
    }

    #[test]
    fn test_key_group_artifact() {
        let dep = Dependency::new("org.acme", "core", Some("jar"), Some("tests"), "1.0").unwrap();
        assert_eq!(dep.key().group_artifact(), "org.acme:core");
        assert_eq!(dep.key().to_string(), "org.acme:core:jar:tests");
    }
}
