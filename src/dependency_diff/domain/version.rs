use std::fmt;

/// One slot of a three-part version.
///
/// `Missing` is kept distinct from `Numeric(0)` so that a version lacking a slot
/// is never mistaken for an unchanged one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionComponent {
    Numeric(u64),
    Token(String),
    Missing,
}

impl VersionComponent {
    fn parse(segment: Option<&str>) -> Self {
        match segment {
            None | Some("") => VersionComponent::Missing,
            Some(s) if s.chars().all(|c| c.is_ascii_digit()) => s
                .parse()
                .map(VersionComponent::Numeric)
                // Too large for u64: still comparable as text
                .unwrap_or_else(|_| VersionComponent::Token(s.to_string())),
            Some(s) => VersionComponent::Token(s.to_string()),
        }
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionComponent::Numeric(n) => write!(f, "{}", n),
            VersionComponent::Token(t) => write!(f, "{}", t),
            VersionComponent::Missing => write!(f, "?"),
        }
    }
}

/// Version value object: `major.minor.micro` plus an optional qualifier.
///
/// Only equality per slot is defined; versions are not ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: VersionComponent,
    minor: VersionComponent,
    micro: VersionComponent,
    qualifier: Option<String>,
    raw: String,
}

impl Version {
    /// Parses a version string such as `2.1.0`, `20.0.0.Final` or `1.0-SNAPSHOT`.
    ///
    /// Never fails: absent slots become [`VersionComponent::Missing`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (core, dash_qualifier) = match raw.split_once('-') {
            Some((core, rest)) => (core, Some(rest)),
            None => (raw, None),
        };

        let mut segments = core.split('.');
        let major = VersionComponent::parse(segments.next());
        let minor = VersionComponent::parse(segments.next());
        let micro = VersionComponent::parse(segments.next());

        let dotted_rest: Vec<&str> = segments.collect();
        let qualifier = match (dotted_rest.is_empty(), dash_qualifier) {
            (true, None) => None,
            (true, Some(q)) => Some(q.to_string()),
            (false, None) => Some(dotted_rest.join(".")),
            (false, Some(q)) => Some(format!("{}-{}", dotted_rest.join("."), q)),
        };

        Self {
            major,
            minor,
            micro,
            qualifier,
            raw: raw.to_string(),
        }
    }

    pub fn major(&self) -> &VersionComponent {
        &self.major
    }

    pub fn minor(&self) -> &VersionComponent {
        &self.minor
    }

    pub fn micro(&self) -> &VersionComponent {
        &self.micro
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn same_major(&self, other: &Version) -> bool {
        self.major == other.major
    }

    pub fn same_minor(&self, other: &Version) -> bool {
        self.minor == other.minor
    }

    pub fn same_micro(&self, other: &Version) -> bool {
        self.micro == other.micro
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VersionComponent::*;

    #[test]
    fn test_parse_three_part_version() {
        let version = Version::parse("1.2.3");
        assert_eq!(version.major(), &Numeric(1));
        assert_eq!(version.minor(), &Numeric(2));
        assert_eq!(version.micro(), &Numeric(3));
        assert_eq!(version.qualifier(), None);
        assert_eq!(version.as_str(), "1.2.3");
    }

    #[test]
    fn test_parse_dotted_qualifier() {
        let version = Version::parse("20.0.0.Final");
        assert_eq!(version.major(), &Numeric(20));
        assert_eq!(version.micro(), &Numeric(0));
        assert_eq!(version.qualifier(), Some("Final"));
    }

    #[test]
    fn test_parse_dash_qualifier_with_short_core() {
        let version = Version::parse("1.0-SNAPSHOT");
        assert_eq!(version.major(), &Numeric(1));
        assert_eq!(version.minor(), &Numeric(0));
        assert_eq!(version.micro(), &Missing);
        assert_eq!(version.qualifier(), Some("SNAPSHOT"));
    }

    #[test]
    fn test_parse_mixed_qualifier() {
        let version = Version::parse("3.4.1.Final-redhat-00001");
        assert_eq!(version.micro(), &Numeric(1));
        assert_eq!(version.qualifier(), Some("Final-redhat-00001"));
    }

    #[test]
    fn test_parse_token_component() {
        let version = Version::parse("1.x.2");
        assert_eq!(version.minor(), &Token("x".to_string()));
    }

    #[test]
    fn test_parse_empty_version_is_all_missing() {
        let version = Version::parse("");
        assert_eq!(version.major(), &Missing);
        assert_eq!(version.minor(), &Missing);
        assert_eq!(version.micro(), &Missing);
    }

    #[test]
    fn test_missing_is_not_zero() {
        let short = Version::parse("1.0");
        let full = Version::parse("1.0.0");
        assert!(short.same_major(&full));
        assert!(short.same_minor(&full));
        assert!(!short.same_micro(&full));
    }

    #[test]
    fn test_predicates_are_independent_per_slot() {
        let a = Version::parse("1.2.3");
        let b = Version::parse("2.2.3");
        assert!(!a.same_major(&b));
        assert!(a.same_minor(&b));
        assert!(a.same_micro(&b));
    }

    #[test]
    fn test_qualifier_is_ignored_by_predicates() {
        let a = Version::parse("1.0.0.Beta1");
        let b = Version::parse("1.0.0.Final");
        assert!(a.same_major(&b) && a.same_minor(&b) && a.same_micro(&b));
    }

    #[test]
    fn test_display_keeps_raw_text() {
        assert_eq!(Version::parse("2.1.0.Final").to_string(), "2.1.0.Final");
        assert_eq!(Missing.to_string(), "?");
    }
}
