use crate::dependency_diff::domain::DependencySet;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - removes dependencies from a canonical set by identity pattern
///
/// Patterns are matched against `groupId:artifactId`, case-sensitively, with `*`
/// matching any run of characters (including none).
#[derive(Debug)]
pub struct DependencyFilter {
    patterns: Vec<ExcludePattern>,
}

impl DependencyFilter {
    /// Creates a new DependencyFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern (empty, too long, invalid characters, wildcard only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Removes excluded dependencies from the set
    ///
    /// # Returns
    /// Number of dependencies removed
    pub fn apply(&self, dependencies: &mut DependencySet) -> usize {
        let before = dependencies.len();
        dependencies.retain(|dep| !self.matches(&dep.key().group_artifact()));
        before - dependencies.len()
    }

    /// Checks a `group:artifact` string against every pattern.
    ///
    /// Every pattern is evaluated so that match tracking stays accurate.
    fn matches(&self, group_artifact: &str) -> bool {
        self.patterns
            .iter()
            .fold(false, |any, p| p.matches(group_artifact) || any)
    }

    /// Returns the patterns that did not match any dependency so far
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern, pre-split on its wildcards
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    parts: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let parts = pattern.split('*').map(str::to_string).collect();

        Ok(Self {
            original: pattern,
            parts,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, candidate: &str) -> bool {
        let is_match = glob_match(&self.parts, candidate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Matches `candidate` against a pattern already split on `*`.
///
/// The first part is anchored at the start, the last at the end, and the
/// middle parts must appear in order between them.
fn glob_match(parts: &[String], candidate: &str) -> bool {
    let (first, rest) = match parts.split_first() {
        Some(split) => split,
        None => return candidate.is_empty(),
    };
    let Some(mut remaining) = candidate.strip_prefix(first.as_str()) else {
        return false;
    };
    let Some((last, middle)) = rest.split_last() else {
        // No wildcard at all: exact match
        return remaining.is_empty();
    };

    for part in middle {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }
    remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons, and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '*')
}
