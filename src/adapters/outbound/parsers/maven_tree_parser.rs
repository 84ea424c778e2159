use crate::dependency_diff::domain::Dependency;
use crate::ports::outbound::DependencyTreeParser;
use crate::shared::error::DiffError;
use crate::shared::Result;
use std::path::Path;

/// Log prefix written by Maven in front of every tree line
const INFO_PREFIX: &str = "[INFO]";

/// MavenTreeParser adapter for `mvn dependency:tree` text output
///
/// Accepts the raw console capture (with `[INFO]` prefixes and colour codes)
/// as well as the file written by `-DoutputFile`. Lines that are not part of a
/// dependency tree are skipped.
pub struct MavenTreeParser;

impl MavenTreeParser {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the coordinate token of a tree line, or `None` for lines that
    /// are not tree entries.
    fn coordinate_of(line: &str) -> Option<&str> {
        let mut content = line.trim_end();

        if let Some(rest) = content.strip_prefix(INFO_PREFIX) {
            content = rest;
        } else if content.starts_with('[') {
            // [WARNING], [ERROR], ... never carry tree entries
            return None;
        }

        let content = content.trim_start_matches([' ', '|', '+', '-', '\\']);
        // Verbose mode lists omitted duplicates in parentheses
        if content.is_empty() || content.starts_with('(') {
            return None;
        }

        let (coordinate, annotation) = match content.split_once(char::is_whitespace) {
            Some((coordinate, annotation)) => (coordinate, annotation.trim_start()),
            None => (content, ""),
        };
        if !annotation.is_empty() && !annotation.starts_with('(') {
            return None;
        }

        let colons = coordinate.matches(':').count();
        // Paths and URLs (`http://host:8080/...`) also contain colons
        ((3..=5).contains(&colons) && !coordinate.contains('/')).then_some(coordinate)
    }

    fn parse_coordinate(coordinate: &str) -> Result<Dependency> {
        let parts: Vec<&str> = coordinate.split(':').collect();
        // The trailing scope, when present, is not part of the identity
        let (group, artifact, packaging, classifier, version) = match parts.as_slice() {
            [g, a, t, v] | [g, a, t, v, _] => (*g, *a, *t, None, *v),
            [g, a, t, c, v, _] => (*g, *a, *t, Some(*c), *v),
            _ => anyhow::bail!("unexpected coordinate shape '{}'", coordinate),
        };
        if version.trim().is_empty() {
            anyhow::bail!("Dependency version cannot be empty");
        }

        Dependency::new(group, artifact, Some(packaging), classifier, version)
    }
}

impl Default for MavenTreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeParser for MavenTreeParser {
    fn parse(&self, source: &Path, content: &str) -> Result<Vec<Dependency>> {
        let mut dependencies = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = strip_ansi_codes(raw_line);
            let Some(coordinate) = Self::coordinate_of(&line) else {
                continue;
            };

            let dependency =
                Self::parse_coordinate(coordinate).map_err(|e| DiffError::TreeParseError {
                    path: source.to_path_buf(),
                    line: index + 1,
                    details: format!("{} in '{}'", e, coordinate),
                })?;
            dependencies.push(dependency);
        }

        Ok(dependencies)
    }
}

/// Removes ANSI escape sequences (`ESC [ ... letter`) left by coloured Maven output
fn strip_ansi_codes(line: &str) -> String {
    let mut stripped = String::with_capacity(line.len());
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.next() == Some('[') {
                for terminator in chars.by_ref() {
                    if terminator.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            stripped.push(c);
        }
    }
    stripped
}
