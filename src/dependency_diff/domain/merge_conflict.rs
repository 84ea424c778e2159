use super::Dependency;
use std::fmt;
use std::path::{Path, PathBuf};

/// Two input sources disagreeing about the version of one dependency.
///
/// The later definition (`dependency` from `source`) is the one kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConflict {
    pub dependency: Dependency,
    pub source: PathBuf,
    pub superseded: Dependency,
    pub superseded_source: PathBuf,
}

impl MergeConflict {
    fn source_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

impl fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in '{}' was already found as '{}' in '{}'. The last one ({}) will be used for the comparison.",
            self.dependency.gav(),
            self.source.display(),
            self.superseded.gav(),
            self.superseded_source.display(),
            Self::source_name(&self.source)
        )
    }
}
