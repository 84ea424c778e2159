use crate::application::dto::{DiffRequest, DiffResponse};
use crate::dependency_diff::domain::DependencySet;
use crate::dependency_diff::services::{DependencyFilter, DependencyMerger, DiffCalculator};
use crate::ports::inbound::DependencyDiffPort;
use crate::ports::outbound::{DependencyTreeParser, DependencyTreeReader, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

/// One side of the comparison after merging all of its input files
struct MergedSide {
    dependencies: DependencySet,
    conflict_count: usize,
}

/// DiffDependencyTreesUseCase - Core use case comparing two snapshots
///
/// Reads and merges the original files, then the new files, and computes the
/// diff between the two canonical sets. Merge warnings are reported as soon as
/// each file has been merged, before the next file is read.
///
/// # Type Parameters
/// * `R` - DependencyTreeReader implementation
/// * `P` - DependencyTreeParser implementation
/// * `PR` - ProgressReporter implementation
pub struct DiffDependencyTreesUseCase<R, P, PR> {
    tree_reader: R,
    tree_parser: P,
    progress_reporter: PR,
}

impl<R, P, PR> DiffDependencyTreesUseCase<R, P, PR>
where
    R: DependencyTreeReader,
    P: DependencyTreeParser,
    PR: ProgressReporter,
{
    pub fn new(tree_reader: R, tree_parser: P, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            tree_parser,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// Fails without producing a diff if any input file cannot be read or
    /// parsed, or if an exclusion pattern is invalid.
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        // Validate patterns before touching any input
        let filter = if request.exclude_patterns.is_empty() {
            None
        } else {
            Some(DependencyFilter::new(request.exclude_patterns.clone())?)
        };

        let original = self.merge_side("original", &request.original_files)?;
        let new = self.merge_side("new", &request.new_files)?;

        self.progress_reporter.report(&format!(
            "Original dependencies size: {}",
            original.dependencies.len()
        ));
        self.progress_reporter
            .report(&format!("New dependencies size: {}", new.dependencies.len()));

        let conflict_count = original.conflict_count + new.conflict_count;
        let (original_count, new_count) = (original.dependencies.len(), new.dependencies.len());
        let (mut original_deps, mut new_deps) = (original.dependencies, new.dependencies);

        if let Some(filter) = filter {
            self.apply_exclusion_filter(&filter, &mut original_deps, &mut new_deps);
        }

        let diff = DiffCalculator::calculate(&original_deps, &new_deps);
        self.progress_reporter.report_completion(&format!(
            "✅ Comparison complete: {} change(s) detected",
            diff.total_changes()
        ));

        Ok(DiffResponse {
            original_count,
            new_count,
            conflict_count,
            diff,
        })
    }

    /// Reads, parses and merges every file of one side, in the given order
    fn merge_side(&self, side: &str, files: &[PathBuf]) -> Result<MergedSide> {
        let mut merger = DependencyMerger::new();
        let mut conflict_count = 0;

        for (index, path) in files.iter().enumerate() {
            self.progress_reporter.report_progress(
                index,
                files.len(),
                Some(&format!("Reading {} tree {}", side, path.display())),
            );

            let content = self.tree_reader.read_tree(path)?;
            let dependencies = self.tree_parser.parse(path, &content)?;

            for conflict in merger.merge_source(path, dependencies) {
                conflict_count += 1;
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", conflict));
            }
        }

        self.progress_reporter
            .report_progress(files.len(), files.len(), None);

        Ok(MergedSide {
            dependencies: merger.finish(),
            conflict_count,
        })
    }

    fn apply_exclusion_filter(
        &self,
        filter: &DependencyFilter,
        original: &mut DependencySet,
        new: &mut DependencySet,
    ) {
        let excluded = filter.apply(original) + filter.apply(new);
        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} dependency entr{} based on filters",
                excluded,
                if excluded == 1 { "y" } else { "ies" }
            ));
        }

        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }
}

impl<R, P, PR> DependencyDiffPort for DiffDependencyTreesUseCase<R, P, PR>
where
    R: DependencyTreeReader,
    P: DependencyTreeParser,
    PR: ProgressReporter,
{
    fn compare(&self, request: DiffRequest) -> Result<DiffResponse> {
        self.execute(request)
    }
}
