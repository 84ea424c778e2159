use super::CollectedDiff;
use crate::dependency_diff::domain::VersionChange;
use crate::ports::outbound::{DiffReporter, OutputPresenter};
use crate::shared::Result;

/// MarkdownReporter - sink rendering the diff as a Markdown document
///
/// Emits a summary table followed by one section per non-empty category.
pub struct MarkdownReporter {
    presenter: Box<dyn OutputPresenter>,
    collected: CollectedDiff,
}

impl MarkdownReporter {
    pub fn new(presenter: Box<dyn OutputPresenter>) -> Self {
        Self {
            presenter,
            collected: CollectedDiff::default(),
        }
    }

    fn render(&self) -> String {
        let collected = &self.collected;
        let mut output = String::new();

        output.push_str("# Dependency Tree Diff\n\n");

        // Summary
        output.push_str("## Summary\n\n");
        output.push_str("| Change | Count |\n");
        output.push_str("|--------|-------|\n");
        let counts = [
            ("Added", collected.added.len()),
            ("Removed", collected.removed.len()),
            ("Major upgrades", collected.major.len()),
            ("Minor upgrades", collected.minor.len()),
            ("Micro upgrades", collected.micro.len()),
        ];
        for (label, count) in counts {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }

        if collected.is_empty() {
            output.push_str("\nNo dependency changes detected.\n");
            return output;
        }

        for (title, gavs) in [
            ("Added dependencies", &collected.added),
            ("Removed dependencies", &collected.removed),
        ] {
            if gavs.is_empty() {
                continue;
            }
            output.push_str(&format!("\n## {}\n\n", title));
            for gav in gavs {
                output.push_str(&format!("- `{}`\n", gav));
            }
        }

        for (title, changes) in collected.upgrade_sections() {
            if changes.is_empty() {
                continue;
            }
            output.push_str(&format!("\n## {}\n\n", title));
            output.push_str("| Original | New |\n");
            output.push_str("|----------|-----|\n");
            for change in changes {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    escape_cell(change.original_gav()),
                    escape_cell(change.new_gav())
                ));
            }
        }

        output
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl DiffReporter for MarkdownReporter {
    fn add_new_dependency(&mut self, gav: &str) -> Result<()> {
        self.collected.added.push(gav.to_string());
        Ok(())
    }

    fn add_removed_dependency(&mut self, gav: &str) -> Result<()> {
        self.collected.removed.push(gav.to_string());
        Ok(())
    }

    fn add_major_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.collected.major.push(change.clone());
        Ok(())
    }

    fn add_minor_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.collected.minor.push(change.clone());
        Ok(())
    }

    fn add_micro_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.collected.micro.push(change.clone());
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        let markdown = self.render();
        self.presenter.present(&markdown)
    }
}
