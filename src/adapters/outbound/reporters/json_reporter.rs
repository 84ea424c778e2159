use super::CollectedDiff;
use crate::dependency_diff::domain::VersionChange;
use crate::ports::outbound::{DiffReporter, OutputPresenter};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    tool: Tool,
    summary: Summary,
    added: &'a [String],
    removed: &'a [String],
    major_upgrades: Vec<Upgrade<'a>>,
    minor_upgrades: Vec<Upgrade<'a>>,
    micro_upgrades: Vec<Upgrade<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct Summary {
    added: usize,
    removed: usize,
    major: usize,
    minor: usize,
    micro: usize,
}

#[derive(Debug, Serialize)]
struct Upgrade<'a> {
    original: &'a str,
    new: &'a str,
}

/// JsonReporter - sink rendering the diff as a JSON document
///
/// The document is handed to the presenter (stdout or a file) on `done()`.
pub struct JsonReporter {
    presenter: Box<dyn OutputPresenter>,
    collected: CollectedDiff,
}

impl JsonReporter {
    pub fn new(presenter: Box<dyn OutputPresenter>) -> Self {
        Self {
            presenter,
            collected: CollectedDiff::default(),
        }
    }

    fn upgrades(changes: &[VersionChange]) -> Vec<Upgrade<'_>> {
        changes
            .iter()
            .map(|c| Upgrade {
                original: c.original_gav(),
                new: c.new_gav(),
            })
            .collect()
    }

    fn render(&self) -> Result<String> {
        let collected = &self.collected;
        let report = JsonReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            summary: Summary {
                added: collected.added.len(),
                removed: collected.removed.len(),
                major: collected.major.len(),
                minor: collected.minor.len(),
                micro: collected.micro.len(),
            },
            added: &collected.added,
            removed: &collected.removed,
            major_upgrades: Self::upgrades(&collected.major),
            minor_upgrades: Self::upgrades(&collected.minor),
            micro_upgrades: Self::upgrades(&collected.micro),
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

impl DiffReporter for JsonReporter {
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
        let json = self.render()?;
        self.presenter.present(&json)
    }
}
