use super::CollectedDiff;
use crate::dependency_diff::domain::VersionChange;
use crate::ports::outbound::DiffReporter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};
use std::io::Write;

/// ConsoleReporter - the built-in sink printing a plain-text summary
///
/// Buffers every callback and writes all sections on `done()`, so the report
/// is printed as one block after the merge diagnostics.
pub struct ConsoleReporter<W: Write> {
    writer: W,
    use_color: bool,
    collected: CollectedDiff,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W, use_color: bool) -> Self {
        Self {
            writer,
            use_color,
            collected: CollectedDiff::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn render(&self) -> String {
        if self.collected.is_empty() {
            return "No dependency changes detected.\n".to_string();
        }

        let mut sections = Vec::new();

        let marked = [
            ("Added dependencies", "+", Style::new().green(), &self.collected.added),
            ("Removed dependencies", "-", Style::new().red(), &self.collected.removed),
        ];
        for (title, marker, style, gavs) in marked {
            if gavs.is_empty() {
                continue;
            }
            let mut section = self.heading(title, gavs.len());
            for gav in gavs {
                section.push_str(&format!("  {} {}\n", self.paint(marker, style), gav));
            }
            sections.push(section);
        }

        for (title, changes) in self.collected.upgrade_sections() {
            if changes.is_empty() {
                continue;
            }
            let mut section = self.heading(title, changes.len());
            for change in changes {
                section.push_str(&format!(
                    "  {} {} {}\n",
                    change.original_gav(),
                    self.paint("->", Style::new().yellow()),
                    change.new_gav()
                ));
            }
            sections.push(section);
        }

        sections.join("\n")
    }

    fn heading(&self, title: &str, count: usize) -> String {
        format!("{}\n", self.paint(&format!("{} ({}):", title, count), Style::new().bold()))
    }
}

impl<W: Write> DiffReporter for ConsoleReporter<W> {
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
        let rendered = self.render();
        self.writer
            .write_all(rendered.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write console report: {}", e))
    }
}
