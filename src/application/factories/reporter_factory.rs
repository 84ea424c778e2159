use crate::adapters::outbound::reporters::{ConsoleReporter, JsonReporter, MarkdownReporter};
use crate::application::dto::ReportFormat;
use crate::application::factories::{PresenterFactory, PresenterType};
use crate::ports::outbound::DiffReporter;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Configuration of one extra reporter sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterSpec {
    pub format: ReportFormat,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
}

impl ReporterSpec {
    pub fn new(format: ReportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }
}

/// Stream receiving the built-in console report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    /// Stdout, unless an extra report is written there
    pub fn for_reporters(specs: &[ReporterSpec]) -> Self {
        if specs.iter().any(|spec| spec.output.is_none()) {
            ConsoleTarget::Stderr
        } else {
            ConsoleTarget::Stdout
        }
    }

    pub fn is_terminal(self) -> bool {
        match self {
            ConsoleTarget::Stdout => io::stdout().is_terminal(),
            ConsoleTarget::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Factory for reporter sinks
///
/// Sinks are built from a static list of specs; the console sink is created
/// separately because it is always present and always first.
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates the built-in console sink
    pub fn create_default(target: ConsoleTarget, use_color: bool) -> Box<dyn DiffReporter> {
        match target {
            ConsoleTarget::Stdout => Box::new(ConsoleReporter::new(io::stdout(), use_color)),
            ConsoleTarget::Stderr => Box::new(ConsoleReporter::new(io::stderr(), use_color)),
        }
    }

    /// Creates an extra sink for one reporter entry
    pub fn create(spec: &ReporterSpec) -> Box<dyn DiffReporter> {
        let presenter = PresenterFactory::create(PresenterType::from(spec.output.clone()));
        match spec.format {
            ReportFormat::Json => Box::new(JsonReporter::new(presenter)),
            ReportFormat::Markdown => Box::new(MarkdownReporter::new(presenter)),
        }
    }

    /// Creates all extra sinks, keeping entry order
    pub fn create_all(specs: &[ReporterSpec]) -> Vec<Box<dyn DiffReporter>> {
        specs.iter().map(Self::create).collect()
    }

    /// Progress message shown before a report is written
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Json => "📝 Generating JSON diff report...",
            ReportFormat::Markdown => "📝 Generating Markdown diff report...",
        }
    }
}
