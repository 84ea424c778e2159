use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::application::factories::ReporterSpec;

/// Compare Maven dependency trees and report added, removed and upgraded dependencies
#[derive(Parser, Debug)]
#[command(name = "dep-tree-diff")]
#[command(version)]
#[command(
    about = "Compare Maven dependency trees and report added, removed and upgraded dependencies",
    long_about = None
)]
pub struct Args {
    /// Dependency tree files of the original build (later files override earlier ones)
    #[arg(long, value_name = "FILE", num_args = 1.., required = true)]
    pub original: Vec<PathBuf>,

    /// Dependency tree files of the new build (later files override earlier ones)
    #[arg(long, value_name = "FILE", num_args = 1.., required = true)]
    pub new: Vec<PathBuf>,

    /// Additional report format: json or markdown
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file for the additional report (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude dependencies matching patterns on group:artifact (supports wildcards: *)
    /// Can be specified multiple times: -e "org.acme:*" -e "*:junit"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to dep-tree-diff.config.yml in the current directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any dependency change is detected
    #[arg(long)]
    pub fail_on_changes: bool,

    /// Disable coloured console output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The extra reporter requested on the command line, if any
    ///
    /// `--output` alone implies JSON.
    pub fn reporter_spec(&self) -> Option<ReporterSpec> {
        if self.format.is_none() && self.output.is_none() {
            return None;
        }
        Some(ReporterSpec::new(
            self.format.unwrap_or(ReportFormat::Json),
            self.output.clone(),
        ))
    }
}
