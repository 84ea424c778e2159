//! Configuration file support for dep-tree-diff.
//!
//! Provides YAML-based configuration through `dep-tree-diff.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ReportFormat;
use crate::application::factories::ReporterSpec;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-tree-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub exclude: Option<Vec<String>>,
    pub reporters: Option<Vec<ReporterEntry>>,
    pub fail_on_changes: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An extra report sink declared in the config file.
#[derive(Debug, Deserialize)]
pub struct ReporterEntry {
    pub format: String,
    pub output: Option<String>,
}

/// Options after combining the config file with the command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub exclude: Vec<String>,
    pub reporters: Vec<ReporterSpec>,
    pub fail_on_changes: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref reporters) = config.reporters {
        for (i, entry) in reporters.iter().enumerate() {
            if let Err(e) = entry.format.parse::<ReportFormat>() {
                bail!(
                    "Invalid config: reporters[{}].format: {}\n\n\
                     💡 Hint: Supported formats are 'json' and 'markdown'.",
                    i,
                    e
                );
            }
            if let Some(ref output) = entry.output {
                if output.trim().is_empty() {
                    bail!(
                        "Invalid config: reporters[{}].output must not be empty.\n\n\
                         💡 Hint: Omit 'output' to write the report to stdout.",
                        i
                    );
                }
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

impl ConfigFile {
    fn reporter_specs(&self) -> Result<Vec<ReporterSpec>> {
        self.reporters
            .iter()
            .flatten()
            .map(|entry| {
                let format = entry
                    .format
                    .parse::<ReportFormat>()
                    .map_err(anyhow::Error::msg)?;
                Ok(ReporterSpec::new(format, entry.output.as_ref().map(PathBuf::from)))
            })
            .collect()
    }
}

/// Combines config values with the command line
///
/// Config entries come first for list values; `fail_on_changes` is set if
/// either side sets it.
pub fn merge_options(
    config: Option<&ConfigFile>,
    cli_exclude: &[String],
    cli_reporter: Option<ReporterSpec>,
    cli_fail_on_changes: bool,
) -> Result<EffectiveOptions> {
    let mut options = EffectiveOptions::default();

    if let Some(config) = config {
        options
            .exclude
            .extend(config.exclude.iter().flatten().cloned());
        options.reporters = config.reporter_specs()?;
        options.fail_on_changes = config.fail_on_changes.unwrap_or(false);
    }

    options.exclude.extend(cli_exclude.iter().cloned());
    options.reporters.extend(cli_reporter);
    options.fail_on_changes |= cli_fail_on_changes;

    let to_stdout = options
        .reporters
        .iter()
        .filter(|spec| spec.output.is_none())
        .count();
    if to_stdout > 1 {
        bail!(
            "Invalid options: {} reports would be written to stdout.\n\n\
             💡 Hint: Give every report but one an output file (`output` in the config, or --output).",
            to_stdout
        );
    }

    Ok(options)
}
