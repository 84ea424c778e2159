//! dep-tree-diff - dependency tree comparison tool for Maven builds
//!
//! This library compares two snapshots of a project's resolved dependencies
//! (each possibly spread across several `mvn dependency:tree` reports) and
//! classifies every difference as added, removed, or a major/minor/micro
//! version upgrade, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_diff`): Version model, merge and diff logic
//! - **Application Layer** (`application`): Use cases, DTOs, reporting dispatch
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_tree_diff::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let use_case = DiffDependencyTreesUseCase::new(
//!     FileSystemReader::new(),
//!     MavenTreeParser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = DiffRequest::builder()
//!     .original_file("before.txt")
//!     .new_file("after.txt")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Report
//! let console = ReporterFactory::create_default(ConsoleTarget::Stdout, false);
//! let mut dispatcher = ReportingDispatcher::new(console);
//! dispatcher.dispatch(&response.diff)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_diff;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::parsers::MavenTreeParser;
    pub use crate::adapters::outbound::reporters::{
        ConsoleReporter, JsonReporter, MarkdownReporter,
    };
    pub use crate::application::dispatch::ReportingDispatcher;
    pub use crate::application::dto::{DiffRequest, DiffResponse, ReportFormat};
    pub use crate::application::factories::{ConsoleTarget, ReporterFactory, ReporterSpec};
    pub use crate::application::use_cases::DiffDependencyTreesUseCase;
    pub use crate::dependency_diff::domain::{
        ChangeSeverity, Dependency, DependencyDiff, DependencyKey, DependencySet, MergeConflict,
        Version, VersionChange, VersionComponent,
    };
    pub use crate::dependency_diff::services::{DependencyFilter, DependencyMerger, DiffCalculator};
    pub use crate::ports::inbound::DependencyDiffPort;
    pub use crate::ports::outbound::{
        DependencyTreeParser, DependencyTreeReader, DiffReporter, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
