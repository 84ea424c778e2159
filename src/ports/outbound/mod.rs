/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, report sinks).
pub mod dependency_tree_parser;
pub mod dependency_tree_reader;
pub mod diff_reporter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_tree_parser::DependencyTreeParser;
pub use dependency_tree_reader::DependencyTreeReader;
pub use diff_reporter::DiffReporter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
