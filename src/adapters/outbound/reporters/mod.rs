/// Reporter sinks receiving diff callbacks
mod collected_diff;
mod console_reporter;
mod json_reporter;
mod markdown_reporter;

pub use collected_diff::CollectedDiff;
pub use console_reporter::ConsoleReporter;
pub use json_reporter::JsonReporter;
pub use markdown_reporter::MarkdownReporter;
