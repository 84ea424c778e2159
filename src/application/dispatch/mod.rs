/// Dispatch of computed diffs to reporter sinks
mod reporting_dispatcher;

pub use reporting_dispatcher::ReportingDispatcher;
