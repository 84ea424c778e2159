mod dependency_filter;
mod dependency_merger;
mod diff_calculator;

pub use dependency_filter::DependencyFilter;
pub use dependency_merger::DependencyMerger;
pub use diff_calculator::DiffCalculator;
