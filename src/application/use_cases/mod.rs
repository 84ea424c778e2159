/// Use cases module containing application business logic orchestration
mod diff_dependency_trees;

pub use diff_dependency_trees::DiffDependencyTreesUseCase;
