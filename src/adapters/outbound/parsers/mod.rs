/// Dependency tree parsers for build-tool report formats
mod maven_tree_parser;

pub use maven_tree_parser::MavenTreeParser;
