use dep_tree_diff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DependencyTreeReader serving tree reports from memory
#[derive(Default, Clone)]
pub struct MockTreeReader {
    trees: HashMap<PathBuf, String>,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockTreeReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, path: &str, content: &str) -> Self {
        self.trees.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn read_paths(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl DependencyTreeReader for MockTreeReader {
    fn read_tree(&self, path: &Path) -> Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.trees
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock tree not found: {}", path.display()))
    }
}
