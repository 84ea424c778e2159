use dep_tree_diff::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DiffReporter recording every callback as a line of text
#[derive(Default, Clone)]
pub struct MockDiffReporter {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockDiffReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) -> Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

impl DiffReporter for MockDiffReporter {
    fn add_new_dependency(&mut self, gav: &str) -> Result<()> {
        self.record(format!("added {}", gav))
    }

    fn add_removed_dependency(&mut self, gav: &str) -> Result<()> {
        self.record(format!("removed {}", gav))
    }

    fn add_major_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.record(format!("major {}", change))
    }

    fn add_minor_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.record(format!("minor {}", change))
    }

    fn add_micro_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
        self.record(format!("micro {}", change))
    }

    fn done(&mut self) -> Result<()> {
        self.record("done".to_string())
    }
}
