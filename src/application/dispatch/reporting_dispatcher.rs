use crate::dependency_diff::domain::DependencyDiff;
use crate::ports::outbound::DiffReporter;
use crate::shared::Result;

/// ReportingDispatcher - fans a computed diff out to every reporter sink
///
/// The default sink is always first; extra sinks follow in registration order.
/// Each sink receives the complete callback sequence before the next sink
/// starts.
pub struct ReportingDispatcher {
    reporters: Vec<Box<dyn DiffReporter>>,
}

impl ReportingDispatcher {
    /// Creates a dispatcher whose first sink is `default_reporter`
    pub fn new(default_reporter: Box<dyn DiffReporter>) -> Self {
        Self {
            reporters: vec![default_reporter],
        }
    }

    /// Appends an additional sink after the ones already registered
    pub fn register(&mut self, reporter: Box<dyn DiffReporter>) {
        self.reporters.push(reporter);
    }

    pub fn with_reporters<I>(mut self, reporters: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn DiffReporter>>,
    {
        self.reporters.extend(reporters);
        self
    }

    pub fn reporter_count(&self) -> usize {
        self.reporters.len()
    }

    /// Sends the diff to every sink
    ///
    /// # Errors
    /// Stops at the first sink callback that fails and returns its error.
    pub fn dispatch(&mut self, diff: &DependencyDiff) -> Result<()> {
        for reporter in self.reporters.iter_mut() {
            Self::dispatch_to(reporter.as_mut(), diff)?;
        }
        Ok(())
    }

    fn dispatch_to(reporter: &mut dyn DiffReporter, diff: &DependencyDiff) -> Result<()> {
        for dep in &diff.added {
            reporter.add_new_dependency(dep.gav())?;
        }
        for dep in &diff.removed {
            reporter.add_removed_dependency(dep.gav())?;
        }
        for change in &diff.major {
            reporter.add_major_version_upgrade(change)?;
        }
        for change in &diff.minor {
            reporter.add_minor_version_upgrade(change)?;
        }
        for change in &diff.micro {
            reporter.add_micro_version_upgrade(change)?;
        }
        reporter.done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_diff::domain::{Dependency, VersionChange};
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct RecordingReporter {
        name: &'static str,
        log: EventLog,
        fail_on_done: bool,
    }

    impl RecordingReporter {
        fn boxed(name: &'static str, log: &EventLog) -> Box<dyn DiffReporter> {
            Box::new(Self {
                name,
                log: Rc::clone(log),
                fail_on_done: false,
            })
        }

        fn record(&self, event: String) -> Result<()> {
            self.log.borrow_mut().push(format!("{}:{}", self.name, event));
            Ok(())
        }
    }

    impl DiffReporter for RecordingReporter {
        fn add_new_dependency(&mut self, gav: &str) -> Result<()> {
            self.record(format!("added {}", gav))
        }
        fn add_removed_dependency(&mut self, gav: &str) -> Result<()> {
            self.record(format!("removed {}", gav))
        }
        fn add_major_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
            self.record(format!("major {}", change.original_gav()))
        }
        fn add_minor_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
            self.record(format!("minor {}", change.original_gav()))
        }
        fn add_micro_version_upgrade(&mut self, change: &VersionChange) -> Result<()> {
            self.record(format!("micro {}", change.original_gav()))
        }
        fn done(&mut self) -> Result<()> {
            if self.fail_on_done {
                anyhow::bail!("sink {} failed", self.name);
            }
            self.record("done".to_string())
        }
    }

    fn dep(artifact: &str, version: &str) -> Dependency {
        Dependency::new("g", artifact, None, None, version).unwrap()
    }

    fn sample_diff() -> DependencyDiff {
        DependencyDiff {
            added: vec![dep("c", "1.0.0")],
            removed: vec![dep("a", "1.0.0")],
            major: vec![VersionChange::new(dep("d", "1.0.0"), dep("d", "2.0.0"))],
            minor: vec![VersionChange::new(dep("b", "2.0.0"), dep("b", "2.1.0"))],
            micro: vec![VersionChange::new(dep("e", "1.0.0"), dep("e", "1.0.1"))],
        }
    }

    #[test]
    fn test_dispatch_order_within_one_sink() {
        let log = EventLog::default();
        let mut dispatcher = ReportingDispatcher::new(RecordingReporter::boxed("console", &log));

        dispatcher.dispatch(&sample_diff()).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "console:added g:c:1.0.0",
                "console:removed g:a:1.0.0",
                "console:major g:d:1.0.0",
                "console:minor g:b:2.0.0",
                "console:micro g:e:1.0.0",
                "console:done",
            ]
        );
    }

    #[test]
    fn test_default_sink_first_and_sinks_see_identical_sequence() {
        let log = EventLog::default();
        let mut dispatcher = ReportingDispatcher::new(RecordingReporter::boxed("default", &log))
            .with_reporters(vec![RecordingReporter::boxed("extra", &log)]);

        dispatcher.dispatch(&sample_diff()).unwrap();

        let events = log.borrow();
        assert_eq!(events.len(), 12);
        let (first, second) = events.split_at(6);
        assert!(first.iter().all(|e| e.starts_with("default:")));
        let strip = |events: &[String]| -> Vec<String> {
            events
                .iter()
                .map(|e| e.split_once(':').unwrap().1.to_string())
                .collect()
        };
        assert_eq!(strip(first), strip(second));
    }

    #[test]
    fn test_empty_diff_only_signals_done() {
        let log = EventLog::default();
        let mut dispatcher = ReportingDispatcher::new(RecordingReporter::boxed("console", &log));
        dispatcher.register(RecordingReporter::boxed("json", &log));

        dispatcher.dispatch(&DependencyDiff::default()).unwrap();

        assert_eq!(*log.borrow(), vec!["console:done", "json:done"]);
        assert_eq!(dispatcher.reporter_count(), 2);
    }

    #[test]
    fn test_sink_failure_is_propagated() {
        let log = EventLog::default();
        let mut dispatcher = ReportingDispatcher::new(Box::new(RecordingReporter {
            name: "broken",
            log: Rc::clone(&log),
            fail_on_done: true,
        }));
        dispatcher.register(RecordingReporter::boxed("later", &log));

        let err = dispatcher.dispatch(&DependencyDiff::default()).unwrap_err();

        assert!(err.to_string().contains("sink broken failed"));
        assert!(log.borrow().is_empty());
    }
}
