//! In-memory reference host.

use std::sync::Mutex;

use tracing::warn;

use crate::failure::TestFailure;
use crate::host::{TestLifecycleHost, TestNameQuery};
use crate::obs;

/// A completed test as kept by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedOutcome {
    /// Test name; `None` for the unnamed path.
    pub name: Option<String>,
    /// Whether the test completed without a reported failure.
    pub passed: bool,
    /// Diagnostic supplied on failure, when any.
    pub failure: Option<TestFailure>,
}

#[derive(Debug, Default)]
struct HostState {
    active: Option<ActiveTest>,
    outcomes: Vec<RecordedOutcome>,
}

#[derive(Debug)]
struct ActiveTest {
    name: Option<String>,
}

/// Reference [`TestLifecycleHost`] that keeps session state in memory.
///
/// Backs the integration tests and serves as the host on targets with
/// no native application object. Interior mutability keeps the
/// notification surface `&self` like the native adapters; the lock is
/// internal, so callers need no coordination of their own.
///
/// A `started_test` while a test is already active overwrites the
/// active test and logs a warning; nested tests are not modeled.
#[derive(Debug, Default)]
pub struct RecordingHost {
    state: Mutex<HostState>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a test is currently active.
    pub fn is_running(&self) -> bool {
        self.state.lock().unwrap().active.is_some()
    }

    /// Completed tests, in completion order.
    pub fn outcomes(&self) -> Vec<RecordedOutcome> {
        self.state.lock().unwrap().outcomes.clone()
    }

    /// Most recent failure diagnostic, if any test recorded one.
    pub fn last_failure(&self) -> Option<TestFailure> {
        self.state
            .lock()
            .unwrap()
            .outcomes
            .iter()
            .rev()
            .find_map(|outcome| outcome.failure.clone())
    }
}

impl TestLifecycleHost for RecordingHost {
    fn started_test(&self, name: Option<&str>) {
        obs::emit_test_started(name);
        let mut state = self.state.lock().unwrap();
        if let Some(previous) = state.active.take() {
            warn!(
                event = "test.overwritten",
                previous = previous.name.as_deref().unwrap_or(obs::UNNAMED),
                next = name.unwrap_or(obs::UNNAMED),
            );
        }
        state.active = Some(ActiveTest {
            name: name.map(str::to_owned),
        });
    }

    fn finished_test(&self, name: Option<&str>) {
        obs::emit_test_finished(name);
        let mut state = self.state.lock().unwrap();
        state.active = None;
        state.outcomes.push(RecordedOutcome {
            name: name.map(str::to_owned),
            passed: true,
            failure: None,
        });
    }

    fn failed_test(&self, name: Option<&str>, failure: Option<TestFailure>) {
        obs::emit_test_failed(name, failure.as_ref());
        let mut state = self.state.lock().unwrap();
        state.active = None;
        state.outcomes.push(RecordedOutcome {
            name: name.map(str::to_owned),
            passed: false,
            failure,
        });
    }
}

impl TestNameQuery for RecordingHost {
    fn current_test_name(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .active
            .as_ref()
            .and_then(|test| test.name.clone())
    }
}
