use trellis_testhooks::{RecordingHost, TestFailure, TestLifecycleHost, TestNameQuery, TestSpan};

// ---- Ordering ----

#[test]
fn start_then_finish_leaves_no_failure_and_no_active_test() {
    let host = RecordingHost::new();

    host.started_test(Some("A"));
    assert!(host.is_running());
    assert_eq!(host.current_test_name().as_deref(), Some("A"));

    host.finished_test(Some("A"));
    assert!(!host.is_running());
    assert_eq!(host.current_test_name(), None);
    assert_eq!(host.last_failure(), None);

    let outcomes = host.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].passed);
    assert_eq!(outcomes[0].name.as_deref(), Some("A"));
}

#[test]
fn start_then_fail_records_the_supplied_diagnostic() {
    let host = RecordingHost::new();
    let cause = TestFailure::new("layout diverged")
        .with_code(12)
        .with_domain("TrellisLayout");

    host.started_test(Some("B"));
    host.failed_test(Some("B"), Some(cause.clone()));

    assert!(!host.is_running());
    assert_eq!(host.last_failure(), Some(cause));

    let outcomes = host.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].passed);
}

#[test]
fn failure_without_a_structured_cause_is_accepted() {
    let host = RecordingHost::new();

    host.started_test(Some("C"));
    host.failed_test(Some("C"), None);

    assert_eq!(host.last_failure(), None);
    let outcomes = host.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].passed);
    assert_eq!(outcomes[0].failure, None);
}

// ---- Unnamed tests ----

#[test]
fn unnamed_start_and_finish_complete_without_error() {
    let host = RecordingHost::new();

    host.started_test(None);
    assert!(host.is_running());
    // Active but unnamed: the query reports no name.
    assert_eq!(host.current_test_name(), None);

    host.finished_test(None);
    assert!(!host.is_running());

    let outcomes = host.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].name, None);
    assert!(outcomes[0].passed);
}

// ---- Double-start policy ----

#[test]
fn second_start_overwrites_the_active_test() {
    let host = RecordingHost::new();

    host.started_test(Some("first"));
    host.started_test(Some("second"));

    assert_eq!(host.current_test_name().as_deref(), Some("second"));
    // The overwritten test never completed; nothing is recorded for it.
    assert!(host.outcomes().is_empty());

    host.finished_test(Some("second"));
    assert_eq!(host.outcomes().len(), 1);
}

// ---- Sequential sessions ----

#[test]
fn outcomes_accumulate_in_completion_order() {
    let host = RecordingHost::new();

    host.started_test(Some("one"));
    host.finished_test(Some("one"));
    host.started_test(Some("two"));
    host.failed_test(Some("two"), Some(TestFailure::new("boom")));
    host.started_test(Some("three"));
    host.finished_test(Some("three"));

    let outcomes = host.outcomes();
    let names: Vec<Option<&str>> = outcomes.iter().map(|o| o.name.as_deref()).collect();
    assert_eq!(names, vec![Some("one"), Some("two"), Some("three")]);

    let passed: Vec<bool> = outcomes.iter().map(|o| o.passed).collect();
    assert_eq!(passed, vec![true, false, true]);
}

// ---- Span guard ----

#[test]
fn span_guard_wraps_a_session() {
    let host = RecordingHost::new();
    {
        let _span = TestSpan::enter(Some("spanned"));
        host.started_test(Some("spanned"));
        host.finished_test(Some("spanned"));
    }
    assert_eq!(host.outcomes().len(), 1);
}

// ---- Trait objects ----

#[test]
fn hosts_are_usable_behind_the_trait() {
    let host = RecordingHost::new();
    let dyn_host: &dyn TestLifecycleHost = &host;

    dyn_host.started_test(Some("dyn"));
    dyn_host.finished_test(Some("dyn"));

    assert_eq!(host.outcomes().len(), 1);
}
