// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folds a resolved suite scope into a [`SuiteReport`].

use crate::{SuiteEvent, SuiteEventKind};
use chrono::{DateTime, FixedOffset};
use std::time::Duration;
use suite_junit::{Property, SuiteReport, TestCase, TestCaseStatus};

/// Folds the closed interval of events produced by scope resolution into a
/// report, left to right.
///
/// The interval must begin with the suite's SuiteStarting and end with its
/// SuiteCompleted/SuiteAborted. TestStarting opens a test record which is
/// closed by the next test-terminating event; InfoProvided is consumed
/// without output. Pending and canceled tests are accounted for but do not
/// appear in the report.
///
/// # Panics
///
/// Panics on any event not expected at its nesting position. The interval
/// comes from the trusted in-process event source, so a malformed sequence
/// is a programming defect upstream.
pub(crate) fn fold_suite(
    scope: &[SuiteEvent],
    hostname: &str,
    properties: &[Property],
) -> SuiteReport {
    let opening = scope.first().expect("suite scope is never empty");
    let SuiteEventKind::SuiteStarting {
        suite_name,
        suite_class_name,
    } = &opening.kind
    else {
        panic!(
            "expected SuiteStarting to open the suite, found {} at ordinal {}",
            opening.kind.name(),
            opening.ordinal,
        );
    };
    let resolved_name = suite_class_name.as_ref().unwrap_or(suite_name).clone();
    let closing = scope.last().expect("suite scope is never empty");

    let mut report = SuiteReport::new(&resolved_name, hostname);
    report
        .set_timestamp(opening.timestamp)
        .set_time(elapsed_between(opening.timestamp, closing.timestamp))
        .add_properties(properties.iter().cloned());

    match &closing.kind {
        SuiteEventKind::SuiteCompleted { .. } => {}
        SuiteEventKind::SuiteAborted { message, .. } => {
            report.set_errors(1);
            report.set_system_err(message);
        }
        other => panic!(
            "expected a suite terminating event to close the suite, found {} at ordinal {}",
            other.name(),
            closing.ordinal,
        ),
    }

    // Pending/canceled tests are tracked but excluded from the report.
    let mut excluded = 0_usize;

    let body = &scope[1..scope.len() - 1];
    let mut index = 0;
    while index < body.len() {
        let event = &body[index];
        match &event.kind {
            SuiteEventKind::TestStarting { test_name } => {
                // Scan forward to the event that closes this test, consuming
                // any informational events in between.
                let mut scan = index + 1;
                let terminating = loop {
                    let candidate = body.get(scan).unwrap_or_else(|| {
                        panic!(
                            "test {test_name} at ordinal {} never terminated",
                            event.ordinal
                        )
                    });
                    match &candidate.kind {
                        kind if kind.is_test_terminating() => break candidate,
                        SuiteEventKind::InfoProvided { .. } => scan += 1,
                        other => panic!(
                            "unexpected {} at ordinal {} while test {test_name} is running",
                            other.name(),
                            candidate.ordinal,
                        ),
                    }
                };
                let time = elapsed_between(event.timestamp, terminating.timestamp);
                match &terminating.kind {
                    SuiteEventKind::TestSucceeded { test_name: closed } => {
                        check_test_name(test_name, closed, terminating);
                        let mut test_case = TestCase::new(test_name, TestCaseStatus::success());
                        test_case.set_classname(&resolved_name).set_time(time);
                        report.add_test_case(test_case);
                    }
                    SuiteEventKind::TestFailed {
                        test_name: closed,
                        message,
                        stack_trace,
                    } => {
                        check_test_name(test_name, closed, terminating);
                        let mut status = TestCaseStatus::failure();
                        status.set_message(message).set_type("test failure");
                        if let Some(stack_trace) = stack_trace {
                            status.set_stack_trace(stack_trace);
                        }
                        let mut test_case = TestCase::new(test_name, status);
                        test_case.set_classname(&resolved_name).set_time(time);
                        report.add_test_case(test_case);
                    }
                    SuiteEventKind::TestPending { test_name: closed }
                    | SuiteEventKind::TestCanceled {
                        test_name: closed, ..
                    } => {
                        check_test_name(test_name, closed, terminating);
                        excluded += 1;
                    }
                    _ => unreachable!("the scan only stops at test terminating events"),
                }
                index = scan + 1;
            }
            SuiteEventKind::TestIgnored { test_name } => {
                let mut test_case = TestCase::new(test_name, TestCaseStatus::success());
                test_case
                    .set_classname(&resolved_name)
                    .set_time(Duration::ZERO)
                    .set_ignored(true);
                report.add_test_case(test_case);
                index += 1;
            }
            SuiteEventKind::InfoProvided { .. } => index += 1,
            other => panic!(
                "unexpected {} at ordinal {} while aggregating suite {resolved_name}",
                other.name(),
                event.ordinal,
            ),
        }
    }

    if excluded > 0 {
        tracing::debug!(
            suite = %resolved_name,
            excluded,
            "pending/canceled test cases excluded from report"
        );
    }
    report
}

fn check_test_name(running: &str, closed: &str, terminating: &SuiteEvent) {
    assert!(
        running == closed,
        "{} for test {closed} at ordinal {} while test {running} is running",
        terminating.kind.name(),
        terminating.ordinal,
    );
}

fn elapsed_between(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Duration {
    end.signed_duration_since(start)
        .to_std()
        .unwrap_or_else(|_| panic!("event timestamps went backwards: {start} -> {end}"))
}
