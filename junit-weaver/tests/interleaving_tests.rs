// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feeding events from two independent suites in any relative interleaving
//! (preserving each suite's own internal order) yields identical reports.

mod helpers;

use camino_tempfile::tempdir;
use helpers::*;
use junit_weaver::{SuiteEvent, XmlReporter};
use proptest::prelude::*;

fn alpha_events() -> Vec<SuiteEvent> {
    vec![
        suite_starting(&[0], 0, "Alpha"),
        test_starting(&[0, 0], 0, "a1"),
        test_succeeded(&[0, 1], 2, "a1"),
        test_starting(&[0, 2], 2, "a2"),
        test_failed(&[0, 3], 5, "a2", "alpha failure"),
        test_ignored(&[0, 4], 5, "a3"),
        suite_completed(&[0, 5], 6, "Alpha"),
    ]
}

fn beta_events() -> Vec<SuiteEvent> {
    vec![
        suite_starting(&[1], 1, "Beta"),
        test_starting(&[1, 0], 1, "b1"),
        test_pending(&[1, 1], 3, "b1"),
        test_starting(&[1, 2], 3, "b2"),
        test_succeeded(&[1, 3], 4, "b2"),
        suite_completed(&[1, 4], 4, "Beta"),
    ]
}

/// Merges the two suites' event lists, consuming from whichever side `picks`
/// selects while both have events left, then draining the remainder.
fn merge(picks: &[bool]) -> Vec<SuiteEvent> {
    let mut a = alpha_events().into_iter().peekable();
    let mut b = beta_events().into_iter().peekable();
    let mut merged = Vec::new();
    for &pick_a in picks {
        let next = if pick_a { a.next() } else { b.next() };
        match next {
            Some(event) => merged.push(event),
            None => break,
        }
    }
    merged.extend(a);
    merged.extend(b);
    merged
}

fn run_reporter(events: Vec<SuiteEvent>) -> (String, String) {
    let dir = tempdir().expect("created temp dir");
    let mut builder = XmlReporter::builder();
    builder.set_hostname("testhost").set_properties([("ci", "true")]);
    let reporter = builder.build(dir.path()).expect("hostname is overridden");
    for event in events {
        reporter.report_event(event).expect("event written");
    }
    let alpha = std::fs::read_to_string(dir.path().join("Alpha.xml")).expect("Alpha report");
    let beta = std::fs::read_to_string(dir.path().join("Beta.xml")).expect("Beta report");
    (alpha, beta)
}

proptest! {
    #[test]
    fn interleaving_does_not_change_reports(
        picks in proptest::collection::vec(any::<bool>(), 0..16),
    ) {
        let (alpha_baseline, beta_baseline) = run_reporter(merge(&[]));
        let (alpha, beta) = run_reporter(merge(&picks));
        prop_assert_eq!(alpha_baseline, alpha);
        prop_assert_eq!(beta_baseline, beta);
    }
}
