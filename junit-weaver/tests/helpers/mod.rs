// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use junit_weaver::{Ordinal, SuiteEvent, SuiteEventKind};

pub fn ts(secs: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp(secs, 0)
        .expect("timestamp is in range")
        .fixed_offset()
}

pub fn ts_millis(millis: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp_millis(millis)
        .expect("timestamp is in range")
        .fixed_offset()
}

pub fn event(ordinal: &[u32], timestamp: DateTime<FixedOffset>, kind: SuiteEventKind) -> SuiteEvent {
    SuiteEvent {
        ordinal: Ordinal::from(ordinal),
        timestamp,
        kind,
    }
}

pub fn suite_starting(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::SuiteStarting {
            suite_name: name.to_owned(),
            suite_class_name: None,
        },
    )
}

pub fn suite_completed(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::SuiteCompleted {
            suite_name: name.to_owned(),
        },
    )
}

pub fn suite_aborted(ordinal: &[u32], secs: i64, name: &str, message: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::SuiteAborted {
            suite_name: name.to_owned(),
            message: message.to_owned(),
        },
    )
}

pub fn test_starting(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::TestStarting {
            test_name: name.to_owned(),
        },
    )
}

pub fn test_succeeded(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::TestSucceeded {
            test_name: name.to_owned(),
        },
    )
}

pub fn test_failed(ordinal: &[u32], secs: i64, name: &str, message: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::TestFailed {
            test_name: name.to_owned(),
            message: message.to_owned(),
            stack_trace: None,
        },
    )
}

pub fn test_ignored(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::TestIgnored {
            test_name: name.to_owned(),
        },
    )
}

pub fn test_pending(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        ts(secs),
        SuiteEventKind::TestPending {
            test_name: name.to_owned(),
        },
    )
}
