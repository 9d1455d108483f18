// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Ordinal, SuiteEvent, SuiteEventKind};
use chrono::{DateTime, FixedOffset};

pub(crate) fn ts(secs: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp(secs, 0)
        .expect("timestamp is in range")
        .fixed_offset()
}

pub(crate) fn event(ordinal: &[u32], secs: i64, kind: SuiteEventKind) -> SuiteEvent {
    SuiteEvent {
        ordinal: Ordinal::from(ordinal),
        timestamp: ts(secs),
        kind,
    }
}

pub(crate) fn suite_starting(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::SuiteStarting {
            suite_name: name.to_owned(),
            suite_class_name: None,
        },
    )
}

pub(crate) fn suite_completed(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::SuiteCompleted {
            suite_name: name.to_owned(),
        },
    )
}

pub(crate) fn suite_aborted(ordinal: &[u32], secs: i64, name: &str, message: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::SuiteAborted {
            suite_name: name.to_owned(),
            message: message.to_owned(),
        },
    )
}

pub(crate) fn test_starting(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestStarting {
            test_name: name.to_owned(),
        },
    )
}

pub(crate) fn test_succeeded(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestSucceeded {
            test_name: name.to_owned(),
        },
    )
}

pub(crate) fn test_failed(ordinal: &[u32], secs: i64, name: &str, message: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestFailed {
            test_name: name.to_owned(),
            message: message.to_owned(),
            stack_trace: None,
        },
    )
}

pub(crate) fn test_ignored(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestIgnored {
            test_name: name.to_owned(),
        },
    )
}

pub(crate) fn test_pending(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestPending {
            test_name: name.to_owned(),
        },
    )
}

pub(crate) fn test_canceled(ordinal: &[u32], secs: i64, name: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::TestCanceled {
            test_name: name.to_owned(),
            message: None,
        },
    )
}

pub(crate) fn info_provided(ordinal: &[u32], secs: i64, message: &str) -> SuiteEvent {
    event(
        ordinal,
        secs,
        SuiteEventKind::InfoProvided {
            message: message.to_owned(),
        },
    )
}
