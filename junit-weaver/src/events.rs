// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::Ordinal;
use chrono::{DateTime, FixedOffset};

/// A suite lifecycle event.
///
/// Events are produced by the test-execution engine and consumed by an
/// [`XmlReporter`](crate::XmlReporter). Emission order is guaranteed per
/// suite lineage, not globally: events from concurrently running suites
/// interleave.
#[derive(Clone, Debug)]
pub struct SuiteEvent {
    /// The position of this event in the run, consistent with suite nesting.
    pub ordinal: Ordinal,

    /// The time at which the event was generated, including the offset from
    /// UTC.
    pub timestamp: DateTime<FixedOffset>,

    /// The kind of suite event this is.
    pub kind: SuiteEventKind,
}

/// The kind of suite event this is.
///
/// Forms part of [`SuiteEvent`].
#[derive(Clone, Debug)]
pub enum SuiteEventKind {
    /// A suite started running.
    SuiteStarting {
        /// The name of the suite.
        suite_name: String,

        /// The fully qualified class name of the suite, if known. When
        /// present, this is used as the resolved suite name.
        suite_class_name: Option<String>,
    },

    /// A suite finished running.
    SuiteCompleted {
        /// The name of the suite.
        suite_name: String,
    },

    /// A suite aborted before completing.
    SuiteAborted {
        /// The name of the suite.
        suite_name: String,

        /// Why the suite aborted.
        message: String,
    },

    /// A test started running.
    TestStarting {
        /// The name of the test.
        test_name: String,
    },

    /// A test passed.
    TestSucceeded {
        /// The name of the test.
        test_name: String,
    },

    /// A test failed.
    TestFailed {
        /// The name of the test.
        test_name: String,

        /// The failure message.
        message: String,

        /// The stack trace, if any.
        stack_trace: Option<String>,
    },

    /// A test was ignored and never started.
    TestIgnored {
        /// The name of the test.
        test_name: String,
    },

    /// A test body was declared but is not yet implemented.
    TestPending {
        /// The name of the test.
        test_name: String,
    },

    /// A test was canceled.
    TestCanceled {
        /// The name of the test.
        test_name: String,

        /// Why the test was canceled, if known.
        message: Option<String>,
    },

    /// Free-form informational output.
    InfoProvided {
        /// The message.
        message: String,
    },
}

impl SuiteEventKind {
    /// Returns true if this event closes a suite: SuiteCompleted or
    /// SuiteAborted.
    pub fn is_suite_terminating(&self) -> bool {
        matches!(
            self,
            SuiteEventKind::SuiteCompleted { .. } | SuiteEventKind::SuiteAborted { .. }
        )
    }

    /// Returns true if this event closes an open test: TestSucceeded,
    /// TestFailed, TestPending or TestCanceled.
    pub fn is_test_terminating(&self) -> bool {
        matches!(
            self,
            SuiteEventKind::TestSucceeded { .. }
                | SuiteEventKind::TestFailed { .. }
                | SuiteEventKind::TestPending { .. }
                | SuiteEventKind::TestCanceled { .. }
        )
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            SuiteEventKind::SuiteStarting { .. } => "SuiteStarting",
            SuiteEventKind::SuiteCompleted { .. } => "SuiteCompleted",
            SuiteEventKind::SuiteAborted { .. } => "SuiteAborted",
            SuiteEventKind::TestStarting { .. } => "TestStarting",
            SuiteEventKind::TestSucceeded { .. } => "TestSucceeded",
            SuiteEventKind::TestFailed { .. } => "TestFailed",
            SuiteEventKind::TestIgnored { .. } => "TestIgnored",
            SuiteEventKind::TestPending { .. } => "TestPending",
            SuiteEventKind::TestCanceled { .. } => "TestCanceled",
            SuiteEventKind::InfoProvided { .. } => "InfoProvided",
        }
    }
}
