// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Reconstructs per-suite JUnit XML reports from an interleaved stream of
//! test lifecycle events.
//!
//! Suites (including nested suites) may run on parallel worker threads, so
//! their events interleave arbitrarily in the stream. Each event carries an
//! [`Ordinal`]: a prefix-structured position tag whose total order is
//! consistent with suite nesting. The [`XmlReporter`] buffers events in a
//! shared pending set and, whenever a suite-terminating event arrives,
//! isolates that suite's events by ordinal prefix, folds them into a
//! [`SuiteReport`](suite_junit::SuiteReport), and writes one XML document
//! per suite to the output directory.
//!
//! The event source is the trusted, in-process test-execution engine: a
//! malformed event sequence (a completion without a start, an unexpected
//! event mid-suite) is a programming defect upstream and causes a panic
//! rather than a recoverable error. I/O failures writing reports are
//! returned as errors and never retried.

mod aggregator;
pub mod errors;
mod events;
mod ordinal;
mod pending;
mod reporter;
#[cfg(test)]
mod test_helpers;

pub use events::*;
pub use ordinal::Ordinal;
pub use reporter::*;
