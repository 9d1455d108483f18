// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model and serializer for per-suite JUnit-style XML reports.
//!
//! Unlike the classic `<testsuites>` aggregate format, each
//! [`SuiteReport`] here corresponds to exactly one suite and is written
//! out as its own document with a `<testsuite>` root element.

#![warn(missing_docs)]

mod errors;
mod report;
mod serialize;

pub use errors::*;
pub use report::*;
