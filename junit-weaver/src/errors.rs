// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by junit-weaver.
//!
//! Only environment and I/O failures surface as errors here. Malformed
//! event sequences are defects in the upstream test-execution engine and
//! panic instead; see the crate-level documentation.

use camino::Utf8PathBuf;
use std::ffi::OsString;
use thiserror::Error;

/// An error that occurs while constructing an
/// [`XmlReporter`](crate::XmlReporter).
///
/// The report schema requires a `hostname` attribute and there is no sane
/// fallback value, so failing to resolve one is fatal.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReporterBuildError {
    /// The local hostname could not be resolved.
    #[error("failed to resolve local hostname")]
    HostnameResolve(#[source] std::io::Error),

    /// The local hostname was not valid UTF-8.
    #[error("local hostname {hostname:?} is not valid UTF-8")]
    HostnameInvalidUtf8 {
        /// The hostname as returned by the operating system.
        hostname: OsString,
    },
}

/// An error that occurs while writing out a suite report.
///
/// These are propagated to the caller and never retried: a partial or
/// missing report file is an acceptable failure mode for a reporting sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteEventError {
    /// An error occurred while operating on the file system.
    #[error("error operating on path {file}")]
    Fs {
        /// The file being operated on.
        file: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// An error occurred while producing suite XML.
    #[error("error writing suite XML to {file}")]
    Xml {
        /// The output file.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: suite_junit::SerializeError,
    },
}
