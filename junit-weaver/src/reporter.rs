// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingests suite lifecycle events and writes per-suite XML reports.
//!
//! The main type here is [`XmlReporter`], which is constructed via an
//! [`XmlReporterBuilder`].

use crate::{
    SuiteEvent,
    aggregator::fold_suite,
    errors::{ReporterBuildError, WriteEventError},
    pending::PendingSet,
};
use camino::{Utf8Path, Utf8PathBuf};
use debug_ignore::DebugIgnore;
use std::{fs::File, sync::Mutex};
use suite_junit::{Property, SuiteReport};

/// XML reporter builder.
#[derive(Debug, Default)]
pub struct XmlReporterBuilder {
    hostname: Option<String>,
    properties: Option<Vec<Property>>,
}

impl XmlReporterBuilder {
    /// Overrides the hostname recorded on every report.
    ///
    /// By default the local hostname is resolved at build time.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Overrides the properties recorded on every report.
    ///
    /// By default the process environment is snapshotted at build time.
    pub fn set_properties(
        &mut self,
        properties: impl IntoIterator<Item = impl Into<Property>>,
    ) -> &mut Self {
        self.properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Creates a new XML reporter writing to the given output directory.
    pub fn build(
        &self,
        output_dir: impl Into<Utf8PathBuf>,
    ) -> Result<XmlReporter, ReporterBuildError> {
        let hostname = match &self.hostname {
            Some(hostname) => hostname.clone(),
            None => resolve_hostname()?,
        };
        let properties = self.properties.clone().unwrap_or_else(|| {
            std::env::vars()
                .map(|(name, value)| Property::new(name, value))
                .collect()
        });
        Ok(XmlReporter {
            output_dir: output_dir.into(),
            hostname,
            properties: DebugIgnore(properties),
            pending: Mutex::new(PendingSet::default()),
        })
    }
}

/// Consumes a stream of [`SuiteEvent`]s and writes one JUnit-style XML
/// document per completed suite, named `<resolved-suite-name>.xml`, into the
/// output directory.
///
/// `report_event` may be called concurrently from the worker threads running
/// the suites. Received events are buffered in a pending set behind a single
/// coarse lock; a suite's report is generated on the thread that delivered
/// its terminating event, after that suite's events have been extracted from
/// the set, so ingestion for other suites is not blocked by report writing.
#[derive(Debug)]
pub struct XmlReporter {
    output_dir: Utf8PathBuf,
    hostname: String,
    properties: DebugIgnore<Vec<Property>>,
    pending: Mutex<PendingSet>,
}

impl XmlReporter {
    /// Creates a reporter with default settings; see [`XmlReporterBuilder`].
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Result<Self, ReporterBuildError> {
        Self::builder().build(output_dir)
    }

    /// Returns a builder for configuring a reporter.
    pub fn builder() -> XmlReporterBuilder {
        XmlReporterBuilder::default()
    }

    /// Returns the directory reports are written to.
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Ingests one event.
    ///
    /// If the event terminates a suite (SuiteCompleted or SuiteAborted),
    /// that suite's report is generated and written out before this call
    /// returns.
    ///
    /// # Panics
    ///
    /// Panics if the event stream violates its lifecycle guarantees, e.g. a
    /// suite completion with no prior SuiteStarting at the same ordinal
    /// prefix. The event source is the in-process test-execution engine, so
    /// this is a defect upstream, not a recoverable error.
    pub fn report_event(&self, event: SuiteEvent) -> Result<(), WriteEventError> {
        tracing::debug!(
            kind = event.kind.name(),
            ordinal = %event.ordinal,
            "event received"
        );
        let scope = {
            let mut pending = self.pending.lock().expect("pending event set lock poisoned");
            let terminating = event.kind.is_suite_terminating();
            let id = pending.insert(event);
            tracing::trace!(pending = pending.len(), "event buffered");
            terminating.then(|| pending.extract_suite(id))
        };
        if let Some(scope) = scope {
            let report = fold_suite(&scope, &self.hostname, &self.properties);
            self.write_report(&report)?;
        }
        Ok(())
    }

    fn write_report(&self, report: &SuiteReport) -> Result<(), WriteEventError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|error| WriteEventError::Fs {
            file: self.output_dir.clone(),
            error,
        })?;

        let path = self.output_dir.join(format!("{}.xml", report.name));
        let file = File::create(&path).map_err(|error| WriteEventError::Fs {
            file: path.clone(),
            error,
        })?;
        report.serialize(file).map_err(|error| WriteEventError::Xml {
            file: path.clone(),
            error,
        })?;

        tracing::info!(
            file = %path,
            tests = report.tests,
            failures = report.failures,
            errors = report.errors,
            "suite report written"
        );
        Ok(())
    }
}

fn resolve_hostname() -> Result<String, ReporterBuildError> {
    hostname::get()
        .map_err(ReporterBuildError::HostnameResolve)?
        .into_string()
        .map_err(|hostname| ReporterBuildError::HostnameInvalidUtf8 { hostname })
}
