// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{SerializeError, serialize::serialize_report};
use chrono::{DateTime, FixedOffset};
use indexmap::map::IndexMap;
use std::{io, time::Duration};

/// A report for a single completed test suite.
///
/// Serialized as a standalone XML document with a `<testsuite>` root
/// element, one document per suite.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct SuiteReport {
    /// The name of the suite.
    pub name: String,

    /// The host the suite ran on.
    pub hostname: String,

    /// The number of test cases in this report.
    ///
    /// Pending and canceled test cases are not part of the report and do not
    /// count towards this total.
    pub tests: usize,

    /// The number of suite-level errors (e.g. the suite aborted).
    pub errors: usize,

    /// The number of failed test cases.
    pub failures: usize,

    /// The time at which the suite began execution.
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// The overall time taken by the suite.
    ///
    /// This is serialized as the number of seconds.
    pub time: Option<Duration>,

    /// Properties in effect while the suite ran, e.g. environment variables.
    pub properties: Vec<Property>,

    /// The test cases that form this suite, in execution order.
    pub test_cases: Vec<TestCase>,

    /// Data written to standard output while the suite was executed.
    ///
    /// Serialized as a CDATA section which is present even when empty.
    pub system_out: XmlText,

    /// Data written to standard error while the suite was executed.
    ///
    /// Serialized as a CDATA section which is present even when empty.
    pub system_err: XmlText,

    /// Other fields that may be set as attributes on the root element.
    pub extra: IndexMap<String, String>,
}

impl SuiteReport {
    /// Creates a new `SuiteReport` with the given suite name and hostname.
    pub fn new(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            tests: 0,
            errors: 0,
            failures: 0,
            timestamp: None,
            time: None,
            properties: vec![],
            test_cases: vec![],
            system_out: XmlText::default(),
            system_err: XmlText::default(),
            extra: IndexMap::new(),
        }
    }

    /// Sets the start timestamp for the suite.
    pub fn set_timestamp(&mut self, timestamp: impl Into<DateTime<FixedOffset>>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the time taken by the suite.
    pub fn set_time(&mut self, time: Duration) -> &mut Self {
        self.time = Some(time);
        self
    }

    /// Sets the number of suite-level errors.
    pub fn set_errors(&mut self, errors: usize) -> &mut Self {
        self.errors = errors;
        self
    }

    /// Adds a property to this suite.
    pub fn add_property(&mut self, property: impl Into<Property>) -> &mut Self {
        self.properties.push(property.into());
        self
    }

    /// Adds several properties to this suite.
    pub fn add_properties(
        &mut self,
        properties: impl IntoIterator<Item = impl Into<Property>>,
    ) -> &mut Self {
        for property in properties {
            self.add_property(property);
        }
        self
    }

    /// Adds a test case to this suite and updates the `tests` and `failures`
    /// counts.
    ///
    /// When generating a new report, use of this method is recommended over
    /// adding to `self.test_cases` directly.
    pub fn add_test_case(&mut self, test_case: TestCase) -> &mut Self {
        self.tests += 1;
        if matches!(test_case.status, TestCaseStatus::Failure { .. }) {
            self.failures += 1;
        }
        self.test_cases.push(test_case);
        self
    }

    /// Adds several test cases to this suite and updates the counts.
    pub fn add_test_cases(&mut self, test_cases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        for test_case in test_cases {
            self.add_test_case(test_case);
        }
        self
    }

    /// Sets standard output captured for the suite.
    pub fn set_system_out(&mut self, system_out: impl AsRef<str>) -> &mut Self {
        self.system_out = XmlText::new(system_out);
        self
    }

    /// Sets standard error captured for the suite.
    pub fn set_system_err(&mut self, system_err: impl AsRef<str>) -> &mut Self {
        self.system_err = XmlText::new(system_err);
        self
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_report(self, writer)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// A single test case within a [`SuiteReport`].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestCase {
    /// The name of the test case.
    pub name: String,

    /// The "classname" of the test case, typically the fully qualified name
    /// of the enclosing suite.
    pub classname: Option<String>,

    /// The time it took to execute this test case.
    pub time: Option<Duration>,

    /// Whether the test was pending (declared but not yet implemented).
    pub pending: bool,

    /// Whether the test was ignored.
    pub ignored: bool,

    /// The status of this test.
    pub status: TestCaseStatus,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(name: impl Into<String>, status: TestCaseStatus) -> Self {
        Self {
            name: name.into(),
            classname: None,
            time: None,
            pending: false,
            ignored: false,
            status,
        }
    }

    /// Sets the classname of the test.
    pub fn set_classname(&mut self, classname: impl Into<String>) -> &mut Self {
        self.classname = Some(classname.into());
        self
    }

    /// Sets the time taken by the test.
    pub fn set_time(&mut self, time: Duration) -> &mut Self {
        self.time = Some(time);
        self
    }

    /// Marks the test as pending.
    pub fn set_pending(&mut self, pending: bool) -> &mut Self {
        self.pending = pending;
        self
    }

    /// Marks the test as ignored.
    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        self
    }
}

/// Represents the success or failure of a test case.
#[derive(Clone, Debug)]
pub enum TestCaseStatus {
    /// This test case passed (or was ignored).
    Success,

    /// This test case failed.
    Failure {
        /// The failure message.
        message: Option<XmlText>,

        /// The "type" of failure that occurred.
        ty: Option<String>,

        /// The stack trace or other detail text.
        ///
        /// This is serialized as the text node of the `<failure>` element.
        stack_trace: Option<XmlText>,
    },
}

impl TestCaseStatus {
    /// Creates a new `TestCaseStatus` that represents a successful test.
    pub fn success() -> Self {
        TestCaseStatus::Success
    }

    /// Creates a new `TestCaseStatus` that represents a failed test.
    pub fn failure() -> Self {
        TestCaseStatus::Failure {
            message: None,
            ty: None,
            stack_trace: None,
        }
    }

    /// Sets the failure message. No-op if this is a success case.
    pub fn set_message(&mut self, message: impl AsRef<str>) -> &mut Self {
        if let TestCaseStatus::Failure { message: m, .. } = self {
            *m = Some(XmlText::new(message));
        }
        self
    }

    /// Sets the failure type. No-op if this is a success case.
    pub fn set_type(&mut self, ty: impl Into<String>) -> &mut Self {
        if let TestCaseStatus::Failure { ty: t, .. } = self {
            *t = Some(ty.into());
        }
        self
    }

    /// Sets the stack trace text. No-op if this is a success case.
    pub fn set_stack_trace(&mut self, stack_trace: impl AsRef<str>) -> &mut Self {
        if let TestCaseStatus::Failure { stack_trace: s, .. } = self {
            *s = Some(XmlText::new(stack_trace));
        }
        self
    }
}

/// A name/value property recorded on a suite, e.g. an environment variable.
#[derive(Clone, Debug)]
pub struct Property {
    /// The name of the property.
    pub name: String,

    /// The value of the property.
    pub value: String,
}

impl Property {
    /// Creates a new `Property` instance.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<T> From<(T, T)> for Property
where
    T: Into<String>,
{
    fn from((k, v): (T, T)) -> Self {
        Property::new(k, v)
    }
}

/// Text destined for an XML document.
///
/// Construction strips ANSI escapes and non-printable control characters,
/// which are invalid in XML even when escaped. Markup-significant characters
/// are escaped at serialization time, not here.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct XmlText {
    text: Box<str>,
}

impl XmlText {
    /// Creates a new `XmlText`, removing ANSI escapes and any non-printable
    /// characters from the input.
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = strip_ansi_escapes::strip_str(text.as_ref())
            .replace(
                |c| matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f'),
                "",
            )
            .into_boxed_str();
        Self { text }
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Converts the text into a string.
    pub fn into_string(self) -> String {
        self.text.into_string()
    }
}

impl AsRef<str> for XmlText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for XmlText {
    fn from(text: &str) -> Self {
        XmlText::new(text)
    }
}

impl From<String> for XmlText {
    fn from(text: String) -> Self {
        XmlText::new(text)
    }
}

impl From<XmlText> for String {
    fn from(text: XmlText) -> Self {
        text.into_string()
    }
}
