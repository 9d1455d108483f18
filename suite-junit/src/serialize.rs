// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a [`SuiteReport`].

use crate::{Property, SerializeError, SuiteReport, TestCase, TestCaseStatus, XmlText};
use quick_xml::{
    Writer,
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{io, io::Write as _, time::Duration};

static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static PROPERTIES_TAG: &str = "properties";
static PROPERTY_TAG: &str = "property";
static FAILURE_TAG: &str = "failure";
static SYSTEM_OUT_TAG: &str = "system-out";
static SYSTEM_ERR_TAG: &str = "system-err";

pub(crate) fn serialize_report(
    report: &SuiteReport,
    writer: impl io::Write,
) -> Result<(), SerializeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    serialize_testsuite(report, &mut writer)?;

    // Add a trailing newline.
    writer.into_inner().write_all(b"\n")?;
    Ok(())
}

fn serialize_testsuite(
    report: &SuiteReport,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let SuiteReport {
        name,
        hostname,
        tests,
        errors,
        failures,
        timestamp,
        time,
        properties,
        test_cases,
        system_out,
        system_err,
        extra,
    } = report;

    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("errors", errors.to_string().as_str()),
        ("failures", failures.to_string().as_str()),
        ("hostname", hostname.as_str()),
        ("name", name.as_str()),
        ("tests", tests.to_string().as_str()),
    ]);
    if let Some(time) = time {
        testsuite_tag.push_attribute(("time", serialize_time(time).as_str()));
    }
    if let Some(timestamp) = timestamp {
        testsuite_tag.push_attribute(("timestamp", format!("{}", timestamp.format("%+")).as_str()));
    }
    for (k, v) in extra {
        testsuite_tag.push_attribute((k.as_str(), v.as_str()));
    }
    writer.write_event(Event::Start(testsuite_tag))?;

    if !properties.is_empty() {
        writer.write_event(Event::Start(BytesStart::new(PROPERTIES_TAG)))?;
        for property in properties {
            serialize_property(property, writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(PROPERTIES_TAG)))?;
    }

    for test_case in test_cases {
        serialize_testcase(test_case, writer)?;
    }

    // The output sections are always written, with a CDATA marker that is
    // kept even when the content is empty.
    serialize_output(system_out, SYSTEM_OUT_TAG, writer)?;
    serialize_output(system_err, SYSTEM_ERR_TAG, writer)?;

    writer.write_event(Event::End(BytesEnd::new(TESTSUITE_TAG)))?;
    Ok(())
}

fn serialize_property(
    property: &Property,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut property_tag = BytesStart::new(PROPERTY_TAG);
    property_tag.extend_attributes([
        ("name", property.name.as_str()),
        ("value", property.value.as_str()),
    ]);
    writer.write_event(Event::Empty(property_tag))?;
    Ok(())
}

fn serialize_testcase(
    test_case: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let TestCase {
        name,
        classname,
        time,
        pending,
        ignored,
        status,
    } = test_case;

    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.push_attribute(("name", name.as_str()));
    if let Some(classname) = classname {
        testcase_tag.push_attribute(("classname", classname.as_str()));
    }
    if let Some(time) = time {
        testcase_tag.push_attribute(("time", serialize_time(time).as_str()));
    }
    testcase_tag.push_attribute(("pending", bool_str(*pending)));
    testcase_tag.push_attribute(("ignored", bool_str(*ignored)));

    match status {
        TestCaseStatus::Success => {
            writer.write_event(Event::Empty(testcase_tag))?;
        }
        TestCaseStatus::Failure {
            message,
            ty,
            stack_trace,
        } => {
            writer.write_event(Event::Start(testcase_tag))?;
            serialize_failure(
                message.as_ref(),
                ty.as_deref(),
                stack_trace.as_ref(),
                writer,
            )?;
            writer.write_event(Event::End(BytesEnd::new(TESTCASE_TAG)))?;
        }
    }

    Ok(())
}

fn serialize_failure(
    message: Option<&XmlText>,
    ty: Option<&str>,
    stack_trace: Option<&XmlText>,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut failure_tag = BytesStart::new(FAILURE_TAG);
    if let Some(message) = message {
        failure_tag.push_attribute(("message", message.as_str()));
    }
    if let Some(ty) = ty {
        failure_tag.push_attribute(("type", ty));
    }

    match stack_trace {
        Some(stack_trace) => {
            writer.write_event(Event::Start(failure_tag))?;
            writer.write_event(Event::Text(BytesText::new(stack_trace.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new(FAILURE_TAG)))?;
        }
        None => {
            writer.write_event(Event::Empty(failure_tag))?;
        }
    }

    Ok(())
}

fn serialize_output(
    output: &XmlText,
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    writer.write_event(Event::Start(BytesStart::new(tag_name)))?;
    writer.write_event(Event::CData(BytesCData::new(output.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// Serialize time as seconds with 3 decimal points.
fn serialize_time(time: &Duration) -> String {
    format!("{:.3}", time.as_secs_f64())
}
