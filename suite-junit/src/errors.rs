// Copyright (c) The junit-weaver Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`SuiteReport`](crate::SuiteReport).
///
/// Returned by [`SuiteReport::serialize`](crate::SuiteReport::serialize) and
/// [`SuiteReport::to_string`](crate::SuiteReport::to_string).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// An error produced by the XML writer.
    #[error("error serializing suite XML")]
    Xml(#[from] quick_xml::Error),

    /// An error produced by the underlying writer.
    #[error("error writing suite XML")]
    Io(#[from] std::io::Error),

    /// The serialized document was not valid UTF-8.
    #[error("serialized suite XML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
