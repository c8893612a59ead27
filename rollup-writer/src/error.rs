// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Errors at the delimited-row boundary

use std::{fmt, io};

/// The error cases for reading or writing a delimited row stream.
#[derive(Debug)]
pub enum RowStreamError {
    /// A row or field cannot be represented in the delimited format, e.g. a
    /// field value containing the delimiter, or a data row carrying more
    /// fields than the header names.
    Malformed(String),
    /// The underlying reader or writer failed.
    Io(io::Error),
}

impl RowStreamError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

impl fmt::Display for RowStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(reason) => f.write_str(reason),
            Self::Io(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RowStreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for RowStreamError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
