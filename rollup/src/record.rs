// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Raw text records and field coercion

use hashbrown::HashMap;

use rollup_core::MalformedRecordError;

/// A raw row of text fields keyed by field name, as produced by a delimited
/// file reader or a database cursor.
///
/// Coercion is fail-fast: a missing or empty field defaults, but text that
/// is present and non-numeric is never silently dropped or zeroed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the raw text of a field, if present
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses the named field as an integer.
    ///
    /// A missing or empty field coerces to 0. A present field that is not
    /// numeric text fails with [`MalformedRecordError`].
    pub fn int_field(&self, name: &str) -> Result<i64, MalformedRecordError> {
        match self.fields.get(name) {
            None => Ok(0),
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed
                    .parse()
                    .map_err(|_| MalformedRecordError::new(name, raw.as_str()))
            }
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
