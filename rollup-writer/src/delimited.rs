// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The delimited-text row format

use std::fmt::Display;
use std::io;

use rollup::{RawRecord, Summary};

use crate::error::RowStreamError;

/// Field names for serialized summary rows.
///
/// The serialized field order is fixed: the key field always comes first,
/// then the total, then the count.
#[derive(Debug, Clone)]
pub struct SummaryHeader {
    /// Name of the group-key field
    pub key: String,
    /// Name of the total field
    pub total: String,
    /// Name of the count field
    pub count: String,
}

impl SummaryHeader {
    /// Creates a header from the three field names
    pub fn new(
        key: impl Into<String>,
        total: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            total: total.into(),
            count: count.into(),
        }
    }
}

/// Describes how to read raw records from, and write summary rows to, a
/// stream of delimited text lines.
///
/// The first line is a header naming the fields; each following line is one
/// row. There is no quoting or escaping dialect: a value that contains the
/// delimiter or a line break cannot be represented and is rejected as
/// [`RowStreamError::Malformed`] instead of being written ambiguously.
#[derive(Debug, Clone)]
pub struct Delimited {
    delimiter: char,
}

impl Default for Delimited {
    fn default() -> Self {
        Self::new(',')
    }
}

impl Delimited {
    /// Creates a format using `delimiter` between fields
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// The delimiter between fields
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Writes the header line followed by one line per summary, key field
    /// first, in summary order.
    ///
    /// An empty summary sequence writes nothing at all, not even the header:
    /// empty output produces no artifact.
    pub fn write_summaries<K: Display, M: Display>(
        &self,
        header: &SummaryHeader,
        summaries: &[Summary<K, M>],
        out: &mut impl io::Write,
    ) -> Result<(), RowStreamError> {
        if summaries.is_empty() {
            return Ok(());
        }

        self.write_line(
            &[
                header.key.as_str(),
                header.total.as_str(),
                header.count.as_str(),
            ],
            out,
        )?;
        for summary in summaries {
            let key = summary.key.to_string();
            let total = summary.total.to_string();
            let count = summary.count.to_string();
            self.write_line(&[key.as_str(), total.as_str(), count.as_str()], out)?;
        }
        Ok(())
    }

    fn write_line(
        &self,
        fields: &[&str],
        out: &mut impl io::Write,
    ) -> Result<(), RowStreamError> {
        for (position, field) in fields.iter().enumerate() {
            if field.contains(self.delimiter) || field.contains(['\n', '\r']) {
                return Err(RowStreamError::malformed(format!(
                    "field value {field:?} cannot be written with delimiter {:?}",
                    self.delimiter
                )));
            }
            if position > 0 {
                write!(out, "{}", self.delimiter)?;
            }
            out.write_all(field.as_bytes())?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }

    /// Reads a header line and the data rows that follow it, producing one
    /// [`RawRecord`] per row with fields named by the header.
    ///
    /// An input with no lines yields no records. A row with more fields than
    /// the header names is malformed; a row with fewer simply leaves the
    /// trailing fields absent, to be defaulted at coercion time. Entirely
    /// blank lines are skipped.
    pub fn read_records(
        &self,
        input: impl io::BufRead,
    ) -> Result<Vec<RawRecord>, RowStreamError> {
        let mut lines = input.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Ok(Vec::new()),
        };
        let names: Vec<&str> = header.split(self.delimiter).collect();

        let mut records = Vec::new();
        for (row, line) in lines.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(self.delimiter).collect();
            if fields.len() > names.len() {
                return Err(RowStreamError::malformed(format!(
                    "row {row} has {} fields but the header names only {}",
                    fields.len(),
                    names.len()
                )));
            }
            records.push(
                names
                    .iter()
                    .zip(fields)
                    .map(|(name, field)| (*name, field))
                    .collect(),
            );
        }
        Ok(records)
    }
}
