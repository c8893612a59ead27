// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for coercion and aggregation.
//!
//! Both errors are fail-fast: the enclosing run aborts on the first failure
//! and performs no skipping, since silently dropping a record would corrupt
//! the sum/count invariant. Whether to retry, skip, or abort the enclosing
//! job is the caller's decision.

use std::fmt;

/// A present input field could not be parsed as the expected numeric type.
///
/// Raised at coercion time. Missing or empty fields coerce to zero instead;
/// only non-numeric text on a present field produces this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecordError {
    field: String,
    value: String,
}

impl MalformedRecordError {
    /// Creates an error for `field` holding the unparseable `value`
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the field that failed to parse
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The offending text
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MalformedRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field `{}` is not numeric: {:?}",
            self.field, self.value
        )
    }
}

impl std::error::Error for MalformedRecordError {}

/// Two measure observations of different runtime types cannot be summed.
///
/// Produced by fallible [`Measure::accumulate`](crate::Measure::accumulate)
/// impls such as the one for [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureMismatch {
    total: &'static str,
    value: &'static str,
}

impl MeasureMismatch {
    /// Creates a mismatch between a running total of type `total` and an
    /// observation of type `value`
    pub fn new(total: &'static str, value: &'static str) -> Self {
        Self { total, value }
    }

    /// Runtime type of the running total
    pub fn total_type(&self) -> &'static str {
        self.total
    }

    /// Runtime type of the observation that failed to fold in
    pub fn value_type(&self) -> &'static str {
        self.value
    }
}

impl fmt::Display for MeasureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot fold a {} observation into a {} running total",
            self.value, self.total
        )
    }
}

impl std::error::Error for MeasureMismatch {}

/// A record's measure could not be combined with its group's running total.
///
/// Raised during the fold; names the offending record by its position in
/// the input sequence and by its rendered group key. When the mismatch is
/// found while merging two partial rollups there is no single offending
/// record, so the position is absent.
#[derive(Debug)]
pub struct AggregationTypeError {
    record: Option<usize>,
    key: String,
    mismatch: MeasureMismatch,
}

impl AggregationTypeError {
    /// Creates an error for the record at zero-based `position` in the input
    pub fn for_record(position: usize, key: impl Into<String>, mismatch: MeasureMismatch) -> Self {
        Self {
            record: Some(position),
            key: key.into(),
            mismatch,
        }
    }

    /// Creates an error for a key whose accumulators disagreed during a
    /// partial-rollup merge
    pub fn for_merge(key: impl Into<String>, mismatch: MeasureMismatch) -> Self {
        Self {
            record: None,
            key: key.into(),
            mismatch,
        }
    }

    /// Zero-based position of the offending record in the input sequence,
    /// if the failure happened during a fold
    pub fn record(&self) -> Option<usize> {
        self.record
    }

    /// Rendered group key of the offending record
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying type mismatch
    pub fn mismatch(&self) -> &MeasureMismatch {
        &self.mismatch
    }
}

impl fmt::Display for AggregationTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(position) => write!(
                f,
                "record {position} (key {}): {}",
                self.key, self.mismatch
            ),
            None => write!(f, "merging key {}: {}", self.key, self.mismatch),
        }
    }
}

impl std::error::Error for AggregationTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.mismatch)
    }
}
