// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rollup_core::{
    AggregationTypeError, KeyExtract, MalformedRecordError, Measure, MeasureMismatch, Value,
};

pub use crate::fold::{KeyOf, KeyedRollup, RollupStrategy, Summary, summarize};
pub use crate::record::RawRecord;

pub mod fold;
pub mod record;
