// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::error::{AggregationTypeError, MalformedRecordError, MeasureMismatch};
pub use crate::key::KeyExtract;
pub use crate::measure::{Measure, Value};

pub mod error;
pub mod key;
pub mod measure;
