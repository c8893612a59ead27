// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use crate::delimited::{Delimited, SummaryHeader};
pub use crate::error::RowStreamError;
pub use crate::file::{read_record_file, write_summary_file};

pub mod delimited;
pub mod error;
pub mod file;
