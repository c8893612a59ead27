// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! File adapters with the boundary semantics of the enclosing jobs

use std::fmt::Display;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rollup::{RawRecord, Summary};
use tracing::debug;

use crate::delimited::{Delimited, SummaryHeader};
use crate::error::RowStreamError;

/// Writes summaries to a file at `path`, creating parent directories as
/// needed.
///
/// If `summaries` is empty, no file is created at all and any existing file
/// at `path` is left untouched.
pub fn write_summary_file<K: Display, M: Display>(
    format: &Delimited,
    header: &SummaryHeader,
    summaries: &[Summary<K, M>],
    path: &Path,
) -> Result<(), RowStreamError> {
    if summaries.is_empty() {
        debug!(path = %path.display(), "no summaries; skipping output file");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    format.write_summaries(header, summaries, &mut out)?;
    out.flush()?;
    debug!(path = %path.display(), rows = summaries.len(), "wrote summary file");
    Ok(())
}

/// Reads raw records from the delimited file at `path`.
///
/// A path that does not exist yields an empty sequence, mirroring how the
/// enclosing jobs treat an absent extract: nothing to aggregate, not an
/// error.
pub fn read_record_file(
    format: &Delimited,
    path: &Path,
) -> Result<Vec<RawRecord>, RowStreamError> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "input file missing; yielding no records");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    format.read_records(io::BufReader::new(file))
}
