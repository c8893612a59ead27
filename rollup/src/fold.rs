// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The keyed fold that turns record sequences into sorted summaries

use hashbrown::HashMap;

use rollup_core::{AggregationTypeError, KeyExtract, Measure};

/// Ties a record type to its grouping key and its measure.
///
/// The strategy is a marker type, so the same record type can participate in
/// several rollups with different keys or measures.
pub trait RollupStrategy {
    /// The record type consumed by the fold
    type Source;

    /// Extractor for the grouping key
    type Key: KeyExtract<Self::Source>;

    /// The summable measure carried by each record
    type Measure: Measure;

    /// Extracts the measure, consuming the record
    fn measure(record: Self::Source) -> Self::Measure;
}

/// Key type produced by a strategy's extractor
pub type KeyOf<S> =
    <<S as RollupStrategy>::Key as KeyExtract<<S as RollupStrategy>::Source>>::Key;

/// One summary per distinct group key.
///
/// `total` is the sum of the measures of every record sharing `key`; `count`
/// is the number of such records. A summary only exists for keys actually
/// observed, so `count` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<K, M> {
    /// The group key
    pub key: K,
    /// Sum of the group's measures
    pub total: M,
    /// Number of records folded into the group
    pub count: u64,
}

struct Accumulator<M> {
    total: M,
    count: u64,
}

impl<M: Measure> Accumulator<M> {
    fn new() -> Self {
        Self {
            total: M::zero(),
            count: 0,
        }
    }
}

/// Keyed rollup that uses a `HashMap` to accumulate records by group key.
///
/// This is the core fold without any I/O concerns. Accumulators are created
/// lazily on the first record carrying a key and mutated additively on every
/// later record with that key; the map lives exactly as long as one rollup
/// and is consumed by [`KeyedRollup::finish`].
///
/// For the one-shot case, use [`summarize`]. Build a `KeyedRollup` directly
/// when records arrive in batches, or to fold partitions of the input in
/// parallel and combine the partial rollups with [`KeyedRollup::merge`].
pub struct KeyedRollup<S: RollupStrategy> {
    storage: HashMap<KeyOf<S>, Accumulator<S::Measure>>,
    records: usize,
}

impl<S: RollupStrategy> Default for KeyedRollup<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RollupStrategy> KeyedRollup<S> {
    /// Creates an empty rollup
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
            records: 0,
        }
    }

    /// Number of distinct group keys observed so far
    pub fn keys(&self) -> usize {
        self.storage.len()
    }

    /// Number of records folded so far
    pub fn records(&self) -> usize {
        self.records
    }

    /// Folds one record into its group's accumulator.
    ///
    /// Fails with [`AggregationTypeError`] if the record's measure cannot be
    /// combined with the group's running total; the accumulator map is left
    /// as it was before the offending record.
    pub fn fold(&mut self, record: S::Source) -> Result<(), AggregationTypeError> {
        let key = S::Key::key(&record);
        let measure = S::measure(record);
        let position = self.records;

        let accum = self
            .storage
            .entry(key.clone())
            .or_insert_with(Accumulator::new);
        if let Err(mismatch) = accum.total.accumulate(measure) {
            let never_folded = accum.count == 0;
            if never_folded {
                self.storage.remove(&key);
            }
            return Err(AggregationTypeError::for_record(
                position,
                format!("{key:?}"),
                mismatch,
            ));
        }
        accum.count += 1;
        self.records += 1;
        Ok(())
    }

    /// Combines another partial rollup into this one.
    ///
    /// For every key present in both, the totals and counts are summed
    /// independently; the fold is commutative and associative per key, so
    /// merging partials built over partitions of the input yields the same
    /// summaries as a single pass over the whole input.
    pub fn merge(&mut self, other: Self) -> Result<(), AggregationTypeError> {
        for (key, accum) in other.storage {
            let into = self
                .storage
                .entry(key.clone())
                .or_insert_with(Accumulator::new);
            if let Err(mismatch) = into.total.accumulate(accum.total) {
                let never_folded = into.count == 0;
                if never_folded {
                    self.storage.remove(&key);
                }
                return Err(AggregationTypeError::for_merge(format!("{key:?}"), mismatch));
            }
            into.count += accum.count;
        }
        self.records += other.records;
        Ok(())
    }

    /// Consumes the rollup, producing one summary per distinct key, sorted
    /// ascending by the key's natural order
    pub fn finish(self) -> Vec<Summary<KeyOf<S>, S::Measure>> {
        let mut summaries: Vec<_> = self
            .storage
            .into_iter()
            .map(|(key, accum)| Summary {
                key,
                total: accum.total,
                count: accum.count,
            })
            .collect();
        summaries.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        summaries
    }
}

/// Rolls up a finite record sequence in a single linear pass.
///
/// Returns one [`Summary`] per distinct group key, sorted ascending by key.
/// An empty input yields an empty vector. The fold is fail-fast: the first
/// measure that cannot be combined aborts the run.
pub fn summarize<S: RollupStrategy>(
    records: impl IntoIterator<Item = S::Source>,
) -> Result<Vec<Summary<KeyOf<S>, S::Measure>>, AggregationTypeError> {
    let mut rollup = KeyedRollup::<S>::new();
    for record in records {
        rollup.fold(record)?;
    }
    Ok(rollup.finish())
}
