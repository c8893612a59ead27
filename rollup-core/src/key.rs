// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Grouping keys for rollups

use std::fmt::Debug;
use std::hash::Hash;

/// `KeyExtract` defines the grouping key for a given record type `T`
///
/// This allows the same record type to be rolled up under multiple
/// different keys:
///
/// ```
/// use rollup_core::KeyExtract;
///
/// struct Rental {
///     customer_id: i64,
///     film_id: i64,
/// }
///
/// struct ByCustomer;
///
/// impl KeyExtract<Rental> for ByCustomer {
///     type Key = i64;
///     fn key(record: &Rental) -> i64 { record.customer_id }
/// }
///
/// struct ByFilm;
///
/// impl KeyExtract<Rental> for ByFilm {
///     type Key = i64;
///     fn key(record: &Rental) -> i64 { record.film_id }
/// }
/// ```
pub trait KeyExtract<T> {
    /// Key type identifying which records roll up together.
    ///
    /// The key's [`Ord`] impl is the total order of the summary output:
    /// summaries are always emitted sorted ascending by key, regardless of
    /// input arrival order. Composite keys (tuples, structs with derived
    /// `Ord`) therefore order lexicographically by field.
    type Key: Eq + Hash + Ord + Clone + Debug;

    /// Returns the grouping key for this record
    fn key(record: &T) -> Self::Key;
}
