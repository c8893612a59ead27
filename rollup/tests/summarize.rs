// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the keyed fold against its documented invariants.

use assert2::check;
use itertools::Itertools;
use rollup::{KeyExtract, KeyedRollup, RollupStrategy, Summary, Value, summarize};
use rstest::rstest;

#[derive(Debug, Clone)]
struct Rental {
    customer_id: i64,
    rental_duration: i64,
}

fn rental(customer_id: i64, rental_duration: i64) -> Rental {
    Rental {
        customer_id,
        rental_duration,
    }
}

struct ByCustomer;

impl KeyExtract<Rental> for ByCustomer {
    type Key = i64;

    fn key(record: &Rental) -> i64 {
        record.customer_id
    }
}

struct CustomerDurations;

impl RollupStrategy for CustomerDurations {
    type Source = Rental;
    type Key = ByCustomer;
    type Measure = i64;

    fn measure(record: Rental) -> i64 {
        record.rental_duration
    }
}

#[test]
fn empty_input_yields_no_summaries() {
    let summaries = summarize::<CustomerDurations>([]).unwrap();
    check!(summaries.is_empty());
}

#[test]
fn single_key_sums_and_counts() {
    let summaries =
        summarize::<CustomerDurations>([rental(1, 10), rental(1, 20), rental(1, 5)]).unwrap();
    check!(
        summaries
            == vec![Summary {
                key: 1,
                total: 35,
                count: 3
            }]
    );
}

#[test]
fn unsorted_arrival_emits_sorted_keys() {
    let summaries =
        summarize::<CustomerDurations>([rental(2, 5), rental(1, 10), rental(2, 3), rental(1, 1)])
            .unwrap();
    check!(
        summaries
            == vec![
                Summary {
                    key: 1,
                    total: 11,
                    count: 2
                },
                Summary {
                    key: 2,
                    total: 8,
                    count: 2
                },
            ]
    );
}

#[test]
fn every_permutation_yields_identical_output() {
    let records = [rental(2, 5), rental(1, 10), rental(2, 3), rental(1, 1)];
    let expected = summarize::<CustomerDurations>(records.clone()).unwrap();

    for permutation in records.iter().cloned().permutations(records.len()) {
        let summaries = summarize::<CustomerDurations>(permutation).unwrap();
        check!(summaries == expected);
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn merged_partials_match_a_single_pass(#[case] split: usize) {
    let records = [
        rental(3, 4),
        rental(1, 10),
        rental(2, 5),
        rental(1, 1),
        rental(3, 6),
        rental(2, 3),
    ];
    let expected = summarize::<CustomerDurations>(records.clone()).unwrap();

    let (left, right) = records.split_at(split);
    let mut first = KeyedRollup::<CustomerDurations>::new();
    for record in left.iter().cloned() {
        first.fold(record).unwrap();
    }
    let mut second = KeyedRollup::<CustomerDurations>::new();
    for record in right.iter().cloned() {
        second.fold(record).unwrap();
    }

    first.merge(second).unwrap();
    check!(first.records() == records.len());
    check!(first.finish() == expected);
}

/// Re-aggregating summaries keyed by their own key, with the total as the
/// measure, must reproduce the totals (the fold is associative).
struct ResummarizeTotals;

struct BySummaryKey;

impl KeyExtract<Summary<i64, i64>> for BySummaryKey {
    type Key = i64;

    fn key(summary: &Summary<i64, i64>) -> i64 {
        summary.key
    }
}

impl RollupStrategy for ResummarizeTotals {
    type Source = Summary<i64, i64>;
    type Key = BySummaryKey;
    type Measure = i64;

    fn measure(summary: Summary<i64, i64>) -> i64 {
        summary.total
    }
}

#[test]
fn reaggregation_reproduces_totals() {
    let summaries =
        summarize::<CustomerDurations>([rental(2, 5), rental(1, 10), rental(2, 3), rental(1, 1)])
            .unwrap();
    let reaggregated = summarize::<ResummarizeTotals>(summaries.clone()).unwrap();

    check!(reaggregated.len() == summaries.len());
    for (resummarized, original) in reaggregated.iter().zip(&summaries) {
        check!(resummarized.key == original.key);
        check!(resummarized.total == original.total);
    }
}

#[test]
fn only_observed_keys_appear() {
    let summaries = summarize::<CustomerDurations>([rental(7, 1), rental(9, 2)]).unwrap();
    let keys: Vec<i64> = summaries.iter().map(|s| s.key).collect();
    check!(keys == vec![7, 9]);
    check!(summaries.iter().all(|s| s.count > 0));
}

#[derive(Debug, Clone)]
struct Reading {
    sensor: &'static str,
    value: Value,
}

struct BySensor;

impl KeyExtract<Reading> for BySensor {
    type Key = &'static str;

    fn key(record: &Reading) -> &'static str {
        record.sensor
    }
}

struct SensorTotals;

impl RollupStrategy for SensorTotals {
    type Source = Reading;
    type Key = BySensor;
    type Measure = Value;

    fn measure(record: Reading) -> Value {
        record.value
    }
}

#[test]
fn dynamic_measures_of_one_variant_fold() {
    let summaries = summarize::<SensorTotals>([
        Reading {
            sensor: "thermal",
            value: Value::Floating(1.5),
        },
        Reading {
            sensor: "thermal",
            value: Value::Floating(2.5),
        },
    ])
    .unwrap();
    check!(
        summaries
            == vec![Summary {
                key: "thermal",
                total: Value::Floating(4.0),
                count: 2
            }]
    );
}

#[test]
fn mixed_variants_abort_naming_the_record() {
    let err = summarize::<SensorTotals>([
        Reading {
            sensor: "thermal",
            value: Value::Integer(3),
        },
        Reading {
            sensor: "thermal",
            value: Value::Floating(1.0),
        },
    ])
    .unwrap_err();

    check!(err.record() == Some(1));
    check!(err.key().contains("thermal"));
}

#[test]
fn failed_fold_never_leaves_a_zero_count_key() {
    let mut rollup = KeyedRollup::<SensorTotals>::new();
    rollup
        .fold(Reading {
            sensor: "thermal",
            value: Value::Integer(3),
        })
        .unwrap();

    // A brand-new key whose very first measure mismatches an already-merged
    // partial must not survive as an empty group.
    let mut partial = KeyedRollup::<SensorTotals>::new();
    partial
        .fold(Reading {
            sensor: "thermal",
            value: Value::Floating(1.0),
        })
        .unwrap();
    rollup.merge(partial).unwrap_err();

    let summaries = rollup.finish();
    check!(summaries.len() == 1);
    check!(summaries[0].count == 1);
}
