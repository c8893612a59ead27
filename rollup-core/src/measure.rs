// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Measures and how they fold into running totals

use crate::error::MeasureMismatch;

/// A summable measure carried by each input record.
///
/// A fresh accumulator starts at [`Measure::zero`]; every record folded
/// under the same key passes through [`Measure::accumulate`]. Accumulation
/// must be commutative and associative so that the rollup is insensitive to
/// input arrival order and so that partial rollups can be merged per key.
///
/// For the statically typed primitive impls `accumulate` never fails. The
/// fallible signature exists for dynamically typed measures like [`Value`],
/// where two observations of different runtime types cannot be summed.
///
/// Integer measures reproduce byte-identical totals under any permutation
/// of the input. Floating point measures are supported but summation order
/// can perturb the low bits of the total.
pub trait Measure: Sized {
    /// The additive identity used to seed a fresh accumulator
    fn zero() -> Self;

    /// Folds `value` into the running total
    fn accumulate(&mut self, value: Self) -> Result<(), MeasureMismatch>;
}

macro_rules! impl_measure_for_primitive {
    ($($ty:ty),*) => {
        $(
            impl Measure for $ty {
                fn zero() -> Self {
                    0 as $ty
                }

                fn accumulate(&mut self, value: Self) -> Result<(), MeasureMismatch> {
                    *self += value;
                    Ok(())
                }
            }
        )*
    };
}

impl_measure_for_primitive!(i32, i64, i128, u32, u64, u128, usize, f32, f64);

/// A dynamically typed measure observation.
///
/// Use this when record fields arrive without a static type, e.g. rows read
/// from a delimited file or a database cursor. Folding two observations of
/// different variants fails with a [`MeasureMismatch`], which the engine
/// surfaces as an [`AggregationTypeError`] naming the offending record.
///
/// [`AggregationTypeError`]: crate::error::AggregationTypeError
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// The additive identity. Fresh accumulators start here and adopt the
    /// variant of the first observation folded in.
    Zero,
    /// A signed integer observation
    Integer(i64),
    /// A floating point observation
    Floating(f64),
}

impl Value {
    /// Name of this observation's runtime type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Zero => "zero",
            Value::Integer(_) => "integer",
            Value::Floating(_) => "floating",
        }
    }
}

impl Measure for Value {
    fn zero() -> Self {
        Value::Zero
    }

    fn accumulate(&mut self, value: Self) -> Result<(), MeasureMismatch> {
        match (&mut *self, value) {
            (_, Value::Zero) => Ok(()),
            (Value::Zero, value) => {
                *self = value;
                Ok(())
            }
            (Value::Integer(total), Value::Integer(value)) => {
                *total += value;
                Ok(())
            }
            (Value::Floating(total), Value::Floating(value)) => {
                *total += value;
                Ok(())
            }
            (total, value) => Err(MeasureMismatch::new(total.type_name(), value.type_name())),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Floating(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_accumulation_never_fails() {
        let mut total = i64::zero();
        total.accumulate(10).unwrap();
        total.accumulate(-3).unwrap();
        assert_eq!(total, 7);
    }

    #[test]
    fn zero_adopts_first_variant() {
        let mut total = Value::zero();
        total.accumulate(Value::Floating(1.5)).unwrap();
        total.accumulate(Value::Floating(2.5)).unwrap();
        assert_eq!(total, Value::Floating(4.0));
    }

    #[test]
    fn adding_zero_is_a_noop() {
        let mut total = Value::Integer(5);
        total.accumulate(Value::Zero).unwrap();
        assert_eq!(total, Value::Integer(5));
    }

    #[test]
    fn mixed_variants_mismatch() {
        let mut total = Value::Integer(5);
        let err = total.accumulate(Value::Floating(1.0)).unwrap_err();
        assert_eq!(err.total_type(), "integer");
        assert_eq!(err.value_type(), "floating");
        // the running total is untouched on failure
        assert_eq!(total, Value::Integer(5));
    }
}
