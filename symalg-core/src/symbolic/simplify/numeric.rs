//! Arithmetic on numeric leaves.
//!
//! Two integers combine into an exact integer. Any other pair of numbers combines into a float at
//! [`FLOAT_PRECISION`], the integer being promoted first. Results are returned even if they are
//! not finite; callers decide whether to keep them.

use crate::primitive::{float, FLOAT_PRECISION};
use rug::{ops::Pow, Float};
use super::super::expr::Primary;

/// Returns the value of a numeric leaf as a float, or [`None`] if the leaf is not a number.
pub(crate) fn to_float(n: &Primary) -> Option<Float> {
    match n {
        Primary::Integer(int) => Some(float(int)),
        Primary::Float(value) => Some(value.clone()),
        _ => None,
    }
}

/// Adds two numbers.
pub(crate) fn add(lhs: &Primary, rhs: &Primary) -> Option<Primary> {
    match (lhs, rhs) {
        (Primary::Integer(lhs), Primary::Integer(rhs)) => {
            Some(Primary::Integer((lhs + rhs).into()))
        },
        _ => {
            let lhs = to_float(lhs)?;
            let rhs = to_float(rhs)?;
            Some(Primary::Float(Float::with_val(FLOAT_PRECISION, lhs + rhs)))
        },
    }
}

/// Multiplies two numbers.
pub(crate) fn mul(lhs: &Primary, rhs: &Primary) -> Option<Primary> {
    match (lhs, rhs) {
        (Primary::Integer(lhs), Primary::Integer(rhs)) => {
            Some(Primary::Integer((lhs * rhs).into()))
        },
        _ => {
            let lhs = to_float(lhs)?;
            let rhs = to_float(rhs)?;
            Some(Primary::Float(Float::with_val(FLOAT_PRECISION, lhs * rhs)))
        },
    }
}

/// Raises a number to a power, using floating-point arithmetic.
pub(crate) fn powf(base: &Primary, power: &Primary) -> Option<Primary> {
    let base = to_float(base)?;
    let power = to_float(power)?;
    Some(Primary::Float(Float::with_val(FLOAT_PRECISION, base.pow(power))))
}

/// Multiplies a list of numbers together, starting from the integer one.
pub(crate) fn product<'a>(numbers: impl IntoIterator<Item = &'a Primary>) -> Option<Primary> {
    numbers.into_iter()
        .try_fold(Primary::Integer(1.into()), |acc, n| mul(&acc, n))
}
