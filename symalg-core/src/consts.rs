//! Additional constants used in the library. This module consists of static constants that return
//! [`Float`]s with the given value, at [`EVAL_PRECISION`](crate::primitive::EVAL_PRECISION).

use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::eval_float;

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| eval_float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| eval_float(-1).acos());
