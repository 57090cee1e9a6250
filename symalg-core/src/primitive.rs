//! Functions to construct [`Integer`]s and [`Float`]s from various types.

use rug::{Assign, Float, Integer};

/// The number of bits of precision of a [`Float`] literal in an expression.
///
/// Float literals behave like double-precision numbers: they are rounded to this precision when
/// created and after every folding step.
pub const FLOAT_PRECISION: u32 = 53;

/// The number of bits of precision to use when numerically evaluating expressions.
pub const EVAL_PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Float`] literal with the given value, rounded to [`FLOAT_PRECISION`].
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(FLOAT_PRECISION, n)
}

/// Creates a [`Float`] with the given value, at the precision used for evaluation.
pub fn eval_float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(EVAL_PRECISION, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_is_double() {
        let f = float(0.1);
        assert_eq!(f.prec(), 53);
        assert_eq!(f.to_f64(), 0.1);
    }

    #[test]
    fn float_from_integer() {
        assert_eq!(float(&int(7)).to_f64(), 7.0);
    }
}
