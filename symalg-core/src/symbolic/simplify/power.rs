//! Reducing powers.

use rug::{ops::Pow, Integer};
use super::{numeric, step::Step, Simplifier};
use crate::symbolic::{
    error,
    expr::{Expr, Primary},
    visit::Visitor,
};
use symalg_error::Error;

impl Simplifier<'_> {
    /// Simplifies the base and power of an exponent, and reduces the result.
    pub(super) fn reduce_power(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
    ) -> Result<Expr, Error> {
        let base = self.visit(base, Some(node))?;
        let power = self.visit(power, Some(node))?;

        if power.is_one() {
            self.record(Step::PowerOne);
            return Ok(base);
        }

        if base.is_zero() {
            if power.is_zero() {
                return Err(error::undefined_power(&base, &power));
            }
            self.record(Step::ZeroBase);
            return Ok(base);
        }

        if power.is_zero() {
            self.record(Step::PowerZero);
            return base.pow(power);
        }

        if let (Some(b), Some(p)) = (base.as_number(), power.as_number()) {
            if let Some(folded) = fold_power(b, p)? {
                self.record(Step::FoldPower);
                return Ok(folded);
            }
        }

        base.pow(power)
    }
}

/// The largest result, in bits, that an exact integer power is folded into. Anything larger is
/// left as an [`Expr::Exponent`].
const MAX_FOLD_BITS: u64 = 1 << 16;

/// Computes `b^p` exactly, or returns [`None`] if the result could exceed [`MAX_FOLD_BITS`].
///
/// `b^p` has at most `bits(b) * p` bits. A base of `1` or `-1` never grows.
fn exact_power(b: &Integer, p: &Integer) -> Option<Integer> {
    let p = p.to_u32()?;
    let bits = u64::from(b.significant_bits());
    if bits > 1 && bits.saturating_mul(u64::from(p)) > MAX_FOLD_BITS {
        log::debug!("leaving {}^{} unfolded", b, p);
        return None;
    }
    Some(Integer::from(b.pow(p)))
}

/// Raises a number to a numeric power.
///
/// An integer raised to an integer stays exact, and a negative integer power produces a ratio.
/// Any other combination is computed with floats. Returns [`None`] if the exact result would be
/// too large, or if the float result is not finite.
fn fold_power(base: &Primary, power: &Primary) -> Result<Option<Expr>, Error> {
    match (base, power) {
        (Primary::Integer(b), Primary::Integer(p)) => {
            if *p >= 0 {
                Ok(exact_power(b, p).map(|n| Expr::Primary(Primary::Integer(n))))
            } else {
                let Some(magnitude) = exact_power(b, &Integer::from(-p)) else {
                    return Ok(None);
                };
                Expr::Primary(Primary::Integer(magnitude)).invert().map(Some)
            }
        },
        _ => Ok(numeric::powf(base, power)
            .filter(Primary::is_finite)
            .map(Expr::Primary)),
    }
}
