//! Reducing ratios.

use super::{step::Step, Simplifier};
use crate::symbolic::{error, expr::Expr, visit::Visitor};
use symalg_error::Error;

impl Simplifier<'_> {
    /// Simplifies the numerator and denominator of a ratio, and reduces the result.
    ///
    /// Numeric ratios are left as they are; `4/6` is not reduced to `2/3`.
    pub(super) fn reduce_ratio(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
    ) -> Result<Expr, Error> {
        let numerator = self.visit(numerator, Some(node))?;
        let denominator = self.visit(denominator, Some(node))?;

        if denominator.is_zero() {
            return Err(error::division_by_zero(&numerator, &denominator));
        }
        if denominator.is_one() {
            self.record(Step::DivideByOne);
            return Ok(numerator);
        }
        if numerator.is_zero() {
            self.record(Step::ZeroNumerator);
            return Ok(numerator);
        }

        match (numerator, denominator) {
            // (a/b)/(c/d) = (ad)/(bc)
            (Expr::Rational(a, b), Expr::Rational(c, d)) => {
                self.record(Step::RationalOverRational);
                let ratio = (*a).times(*d).divide_by((*b).times(*c))?;
                self.resimplify(ratio)
            },
            // a/(b/c) = (ac)/b
            (numerator, Expr::Rational(b, c)) => {
                self.record(Step::InvertDenominator);
                let ratio = numerator.times(*c).divide_by(*b)?;
                self.resimplify(ratio)
            },
            (numerator, Expr::Trig(f, arg)) => {
                self.record(Step::ReciprocalTrig);
                let product = numerator.times(Expr::Trig(f.reciprocal(), arg));
                self.resimplify(product)
            },
            (numerator, denominator) => numerator.divide_by(denominator),
        }
    }
}
