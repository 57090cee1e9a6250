//! Merging the factors of a product.

use super::{
    numeric,
    step::Step,
    MergeQueue,
    Simplifier,
};
use crate::symbolic::{
    expr::{Expr, Primary},
    ordering::{sort, Order},
    visit::Visitor,
};
use symalg_error::Error;

/// The outcome of multiplying two adjacent factors.
enum Pair {
    /// The factors were combined into a single expression.
    Merged(Expr),

    /// The factors cannot be combined, and are returned in their original order.
    Separate(Expr, Expr),
}

impl Simplifier<'_> {
    /// Simplifies the factors of a product and merges them.
    pub(super) fn reduce_product(&mut self, node: &Expr, factors: &[Expr]) -> Result<Expr, Error> {
        let mut simplified = Vec::with_capacity(factors.len());
        for factor in factors {
            simplified.extend(self.visit(factor, Some(node))?.into_factors());
        }

        if let Some(zero) = simplified.iter().find(|factor| factor.is_zero()) {
            self.record(Step::MultiplyZero);
            return Ok(zero.clone());
        }

        let mut queue = MergeQueue::new(Order::Merge);
        queue.extend(simplified);

        let mut result: Vec<Expr> = Vec::with_capacity(factors.len());
        while let Some(factor) = queue.pop() {
            if factor.is_zero() {
                self.record(Step::MultiplyZero);
                return Ok(factor);
            }
            if factor.is_one() {
                self.record(Step::MultiplyOne);
                continue;
            }

            let Some(last) = result.pop() else {
                result.push(factor);
                continue;
            };

            match self.multiply_pair(last, factor)? {
                Pair::Merged(product) => queue.extend(product.into_factors()),
                Pair::Separate(last, factor) => {
                    result.push(last);
                    result.push(factor);
                },
            }
        }

        let mut product = Expr::Term(result).downgrade();
        if let Expr::Term(factors) = &mut product {
            sort(factors, Order::Factors);
        }
        Ok(product)
    }

    /// Multiplies two adjacent factors, if they can be combined into one.
    fn multiply_pair(&mut self, last: Expr, next: Expr) -> Result<Pair, Error> {
        match (last, next) {
            (Expr::Primary(lhs), Expr::Primary(rhs)) if lhs.is_numeric() && rhs.is_numeric() => {
                match numeric::mul(&lhs, &rhs).filter(Primary::is_finite) {
                    Some(product) => {
                        self.record(Step::FoldNumbers);
                        Ok(Pair::Merged(Expr::Primary(product)))
                    },
                    None => Ok(Pair::Separate(Expr::Primary(lhs), Expr::Primary(rhs))),
                }
            },
            (Expr::Rational(lhs_num, lhs_den), Expr::Rational(rhs_num, rhs_den)) => {
                self.record(Step::MultiplyRationals);
                let ratio = (*lhs_num).times(*rhs_num).divide_by((*lhs_den).times(*rhs_den))?;
                Ok(Pair::Merged(self.resimplify(ratio)?))
            },
            (Expr::Rational(num, den), other) | (other, Expr::Rational(num, den)) => {
                self.record(Step::AbsorbIntoNumerator);
                let ratio = (*num).times(other).divide_by(*den)?;
                Ok(Pair::Merged(self.resimplify(ratio)?))
            },
            (last, next) if last.base() == next.base() => {
                self.record(Step::CombineLikeFactors);
                let power = last.power().into_owned().plus(next.power().into_owned());
                let combined = last.base().clone().pow(power)?;
                Ok(Pair::Merged(self.resimplify(combined)?))
            },
            (Expr::Polynomial(lhs), Expr::Polynomial(rhs)) => {
                Ok(Pair::Merged(self.distribute(&lhs, &rhs)?))
            },
            (Expr::Polynomial(terms), other) | (other, Expr::Polynomial(terms)) => {
                Ok(Pair::Merged(self.distribute(&terms, &[other])?))
            },
            (last, next) => Ok(Pair::Separate(last, next)),
        }
    }

    /// Multiplies every term of `lhs` by every term of `rhs`, and simplifies the resulting sum.
    fn distribute(&mut self, lhs: &[Expr], rhs: &[Expr]) -> Result<Expr, Error> {
        self.record(Step::Distribute);
        let terms = lhs.iter()
            .flat_map(|lhs| rhs.iter().map(move |rhs| lhs.clone().times(rhs.clone())))
            .collect::<Vec<_>>();
        self.resimplify(Expr::Polynomial(terms).downgrade())
    }
}
