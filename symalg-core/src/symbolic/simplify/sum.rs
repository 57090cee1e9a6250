//! Merging the terms of a sum.

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

impl Simplifier<'_> {
    /// Simplifies the terms of a sum and merges them.
    pub(super) fn reduce_sum(&mut self, node: &Expr, terms: &[Expr]) -> Result<Expr, Error> {
        let mut queue = MergeQueue::new(Order::Terms);
        for term in terms {
            queue.extend(self.visit(term, Some(node))?.into_terms());
        }

        let mut result: Vec<Expr> = Vec::with_capacity(terms.len());
        while let Some(term) = queue.pop() {
            if term.is_zero() {
                self.record(Step::DropZero);
                continue;
            }

            let Some(last) = result.pop() else {
                result.push(term);
                continue;
            };

            match self.add_pair(&last, &term)? {
                Some(sum) => queue.extend(sum.into_terms()),
                None => {
                    result.push(last);
                    result.push(term);
                },
            }
        }

        let mut sum = Expr::Polynomial(result).downgrade();
        if let Expr::Polynomial(terms) = &mut sum {
            sort(terms, Order::Terms);
        }
        Ok(sum)
    }

    /// Adds two adjacent terms, if they can be combined into one.
    fn add_pair(&mut self, lhs: &Expr, rhs: &Expr) -> Result<Option<Expr>, Error> {
        if let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) {
            let Some(sum) = numeric::add(a, b).filter(Primary::is_finite) else {
                return Ok(None);
            };
            self.record(Step::FoldNumbers);
            return Ok(Some(Expr::Primary(sum)));
        }

        let (lhs_numbers, lhs_rest) = lhs.split_numeric();
        let (rhs_numbers, rhs_rest) = rhs.split_numeric();
        if lhs_rest.is_empty() || lhs_rest != rhs_rest {
            return Ok(None);
        }

        let coefficient = numeric::product(lhs_numbers)
            .zip(numeric::product(rhs_numbers))
            .and_then(|(lhs, rhs)| numeric::add(&lhs, &rhs))
            .filter(Primary::is_finite);
        let Some(coefficient) = coefficient else {
            return Ok(None);
        };

        self.record(Step::CombineLikeTerms);
        let rest = Expr::Term(rhs_rest.into_iter().cloned().collect()).downgrade();
        let combined = Expr::Primary(coefficient).times(rest);
        log::trace!("combined `{}` and `{}` into `{}`", lhs, rhs, combined);
        self.resimplify(combined).map(Some)
    }
}
