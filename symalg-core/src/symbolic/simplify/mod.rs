//! Reduction of expressions to their canonical form.
//!
//! [`simplify`] walks the tree bottom-up with a [`Visitor`]. Leaves are returned as-is, and every
//! compound node is rebuilt from its simplified children:
//!
//! - The terms of a sum are merged in [`Order::Terms`]: zeros are dropped, numbers are folded,
//!   and like terms (terms with the same non-numeric factors) are combined by adding their
//!   coefficients.
//! - The factors of a product are merged in [`Order::Merge`]: a zero factor makes the product
//!   zero, ones are dropped, numbers are folded, ratios absorb the other factors into their
//!   numerator, factors with a common base have their powers added, and sums are distributed.
//! - Powers with numeric operands are folded, and `a^0`, `a^1`, and `0^a` are reduced.
//! - Ratios are reduced when their numerator or denominator is trivial, or when the denominator
//!   is itself a ratio or a trigonometric function. Numeric ratios are **not** reduced to lowest
//!   terms: `12/63` stays as it is.
//!
//! Merging uses a priority queue ordered by the canonical comparator
//! ([`compare`](super::ordering::compare)). The smallest remaining node is popped and combined
//! with the last node of the result, if possible. A combined node is pushed back onto the queue,
//! since it may combine again. Once the queue is empty, the result is sorted into its canonical
//! order.
//!
//! The whole reduction is repeated until the expression stops changing, so simplifying a
//! simplified expression returns it unchanged.
//!
//! ```
//! use symalg_core::Expr;
//!
//! let x = Expr::var("x");
//! let expr = x.clone() + Expr::int(2) * x.clone() + Expr::int(3) * x;
//! assert_eq!(expr.simplify().unwrap().to_string(), "6x");
//! ```

pub(crate) mod numeric;
mod power;
mod product;
mod ratio;
pub mod step;
mod sum;

use rug::{Float, Integer};
use std::{cmp::Ordering, collections::BinaryHeap};
use step::{Step, StepCollector};
use super::{
    expr::{Expr, Primary},
    ordering::{compare, Order},
    trig::{Transcendental, Trig},
    visit::Visitor,
};
use symalg_error::Error;

/// The maximum number of full passes over an expression before giving up on reaching a fixed
/// point.
const MAX_PASSES: usize = 16;

/// An expression in a [`MergeQueue`], ordered so that the smallest expression in the queue's
/// [`Order`] is popped first.
#[derive(Debug)]
struct Ranked {
    expr: Expr,
    order: Order,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed, since `BinaryHeap` is a max-heap
        compare(&other.expr, &self.expr, self.order)
    }
}

/// A priority queue of expressions, popped in canonical order.
#[derive(Debug)]
struct MergeQueue {
    heap: BinaryHeap<Ranked>,
    order: Order,
}

impl MergeQueue {
    fn new(order: Order) -> Self {
        Self { heap: BinaryHeap::new(), order }
    }

    fn push(&mut self, expr: Expr) {
        self.heap.push(Ranked { expr, order: self.order });
    }

    fn extend(&mut self, exprs: impl IntoIterator<Item = Expr>) {
        for expr in exprs {
            self.push(expr);
        }
    }

    fn pop(&mut self) -> Option<Expr> {
        self.heap.pop().map(|ranked| ranked.expr)
    }
}

/// Simplifies each node of an expression, reporting the rules it applies.
struct Simplifier<'a> {
    steps: &'a mut dyn StepCollector<Step>,
}

impl Simplifier<'_> {
    /// Records that a rule was applied.
    fn record(&mut self, step: Step) {
        log::trace!("applied {:?}", step);
        self.steps.push(step);
    }

    /// Simplifies a node built during simplification. Its children may already be simplified.
    fn resimplify(&mut self, expr: Expr) -> Result<Expr, Error> {
        self.visit(&expr, None)
    }
}

impl Visitor for Simplifier<'_> {
    type Output = Result<Expr, Error>;

    fn visit_integer(&mut self, n: &Integer, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Integer(n.clone())))
    }

    fn visit_float(&mut self, n: &Float, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Float(n.clone())))
    }

    fn visit_variable(&mut self, name: &str, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::var(name))
    }

    fn visit_transcendental(&mut self, c: Transcendental, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Transcendental(c)))
    }

    fn visit_polynomial(&mut self, node: &Expr, terms: &[Expr], _: Option<&Expr>) -> Self::Output {
        self.reduce_sum(node, terms)
    }

    fn visit_term(&mut self, node: &Expr, factors: &[Expr], _: Option<&Expr>) -> Self::Output {
        self.reduce_product(node, factors)
    }

    fn visit_exponent(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        self.reduce_power(node, base, power)
    }

    fn visit_rational(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        self.reduce_ratio(node, numerator, denominator)
    }

    fn visit_trig(&mut self, node: &Expr, f: Trig, arg: &Expr, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::trig(f, self.visit(arg, Some(node))?))
    }
}

/// Simplifies the given expression, discarding the steps taken.
///
/// Returns a `DivisionByZero` error if a denominator simplifies to zero, and an
/// `UndefinedOperation` error if `0^0` is encountered.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Repeats full passes over the expression until one leaves it unchanged, returning the result
/// and the number of passes made. The count is [`MAX_PASSES`] if no fixed point was reached.
fn run_passes(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, usize), Error> {
    let mut simplifier = Simplifier { steps: step_collector };
    let mut current = simplifier.visit(expr, None)?;

    for pass in 1..MAX_PASSES {
        let next = simplifier.visit(&current, None)?;
        if next == current {
            return Ok((current, pass));
        }
        current = next;
    }

    Ok((current, MAX_PASSES))
}

/// Simplifies the given expression, reporting every rule applied to the given collector.
pub fn simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    log::debug!("simplifying `{}`", expr);
    let (simplified, passes) = run_passes(expr, step_collector)?;
    if passes < MAX_PASSES {
        log::debug!("reached `{}` after {} pass(es)", simplified, passes);
    } else {
        log::warn!("`{}` did not reach a fixed point after {} passes", simplified, MAX_PASSES);
    }
    Ok(simplified)
}

/// Simplifies the given expression, returning the steps taken along with the result.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

impl Expr {
    /// Simplifies the expression. See [`simplify`].
    pub fn simplify(&self) -> Result<Expr, Error> {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{
        error::{DivisionByZero, UndefinedOperation},
        testing::random_exprs,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    fn simplified(expr: Expr) -> String {
        simplify(&expr).unwrap().to_string()
    }

    #[test]
    fn fold_integers() {
        assert_eq!(simplified(Expr::int(2) + Expr::int(3) * Expr::int(4)), "14");
    }

    #[test]
    fn fold_mixed_numbers() {
        assert_eq!(simplified(Expr::int(2) + Expr::float(0.5)), "2.5");
        assert_eq!(simplified(Expr::int(2) * Expr::float(1.5)), "3.0");
    }

    #[test]
    fn combine_like_terms() {
        assert_eq!(simplified(x() + Expr::int(2) * x() + Expr::int(3) * x()), "6x");
    }

    #[test]
    fn cancel_like_terms() {
        assert_eq!(simplified(x() + y() - x()), "y");
    }

    #[test]
    fn transcendental_stays_symbolic() {
        assert_eq!(simplified(Expr::pi() + Expr::pi()), "2π");
    }

    #[test]
    fn distribute_binomials() {
        let expr = (x() + Expr::int(1)) * (y() + Expr::int(3));
        assert_eq!(simplified(expr), "xy + 3x + y + 3");

        let expr = (x() + Expr::int(1)) * (x() + Expr::int(3));
        assert_eq!(simplified(expr), "x^2 + 4x + 3");
    }

    #[test]
    fn difference_of_squares() {
        let expr = (x() + Expr::int(1)) * (x() - Expr::int(1));
        assert_eq!(simplified(expr), "x^2 + -1");
    }

    #[test]
    fn combine_like_factors() {
        assert_eq!(simplified(x() * x() * y()), "(x^2)y");
        assert_eq!(simplified(x() * Expr::int(2) * x() * x()), "2(x^3)");
        assert_eq!(simplified(y() * x() * x() * x()), "(x^3)y");
        assert_eq!(simplified(x() * y() * y() * y()), "(y^3)x");
    }

    #[test]
    fn add_powers_of_a_common_base() {
        let x_x = x().pow(x()).unwrap();
        assert_eq!(simplified(x() * x_x.clone()), "x^(x + 1)");

        let x_x1 = x().pow(x() + Expr::int(1)).unwrap();
        assert_eq!(simplified(x_x1.clone() * x_x1), "x^(2x + 2)");

        let x_y = x().pow(y()).unwrap();
        assert_eq!(simplified(x_y * x()), "x^(y + 1)");
    }

    #[test]
    fn keep_power_of_sum() {
        let expr = (x() + Expr::int(1)).pow(Expr::int(2)).unwrap();
        assert_eq!(simplified(expr), "(x + 1)^2");
    }

    #[test]
    fn cancel_powers() {
        let x_inv = x().pow(Expr::int(-1)).unwrap();
        assert_eq!(simplified(x() * x_inv), "1");
    }

    #[test]
    fn distribute_over_powers() {
        let x_y = x().pow(y()).unwrap();
        let expr = x_y * (y() + x() + Expr::int(3));
        assert_eq!(simplified(expr), "(x^y)y + x^(y + 1) + 3(x^y)");
    }

    #[test]
    fn fold_powers() {
        assert_eq!(simplified(Expr::int(2).pow(Expr::int(10)).unwrap()), "1024");
        assert_eq!(simplified(Expr::int(4).pow(Expr::float(0.5)).unwrap()), "2.0");
        assert_eq!(
            simplify(&Expr::int(5).pow(Expr::int(-2)).unwrap()).unwrap(),
            Expr::Rational(Box::new(Expr::int(1)), Box::new(Expr::int(25))),
        );
    }

    #[test]
    fn huge_integer_powers_stay_symbolic() {
        let expr = Expr::int(10).pow(Expr::int(4_000_000_000i64)).unwrap();
        assert_eq!(simplify(&expr).unwrap(), expr);

        let expr = Expr::int(2).pow(Expr::int(u32::MAX)).unwrap();
        assert_eq!(simplify(&expr).unwrap(), expr);

        let expr = Expr::int(10).pow(Expr::int(-4_000_000_000i64)).unwrap();
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn unit_bases_fold_at_any_power() {
        assert_eq!(simplified(Expr::int(1).pow(Expr::int(4_000_000_000i64)).unwrap()), "1");
        assert_eq!(simplified(Expr::int(-1).pow(Expr::int(3_000_000_001i64)).unwrap()), "-1");
    }

    #[test]
    fn large_integer_powers_below_the_limit_fold() {
        let folded = simplify(&Expr::int(2).pow(Expr::int(1000)).unwrap()).unwrap();
        let expected = rug::Integer::from(rug::Integer::u_pow_u(2, 1000));
        assert_eq!(folded.as_integer(), Some(&expected));
    }

    #[test]
    fn skip_non_finite_powers() {
        let expr = Expr::int(-8).pow(Expr::float(0.5)).unwrap();
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn power_identities() {
        let x_0 = Expr::Exponent(Box::new(x()), Box::new(Expr::int(1) - Expr::int(1)));
        assert_eq!(simplified(x_0), "1");

        let zero_x = Expr::Exponent(Box::new(Expr::int(1) - Expr::int(1)), Box::new(x()));
        assert_eq!(simplified(zero_x), "0");

        let x_1 = Expr::Exponent(Box::new(x()), Box::new(Expr::int(3) - Expr::int(2)));
        assert_eq!(simplified(x_1), "x");
    }

    #[test]
    fn ratios_are_not_reduced() {
        let four_ninths = Expr::int(4).divide_by(Expr::int(9)).unwrap();
        assert_eq!(simplified(four_ninths.clone()), "4/9");
        assert_eq!(simplified(Expr::int(2) * four_ninths.clone()), "8/9");

        let three_sevenths = Expr::int(3).divide_by(Expr::int(7)).unwrap();
        assert_eq!(simplified(four_ninths * three_sevenths), "12/63");
    }

    #[test]
    fn ratio_over_ratio() {
        let a = Expr::int(1).divide_by(Expr::int(2)).unwrap();
        let b = Expr::int(3).divide_by(Expr::int(4)).unwrap();
        assert_eq!(simplified(a.divide_by(b).unwrap()), "4/6");
    }

    #[test]
    fn value_over_ratio() {
        let half = Expr::int(1).divide_by(Expr::int(2)).unwrap();
        assert_eq!(simplified(Expr::int(7).divide_by(half).unwrap()), "14");
        assert_eq!(simplified(x().divide_by(y().divide_by(Expr::int(2)).unwrap()).unwrap()), "2x/y");
    }

    #[test]
    fn reciprocal_trig() {
        let expr = Expr::pi().divide_by(Expr::sin(x())).unwrap();
        assert_eq!(simplified(expr), "πcsc(x)");
    }

    #[test]
    fn simplify_inside_trig() {
        let expr = Expr::cos(x() + x());
        assert_eq!(simplified(expr), "cos(2x)");
    }

    #[test]
    fn ratio_identities() {
        let over_one = Expr::Rational(Box::new(x()), Box::new(Expr::int(3) - Expr::int(2)));
        assert_eq!(simplified(over_one), "x");

        let zero_over = Expr::Rational(Box::new(x() - x()), Box::new(y()));
        assert_eq!(simplified(zero_over), "0");
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::Rational(Box::new(x()), Box::new(y() - y()));
        let err = simplify(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, "x/0");
    }

    #[test]
    fn zero_to_the_zero() {
        let zero = Expr::int(2) - Expr::int(2);
        let expr = Expr::Exponent(Box::new(zero.clone()), Box::new(zero));
        let err = simplify(&expr).unwrap_err();
        assert!(err.is::<UndefinedOperation>());
        assert_eq!(err.expr, "0^0");
    }

    #[test]
    fn steps_are_reported() {
        let (expr, steps) = simplify_with_steps(&(x() + x() + Expr::int(0))).unwrap();
        assert_eq!(expr.to_string(), "2x");
        assert!(steps.contains(&Step::CombineLikeTerms));

        let (_, steps) = simplify_with_steps(&(x() * (y() + Expr::int(1)))).unwrap();
        assert!(steps.contains(&Step::Distribute));
    }

    #[test]
    fn idempotent() {
        for expr in random_exprs(0x5EED, 300) {
            let Ok(once) = simplify(&expr) else { continue };
            assert_eq!(simplify(&once).unwrap(), once, "simplifying {}", expr);
        }
    }

    #[test]
    fn converges_before_the_pass_limit() {
        for expr in random_exprs(0xC0FFEE, 300) {
            let Ok((_, passes)) = run_passes(&expr, &mut ()) else { continue };
            assert!(passes < MAX_PASSES, "{} took {} passes", expr, passes);
        }
    }

    #[test]
    fn identities() {
        for expr in random_exprs(0xA11CE, 200) {
            let Ok(simplified) = simplify(&expr) else { continue };
            if simplified.is_zero() {
                continue;
            }

            let plus_zero = Expr::Polynomial(vec![expr.clone(), Expr::zero()]);
            assert_eq!(simplify(&plus_zero).unwrap(), simplified, "{} + 0", expr);

            let times_one = Expr::Term(vec![expr.clone(), Expr::one()]);
            assert_eq!(simplify(&times_one).unwrap(), simplified, "{} * 1", expr);

            let times_zero = Expr::Term(vec![expr.clone(), Expr::zero()]);
            assert!(simplify(&times_zero).unwrap().is_zero(), "{} * 0", expr);
        }
    }

    #[test]
    fn commutative() {
        let exprs = random_exprs(0xFACADE, 60);
        for pair in exprs.chunks_exact(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if let Ok(sum) = simplify(&a.clone().plus(b.clone())) {
                assert_eq!(simplify(&b.clone().plus(a.clone())).unwrap(), sum, "{} + {}", a, b);
            }
            if let Ok(product) = simplify(&a.clone().times(b.clone())) {
                assert_eq!(simplify(&b.clone().times(a.clone())).unwrap(), product, "{} * {}", a, b);
            }
        }
    }
}
