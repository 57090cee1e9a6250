//! The canonical order of expressions.
//!
//! A single comparator, [`compare`], orders any two expressions. It is used to sort the terms of
//! a simplified [`Expr::Polynomial`] and the factors of a simplified [`Expr::Term`], and as the
//! priority of the merge queues inside the simplifier. The comparator takes an [`Order`], which
//! only changes where numbers are placed, and how like factors are grouped during merging.
//!
//! The rules, in priority order:
//!
//! 1. Two numbers compare by value, larger first. Equal values put the integer first.
//! 2. A number sorts before any other node in [`Order::Factors`] and [`Order::Merge`], and after
//!    it in [`Order::Terms`].
//! 3. In [`Order::Merge`], two non-numbers compare by base, then by power, where a node that is
//!    not an [`Expr::Exponent`] is its own base raised to the power of one.
//! 4. Otherwise, both nodes are viewed as a list of non-numeric factors and a numeric coefficient
//!    (a node that is not an [`Expr::Term`] is the single-element list of itself, with a
//!    coefficient of one). The longer list sorts first, then the lists are compared element-wise,
//!    then by coefficient using rule 1. If all of that is equal, a non-[`Expr::Term`] sorts
//!    before an [`Expr::Term`].
//! 5. List elements compare as follows:
//!    - [`Expr::Exponent`]s sort before everything else. Two exponents compare by the kind of
//!      their bases, then by power, then by base.
//!    - [`Expr::Polynomial`]s come next. Two polynomials compare by their terms: the longer one
//!      first, then element-wise.
//!    - Then variables (by name), transcendental constants, trigonometric functions (by
//!      function, then argument), and ratios (by denominator, then numerator).
//!
//! Each rule is a lexicographic comparison of keys that are themselves totally ordered, so the
//! comparator is transitive and antisymmetric for every [`Order`].

use std::cmp::Ordering;
use super::{
    expr::{Expr, Primary},
    simplify::numeric,
};

/// Where a comparison places numbers, and how it groups like factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The order of the factors of a [`Expr::Term`]: numbers first, so that the coefficient is
    /// rendered first (`3xy`).
    Factors,

    /// The order of the terms of a [`Expr::Polynomial`]: numbers last, so that the constant term
    /// is rendered last (`x^2 + 4x + 3`).
    Terms,

    /// The order used while merging the factors of a product: numbers first, then every other
    /// node by its base, so that factors that share a base are adjacent.
    Merge,
}

/// Compares two expressions in the given [`Order`].
pub fn compare(lhs: &Expr, rhs: &Expr, order: Order) -> Ordering {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(lhs), Some(rhs)) => compare_numbers(lhs, rhs),
        (Some(_), None) => numbers_first(order),
        (None, Some(_)) => numbers_first(order).reverse(),
        (None, None) => match order {
            Order::Merge => compare(lhs.base(), rhs.base(), Order::Factors)
                .then_with(|| compare(&lhs.power(), &rhs.power(), Order::Factors)),
            Order::Factors | Order::Terms => compare_factor_lists(lhs, rhs, order),
        },
    }
}

/// Sorts the given expressions in the given [`Order`].
pub fn sort(exprs: &mut [Expr], order: Order) {
    exprs.sort_by(|lhs, rhs| compare(lhs, rhs, order));
}

/// The position of a number relative to a non-number.
fn numbers_first(order: Order) -> Ordering {
    match order {
        Order::Factors | Order::Merge => Ordering::Less,
        Order::Terms => Ordering::Greater,
    }
}

/// Compares two numbers by value, larger first. Integers and floats are compared as real
/// numbers, and an integer sorts before a float of equal value.
pub fn compare_numbers(lhs: &Primary, rhs: &Primary) -> Ordering {
    let by_value = match (lhs, rhs) {
        (Primary::Integer(lhs), Primary::Integer(rhs)) => Some(rhs.cmp(lhs)),
        (Primary::Float(lhs), Primary::Float(rhs)) => rhs.partial_cmp(lhs),
        (Primary::Integer(lhs), Primary::Float(rhs)) => rhs.partial_cmp(lhs),
        (Primary::Float(lhs), Primary::Integer(rhs)) => rhs.partial_cmp(lhs),
        _ => None,
    };
    by_value
        .unwrap_or(Ordering::Equal)
        .then_with(|| numeric_rank(lhs).cmp(&numeric_rank(rhs)))
}

/// Integers before floats.
fn numeric_rank(n: &Primary) -> u8 {
    match n {
        Primary::Integer(_) => 0,
        _ => 1,
    }
}

/// A fixed rank for each kind of node.
fn kind_rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Primary(Primary::Integer(_)) => 0,
        Expr::Primary(Primary::Float(_)) => 1,
        Expr::Primary(Primary::Variable(_)) => 2,
        Expr::Primary(Primary::Transcendental(_)) => 3,
        Expr::Trig(..) => 4,
        Expr::Rational(..) => 5,
        Expr::Exponent(..) => 6,
        Expr::Term(_) => 7,
        Expr::Polynomial(_) => 8,
    }
}

/// The rank of a list element (see rule 5 of the [module-level documentation](self)).
fn element_rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Exponent(..) => 0,
        Expr::Polynomial(_) => 1,
        Expr::Primary(Primary::Variable(_)) => 2,
        Expr::Primary(Primary::Transcendental(_)) => 3,
        Expr::Trig(..) => 4,
        Expr::Rational(..) => 5,
        Expr::Primary(_) => 6,
        Expr::Term(_) => 7,
    }
}

/// Multiplies the given numbers together.
fn coefficient(numbers: &[&Primary]) -> Primary {
    numbers.iter()
        .fold(Primary::Integer(1.into()), |acc, n| numeric::mul(&acc, n).unwrap_or(acc))
}

/// Compares two sequences element-wise, returning the first non-equal result.
fn compare_each(lhs: &[&Expr], rhs: &[&Expr], order: Order) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(lhs, rhs)| compare_element(lhs, rhs, order))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares two non-numeric expressions by their lists of non-numeric factors (see rule 4 of the
/// [module-level documentation](self)).
fn compare_factor_lists(lhs: &Expr, rhs: &Expr, order: Order) -> Ordering {
    let (lhs_numbers, lhs_rest) = lhs.split_numeric();
    let (rhs_numbers, rhs_rest) = rhs.split_numeric();

    rhs_rest.len().cmp(&lhs_rest.len())
        .then_with(|| compare_each(&lhs_rest, &rhs_rest, order))
        .then_with(|| compare_numbers(&coefficient(&lhs_numbers), &coefficient(&rhs_numbers)))
        .then_with(|| matches!(lhs, Expr::Term(_)).cmp(&matches!(rhs, Expr::Term(_))))
}

/// Compares two elements of a factor list.
fn compare_element(lhs: &Expr, rhs: &Expr, order: Order) -> Ordering {
    match (lhs, rhs) {
        // only reachable for terms nested directly in terms, which the constructors never build
        (Expr::Term(_), _) | (_, Expr::Term(_)) => compare_factor_lists(lhs, rhs, order),
        (Expr::Exponent(lhs_base, lhs_power), Expr::Exponent(rhs_base, rhs_power)) => {
            kind_rank(lhs_base).cmp(&kind_rank(rhs_base))
                .then_with(|| compare(lhs_power, rhs_power, order))
                .then_with(|| compare(lhs_base, rhs_base, order))
        },
        (Expr::Polynomial(lhs_terms), Expr::Polynomial(rhs_terms)) => {
            rhs_terms.len().cmp(&lhs_terms.len())
                .then_with(|| {
                    lhs_terms.iter()
                        .zip(rhs_terms)
                        .map(|(lhs, rhs)| compare(lhs, rhs, order))
                        .find(|ordering| ordering.is_ne())
                        .unwrap_or(Ordering::Equal)
                })
        },
        (Expr::Primary(Primary::Variable(lhs)), Expr::Primary(Primary::Variable(rhs))) => lhs.cmp(rhs),
        (
            Expr::Primary(Primary::Transcendental(lhs)),
            Expr::Primary(Primary::Transcendental(rhs)),
        ) => lhs.cmp(rhs),
        (Expr::Trig(lhs_f, lhs_arg), Expr::Trig(rhs_f, rhs_arg)) => {
            lhs_f.cmp(rhs_f).then_with(|| compare(lhs_arg, rhs_arg, order))
        },
        (Expr::Rational(lhs_num, lhs_den), Expr::Rational(rhs_num, rhs_den)) => {
            compare(lhs_den, rhs_den, order).then_with(|| compare(lhs_num, rhs_num, order))
        },
        (Expr::Primary(lhs), Expr::Primary(rhs)) if lhs.is_numeric() && rhs.is_numeric() => {
            compare_numbers(lhs, rhs)
        },
        _ => element_rank(lhs).cmp(&element_rank(rhs)),
    }
}

impl Expr {
    /// Compares this expression to another in the given [`Order`]. See [`compare`].
    pub fn cmp_canonical(&self, other: &Expr, order: Order) -> Ordering {
        compare(self, other, order)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::testing::random_exprs;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    fn sorted(mut exprs: Vec<Expr>, order: Order) -> Vec<String> {
        sort(&mut exprs, order);
        exprs.iter().map(Expr::to_string).collect()
    }

    #[test]
    fn numbers_by_value() {
        assert_eq!(compare(&Expr::int(3), &Expr::int(2), Order::Terms), Ordering::Less);
        assert_eq!(compare(&Expr::float(2.5), &Expr::int(2), Order::Terms), Ordering::Less);
        assert_eq!(compare(&Expr::int(2), &Expr::float(2.0), Order::Terms), Ordering::Less);
        assert_eq!(compare(&Expr::int(2), &Expr::int(2), Order::Terms), Ordering::Equal);
    }

    #[test]
    fn numbers_first_or_last() {
        assert_eq!(sorted(vec![x(), Expr::int(3)], Order::Factors), vec!["3", "x"]);
        assert_eq!(sorted(vec![Expr::int(3), x()], Order::Terms), vec!["x", "3"]);
        assert_eq!(sorted(vec![x(), Expr::int(3)], Order::Merge), vec!["3", "x"]);
    }

    #[test]
    fn variables_by_name() {
        assert_eq!(sorted(vec![y(), x()], Order::Factors), vec!["x", "y"]);
    }

    #[test]
    fn exponent_first() {
        let x2 = x().pow(Expr::int(2)).unwrap();
        assert_eq!(sorted(vec![y(), x2.clone()], Order::Factors), vec!["x^2", "y"]);
        assert_eq!(sorted(vec![x(), x2], Order::Terms), vec!["x^2", "x"]);
    }

    #[test]
    fn exponent_highest_power_first() {
        let x2 = x().pow(Expr::int(2)).unwrap();
        let x3 = x().pow(Expr::int(3)).unwrap();
        let y5 = y().pow(Expr::int(5)).unwrap();
        assert_eq!(sorted(vec![x2, y5, x3], Order::Terms), vec!["y^5", "x^3", "x^2"]);
    }

    #[test]
    fn longer_term_first() {
        let xy = x().times(y());
        let three_x = Expr::int(3).times(x());
        assert_eq!(
            sorted(vec![Expr::int(3), y(), three_x, xy], Order::Terms),
            vec!["xy", "3x", "y", "3"],
        );
    }

    #[test]
    fn term_against_bare_node() {
        let two_x = Expr::int(2).times(x());
        assert_eq!(compare(&two_x, &x(), Order::Terms), Ordering::Less);
        assert_eq!(compare(&x(), &two_x, Order::Terms), Ordering::Greater);
        assert_eq!(compare(&two_x, &y(), Order::Terms), Ordering::Less);
    }

    #[test]
    fn merge_groups_bases() {
        let x2 = x().pow(Expr::int(2)).unwrap();
        let merged = sorted(vec![x2, y(), Expr::int(4), x()], Order::Merge);
        assert_eq!(merged, vec!["4", "x^2", "x", "y"]);
    }

    #[test]
    fn constants_and_functions() {
        let exprs = vec![Expr::sin(x()), Expr::pi(), x(), Expr::one().divide_by(x()).unwrap()];
        assert_eq!(sorted(exprs, Order::Factors), vec!["x", "π", "sin(x)", "1/x"]);
    }

    #[test]
    fn antisymmetric() {
        let exprs = random_exprs(0xC0FFEE, 120);
        for order in [Order::Factors, Order::Terms, Order::Merge] {
            for a in &exprs {
                assert_eq!(compare(a, a, order), Ordering::Equal);
                for b in &exprs {
                    assert_eq!(compare(a, b, order), compare(b, a, order).reverse(), "{} vs {}", a, b);
                }
            }
        }
    }

    #[test]
    fn transitive() {
        let exprs = random_exprs(0xBEEF, 45);
        for order in [Order::Factors, Order::Terms, Order::Merge] {
            for a in &exprs {
                for b in &exprs {
                    if compare(a, b, order).is_gt() {
                        continue;
                    }
                    for c in &exprs {
                        if compare(b, c, order).is_le() {
                            assert!(compare(a, c, order).is_le(), "{} <= {} <= {}", a, b, c);
                        }
                    }
                }
            }
        }
    }
}
