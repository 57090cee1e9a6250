//! The expression tree and its smart constructors.
//!
//! An [`Expr`] is an immutable tree. Sums and products are stored **flattened**: the expression
//! `x + (y + z)` is a single [`Expr::Polynomial`] with three terms, and `x(yz)` is a single
//! [`Expr::Term`] with three factors. No node ever points back to its parent; operations that
//! need to know the parent of a node (like rendering) receive it as a parameter while walking the
//! tree (see [`Visitor`](super::visit::Visitor)).
//!
//! # Smart constructors
//!
//! Expressions are combined with [`Expr::plus`], [`Expr::times`], [`Expr::pow`],
//! [`Expr::divide_by`], and [`Expr::invert`]. These constructors only perform cheap, local
//! cleanup: adding zero, multiplying by zero or one, raising to the power of zero or one, and
//! dividing by one are removed immediately, and nested sums / products are flattened. Everything
//! else (combining like terms, folding numbers, distributing products over sums) is the job of
//! [`Expr::simplify`].
//!
//! ```
//! use symalg_core::Expr;
//!
//! let x = Expr::var("x");
//! assert_eq!(x.clone().plus(Expr::int(0)), x);
//! assert_eq!(x.clone().times(Expr::int(0)), Expr::int(0));
//! assert_eq!(x.clone().pow(Expr::int(1)).unwrap(), x);
//!
//! // `x + 2x` is not combined until it is simplified
//! let sum = x.clone().plus(Expr::int(2).times(x));
//! assert_eq!(sum.to_string(), "x + 2x");
//! assert_eq!(sum.simplify().unwrap().to_string(), "3x");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **structural** equality:
//! two expressions are equal if they are the same variant and their children are equal, in the
//! same order. No attempt is made to detect semantic equality. In particular, `2` and `2.0` are
//! different expressions, and so are `x + y` and `y + x`. Two expressions that are semantically
//! equal can usually be made structurally equal by simplifying both of them first, since
//! simplification sorts terms and factors into a canonical order.

mod iter;

use crate::primitive::{float, int};
use iter::ExprIter;
use rug::{Float, Integer};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::BTreeSet, ops::{Add, Mul, Neg, Sub}};
use super::{error, trig::{Transcendental, Trig}};
use symalg_error::Error;

/// A leaf of the expression tree: a number, a variable, or a named constant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An exact integer, such as `2` or `144`.
    Integer(Integer),

    /// An inexact floating-point number, such as `3.14` or `0.5`.
    Float(Float),

    /// A variable, such as `x` or `y`.
    Variable(String),

    /// A transcendental constant, such as `π`.
    Transcendental(Transcendental),
}

/// [`Hash`] is implemented manually to allow hashing [`Primary::Float`]s. Floats are always kept
/// at double precision, so hashing the bits of the equivalent [`f64`] is exact. `-0.0` is hashed
/// like `0.0` since the two compare equal.
impl std::hash::Hash for Primary {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Integer(int) => int.hash(state),
            Self::Float(float) => {
                let value = float.to_f64();
                let value = if value == 0.0 { 0.0 } else { value };
                value.to_bits().hash(state);
            },
            Self::Variable(name) => name.hash(state),
            Self::Transcendental(c) => c.hash(state),
        }
    }
}

/// [`Eq`] is implemented manually since [`Float`] does not implement it. This module **must
/// never** produce `NaN` floats; numeric folding that would produce one is skipped instead.
impl Eq for Primary {}

impl Primary {
    /// Returns true if this is an [`Primary::Integer`] or a [`Primary::Float`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns true if this is a number with a finite value.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Float(float) => float.is_finite(),
            _ => false,
        }
    }

    /// Returns true if this is the number zero, of either numeric kind.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(int) => int.is_zero(),
            Self::Float(float) => float.is_zero(),
            _ => false,
        }
    }

    /// Returns true if this is the number one, of either numeric kind.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(int) => *int == 1,
            Self::Float(float) => *float == 1,
            _ => false,
        }
    }
}

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A single number, variable, or constant.
    Primary(Primary),

    /// Two or more terms added together.
    Polynomial(Vec<Expr>),

    /// Two or more factors multiplied together.
    Term(Vec<Expr>),

    /// A base raised to a power.
    Exponent(Box<Expr>, Box<Expr>),

    /// A numerator divided by a non-zero denominator.
    Rational(Box<Expr>, Box<Expr>),

    /// A trigonometric function applied to an argument.
    Trig(Trig, Box<Expr>),
}

impl Expr {
    /// Creates an integer.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Integer(int(n)))
    }

    /// Creates a float.
    ///
    /// `n` must not be `NaN`: a `NaN` leaf is not equal to itself, which breaks [`Eq`], [`Hash`]
    /// and simplification. Debug builds panic on it.
    pub fn float(n: f64) -> Self {
        debug_assert!(!n.is_nan(), "`NaN` cannot be stored in an expression");
        Self::Primary(Primary::Float(float(n)))
    }

    /// Creates a variable with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Variable(name.into()))
    }

    /// The constant `π`.
    pub fn pi() -> Self {
        Self::Primary(Primary::Transcendental(Transcendental::Pi))
    }

    /// The constant `e`.
    pub fn e() -> Self {
        Self::Primary(Primary::Transcendental(Transcendental::E))
    }

    /// The integer `0`.
    pub fn zero() -> Self {
        Self::int(0)
    }

    /// The integer `1`.
    pub fn one() -> Self {
        Self::int(1)
    }

    /// Applies the given trigonometric function to the argument.
    pub fn trig(f: Trig, arg: Expr) -> Self {
        Self::Trig(f, Box::new(arg))
    }

    /// `sin(arg)`
    pub fn sin(arg: Expr) -> Self {
        Self::trig(Trig::Sin, arg)
    }

    /// `cos(arg)`
    pub fn cos(arg: Expr) -> Self {
        Self::trig(Trig::Cos, arg)
    }

    /// `tan(arg)`
    pub fn tan(arg: Expr) -> Self {
        Self::trig(Trig::Tan, arg)
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Float`], returns a reference to the contained float.
    pub fn as_float(&self) -> Option<&Float> {
        match self {
            Self::Primary(Primary::Float(float)) => Some(float),
            _ => None,
        }
    }

    /// If the expression is a number, returns a reference to the contained [`Primary`].
    pub fn as_number(&self) -> Option<&Primary> {
        match self {
            Self::Primary(primary) if primary.is_numeric() => Some(primary),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Variable(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is a number literal.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns true if the expression is the number zero, of either numeric kind.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Primary(primary) if primary.is_zero())
    }

    /// Returns true if the expression is the number one, of either numeric kind.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Primary(primary) if primary.is_one())
    }

    /// Returns true if the expression contains no variables.
    ///
    /// Numbers and transcendental constants are constant. Sums and products are constant if all
    /// of their children are, and powers and ratios if both of their children are.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Primary(Primary::Variable(_)) => false,
            Self::Primary(_) => true,
            Self::Polynomial(children) | Self::Term(children) => {
                children.iter().all(Self::is_constant)
            },
            Self::Exponent(lhs, rhs) | Self::Rational(lhs, rhs) => {
                lhs.is_constant() && rhs.is_constant()
            },
            Self::Trig(_, arg) => arg.is_constant(),
        }
    }

    /// Adds two expressions.
    ///
    /// Adding zero returns the other operand. Otherwise, the terms of both operands are
    /// collected into a single [`Expr::Polynomial`].
    pub fn plus(self, rhs: Expr) -> Expr {
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return rhs;
        }

        let mut terms = self.into_terms();
        terms.extend(rhs.into_terms());
        Self::Polynomial(terms)
    }

    /// Multiplies two expressions.
    ///
    /// Multiplying by zero returns zero, and multiplying by one returns the other operand.
    /// Otherwise, the factors of both operands are collected into a single [`Expr::Term`].
    pub fn times(self, rhs: Expr) -> Expr {
        if self.is_zero() {
            return self;
        }
        if rhs.is_zero() {
            return rhs;
        }
        if rhs.is_one() {
            return self;
        }
        if self.is_one() {
            return rhs;
        }

        let mut factors = self.into_factors();
        factors.extend(rhs.into_factors());
        Self::Term(factors)
    }

    /// Raises the expression to the given power.
    ///
    /// - `b^1 = b`
    /// - `b^0 = 1`
    /// - `0^p = 0`
    ///
    /// Returns an `UndefinedOperation` error for `0^0`.
    pub fn pow(self, power: Expr) -> Result<Expr, Error> {
        if self.is_zero() && power.is_zero() {
            return Err(error::undefined_power(&self, &power));
        }
        if power.is_one() {
            return Ok(self);
        }
        if power.is_zero() {
            return Ok(match power {
                Self::Primary(Primary::Float(_)) => Self::float(1.0),
                _ => Self::one(),
            });
        }
        if self.is_zero() {
            return Ok(self);
        }

        Ok(Self::Exponent(Box::new(self), Box::new(power)))
    }

    /// Divides the expression by the given denominator.
    ///
    /// - `a/1 = a`
    /// - `0/b = 0`
    ///
    /// Returns a `DivisionByZero` error if the denominator is zero.
    pub fn divide_by(self, denominator: Expr) -> Result<Expr, Error> {
        if denominator.is_zero() {
            return Err(error::division_by_zero(&self, &denominator));
        }
        if denominator.is_one() || self.is_zero() {
            return Ok(self);
        }

        Ok(Self::Rational(Box::new(self), Box::new(denominator)))
    }

    /// Returns the reciprocal of the expression, `1/e`.
    ///
    /// A ratio is inverted by swapping its numerator and denominator, and a trigonometric
    /// function is inverted into its reciprocal function (`1/sin(x) = csc(x)`).
    pub fn invert(self) -> Result<Expr, Error> {
        match self {
            Self::Rational(numerator, denominator) => denominator.divide_by(*numerator),
            Self::Trig(f, arg) => Ok(Self::Trig(f.reciprocal(), arg)),
            other => Self::one().divide_by(other),
        }
    }

    /// Returns the terms of the expression if it is a [`Expr::Polynomial`], or the expression
    /// itself as the only term.
    pub(crate) fn into_terms(self) -> Vec<Expr> {
        match self {
            Self::Polynomial(terms) => terms,
            other => vec![other],
        }
    }

    /// Returns the factors of the expression if it is a [`Expr::Term`], or the expression itself
    /// as the only factor.
    pub(crate) fn into_factors(self) -> Vec<Expr> {
        match self {
            Self::Term(factors) => factors,
            other => vec![other],
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Polynomial`] with zero / one term, or an
    /// [`Expr::Term`] with zero / one factor. This function checks for these cases and simplifies
    /// the expression into the single term / factor, or the integer 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Polynomial(mut terms) => {
                if terms.is_empty() {
                    Self::zero()
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Polynomial(terms)
                }
            },
            Self::Term(mut factors) => {
                if factors.is_empty() {
                    Self::one()
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Term(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns the base of the expression, treating anything that isn't an [`Expr::Exponent`] as
    /// a base raised to the power of one.
    pub fn base(&self) -> &Expr {
        match self {
            Self::Exponent(base, _) => base,
            other => other,
        }
    }

    /// Returns the power of the expression, treating anything that isn't an [`Expr::Exponent`]
    /// as a base raised to the power of one.
    pub fn power(&self) -> Cow<'_, Expr> {
        match self {
            Self::Exponent(_, power) => Cow::Borrowed(power),
            _ => Cow::Owned(Self::one()),
        }
    }

    /// Returns the numeric factors of the expression, and the remaining non-numeric factors.
    ///
    /// - `5` -> `([5], [])`
    /// - `3xy` -> `([3], [x, y])`
    /// - `sin(x)` -> `([], [sin(x)])`
    pub fn split_numeric(&self) -> (Vec<&Primary>, Vec<&Expr>) {
        match self {
            Self::Term(factors) => {
                let mut numbers = Vec::new();
                let mut rest = Vec::new();
                for factor in factors {
                    match factor.as_number() {
                        Some(number) => numbers.push(number),
                        None => rest.push(factor),
                    }
                }
                (numbers, rest)
            },
            Self::Primary(primary) if primary.is_numeric() => (vec![primary], Vec::new()),
            other => (Vec::new(), vec![other]),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of all variables in the expression, in sorted order.
    pub fn free_variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect()
    }
}

/// Adds two [`Expr`]s together with [`Expr::plus`].
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

/// Subtracts two [`Expr`]s, as `self + -1 * rhs`.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.plus(rhs.neg())
    }
}

/// Multiplies two [`Expr`]s together with [`Expr::times`].
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

/// Negates an [`Expr`] by multiplying it by `-1`.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::int(-1).times(self)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::int(n)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<Integer> for Expr {
    fn from(n: Integer) -> Self {
        Self::Primary(Primary::Integer(n))
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Self::float(n)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::var(name)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        Self::Primary(primary)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use super::super::error::{DivisionByZero, UndefinedOperation};
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    #[test]
    fn plus_identity() {
        assert_eq!(x().plus(Expr::zero()), x());
        assert_eq!(Expr::zero().plus(x()), x());
        assert_eq!(x().plus(Expr::float(0.0)), x());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "`NaN` cannot be stored in an expression")]
    fn nan_float() {
        let _ = Expr::float(f64::NAN);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "`NaN` cannot be stored in an expression")]
    fn nan_from_f64() {
        let _ = Expr::from(f64::NAN);
    }

    #[test]
    fn plus_flattens() {
        let sum = x().plus(y()).plus(x().plus(Expr::int(2)));
        assert_eq!(sum, Expr::Polynomial(vec![x(), y(), x(), Expr::int(2)]));
    }

    #[test]
    fn times_identity() {
        assert_eq!(x().times(Expr::zero()), Expr::zero());
        assert_eq!(Expr::zero().times(x()), Expr::zero());
        assert_eq!(x().times(Expr::one()), x());
        assert_eq!(Expr::one().times(x()), x());
    }

    #[test]
    fn times_flattens() {
        let product = Expr::int(2).times(x().times(y()));
        assert_eq!(product, Expr::Term(vec![Expr::int(2), x(), y()]));
    }

    #[test]
    fn times_keeps_sums() {
        let product = x().plus(Expr::one()).times(y());
        assert_eq!(product, Expr::Term(vec![
            Expr::Polynomial(vec![x(), Expr::one()]),
            y(),
        ]));
    }

    #[test]
    fn pow_identity() {
        assert_eq!(x().pow(Expr::one()).unwrap(), x());
        assert_eq!(x().pow(Expr::zero()).unwrap(), Expr::one());
        assert_eq!(x().pow(Expr::float(0.0)).unwrap(), Expr::float(1.0));
        assert_eq!(Expr::zero().pow(x()).unwrap(), Expr::zero());
        assert_eq!(
            x().pow(y()).unwrap(),
            Expr::Exponent(Box::new(x()), Box::new(y())),
        );
    }

    #[test]
    fn zero_to_zero() {
        let err = Expr::zero().pow(Expr::zero()).unwrap_err();
        assert!(err.is::<UndefinedOperation>());
        assert_eq!(err.expr, "0^0");

        let err = Expr::float(0.0).pow(Expr::zero()).unwrap_err();
        assert!(err.is::<UndefinedOperation>());
    }

    #[test]
    fn divide_by_identity() {
        assert_eq!(x().divide_by(Expr::one()).unwrap(), x());
        assert_eq!(Expr::zero().divide_by(x()).unwrap(), Expr::zero());
        assert_eq!(
            Expr::one().divide_by(x()).unwrap(),
            Expr::Rational(Box::new(Expr::one()), Box::new(x())),
        );
    }

    #[test]
    fn divide_by_zero() {
        let err = Expr::one().divide_by(Expr::zero()).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, "1/0");
        assert_eq!(err.spans, vec![0..1, 2..3]);

        // the denominator is checked before the numerator
        let err = Expr::zero().divide_by(Expr::float(0.0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn invert() {
        assert_eq!(
            x().invert().unwrap(),
            Expr::Rational(Box::new(Expr::one()), Box::new(x())),
        );
        assert_eq!(x().invert().unwrap().invert().unwrap(), x());
        assert_eq!(Expr::sin(x()).invert().unwrap(), Expr::trig(Trig::Csc, x()));
        assert!(Expr::zero().invert().unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn constant() {
        assert!(Expr::int(3).is_constant());
        assert!(Expr::pi().is_constant());
        assert!(!x().is_constant());
        assert!(Expr::int(2).plus(Expr::pi()).is_constant());
        assert!(!Expr::int(2).plus(x()).is_constant());
        assert!(!Expr::int(2).pow(x()).unwrap().is_constant());
        assert!(Expr::sin(Expr::pi()).is_constant());
    }

    #[test]
    fn structural_equality() {
        assert_ne!(Expr::int(2), Expr::float(2.0));
        assert_ne!(x().plus(y()), y().plus(x()));
        assert_eq!(Expr::float(0.0), Expr::float(-0.0));
    }

    #[test]
    fn hash_consistent_with_eq() {
        let set: HashSet<Expr> = [Expr::float(0.0), Expr::float(-0.0), Expr::int(0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn split_numeric() {
        let term = Expr::int(3).times(x()).times(y());
        let (numbers, rest) = term.split_numeric();
        assert_eq!(numbers, vec![&Primary::Integer(int(3))]);
        assert_eq!(rest, vec![&x(), &y()]);

        let x_expr = x();
        let (numbers, rest) = x_expr.split_numeric();
        assert!(numbers.is_empty());
        assert_eq!(rest, vec![&x()]);
    }

    #[test]
    fn free_variables() {
        let expr = x().pow(y()).unwrap().plus(Expr::sin(Expr::var("t"))).times(x());
        assert_eq!(expr.free_variables().into_iter().collect::<Vec<_>>(), vec!["t", "x", "y"]);
    }
}
