//! Errors that can occur while building, simplifying, substituting, or evaluating expressions.
//!
//! Each error is reported against the rendered form of the expression that caused it, such as
//! `x/0` or `0^0`.

use symalg_attrs::ErrorKind;
use symalg_error::Error;
use super::{expr::Expr, fmt::render_child};

/// Attempted to construct a ratio whose denominator is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this numerator...", "...is divided by zero"],
    help = "the denominator of a ratio must not be zero",
)]
pub struct DivisionByZero;

/// Attempted to raise zero to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "zero raised to the power of zero is undefined",
    labels = ["this base is zero...", "...and so is this power"],
)]
pub struct UndefinedOperation;

/// Attempted to numerically evaluate an expression that still contains a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate the unbound variable `{}`", name),
    labels = ["this variable has no value"],
    help = "substitute a value for every variable before evaluating",
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,
}

/// Renders `lhs`, `op`, and `rhs` next to each other, the way the given parent node would render
/// them, and returns the rendering with the character spans of both operands.
fn binary_source(
    parent: &Expr,
    lhs: &Expr,
    op: char,
    rhs: &Expr,
) -> (String, Vec<std::ops::Range<usize>>) {
    let lhs = render_child(lhs, parent);
    let rhs = render_child(rhs, parent);
    let lhs_len = lhs.chars().count();
    let rhs_start = lhs_len + 1;
    let spans = vec![0..lhs_len, rhs_start..rhs_start + rhs.chars().count()];
    (format!("{}{}{}", lhs, op, rhs), spans)
}

/// Creates a [`DivisionByZero`] error for `numerator/denominator`.
pub(crate) fn division_by_zero(numerator: &Expr, denominator: &Expr) -> Error {
    let parent = Expr::Rational(Box::new(numerator.clone()), Box::new(denominator.clone()));
    let (source, spans) = binary_source(&parent, numerator, '/', denominator);
    Error::new(source, spans, DivisionByZero)
}

/// Creates an [`UndefinedOperation`] error for `base^power`.
pub(crate) fn undefined_power(base: &Expr, power: &Expr) -> Error {
    let parent = Expr::Exponent(Box::new(base.clone()), Box::new(power.clone()));
    let (source, spans) = binary_source(&parent, base, '^', power);
    Error::new(source, spans, UndefinedOperation)
}

/// Creates an [`UnboundVariable`] error for the given variable.
pub(crate) fn unbound_variable(name: &str) -> Error {
    Error::new(name, vec![0..name.chars().count()], UnboundVariable { name: name.to_string() })
}
