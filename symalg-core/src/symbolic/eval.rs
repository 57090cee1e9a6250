//! Numeric evaluation of expressions.
//!
//! Every node is evaluated to a [`Float`] at
//! [`EVAL_PRECISION`](crate::primitive::EVAL_PRECISION), and only the final result is
//! rounded to an [`f64`]. Transcendental constants take on their values, and trigonometric
//! functions are evaluated in radians. The terms of a sum and the factors of a product are
//! combined in ascending order of their values, so the result does not depend on the order in
//! which they are stored.
//!
//! ```
//! use symalg_core::{Ctxt, Expr};
//!
//! let expr = Expr::var("x").pow(Expr::var("y")).unwrap();
//! let ctxt = Ctxt::builder().bind_int("x", 3).bind_int("y", 5).build();
//! assert_eq!(expr.substitute(&ctxt).unwrap().evaluate().unwrap(), 243.0);
//! ```

use crate::primitive::eval_float;
use rug::{ops::Pow, Float, Integer};
use super::{
    error,
    expr::Expr,
    trig::{Transcendental, Trig},
    visit::Visitor,
};
use symalg_error::Error;

/// Evaluates an expression to a [`Float`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Evaluates each of the given nodes, and returns the values in ascending order.
    fn sorted_values(&mut self, node: &Expr, children: &[Expr]) -> Result<Vec<Float>, Error> {
        let mut values = children.iter()
            .map(|child| self.visit(child, Some(node)))
            .collect::<Result<Vec<_>, _>>()?;
        values.sort_by(|a, b| a.total_cmp(b));
        Ok(values)
    }
}

impl Visitor for Evaluator {
    type Output = Result<Float, Error>;

    fn visit_integer(&mut self, n: &Integer, _: Option<&Expr>) -> Self::Output {
        Ok(eval_float(n))
    }

    fn visit_float(&mut self, n: &Float, _: Option<&Expr>) -> Self::Output {
        Ok(eval_float(n))
    }

    fn visit_variable(&mut self, name: &str, _: Option<&Expr>) -> Self::Output {
        Err(error::unbound_variable(name))
    }

    fn visit_transcendental(&mut self, c: Transcendental, _: Option<&Expr>) -> Self::Output {
        Ok(c.value())
    }

    fn visit_polynomial(&mut self, node: &Expr, terms: &[Expr], _: Option<&Expr>) -> Self::Output {
        Ok(self.sorted_values(node, terms)?
            .into_iter()
            .fold(eval_float(0), |sum, value| sum + value))
    }

    fn visit_term(&mut self, node: &Expr, factors: &[Expr], _: Option<&Expr>) -> Self::Output {
        Ok(self.sorted_values(node, factors)?
            .into_iter()
            .fold(eval_float(1), |product, value| product * value))
    }

    fn visit_exponent(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        let base_value = self.visit(base, Some(node))?;
        let power_value = self.visit(power, Some(node))?;
        if base_value.is_zero() && power_value.is_zero() {
            return Err(error::undefined_power(base, power));
        }
        Ok(base_value.pow(power_value))
    }

    fn visit_rational(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        let numerator_value = self.visit(numerator, Some(node))?;
        let denominator_value = self.visit(denominator, Some(node))?;
        if denominator_value.is_zero() {
            return Err(error::division_by_zero(numerator, denominator));
        }
        Ok(numerator_value / denominator_value)
    }

    fn visit_trig(&mut self, node: &Expr, f: Trig, arg: &Expr, _: Option<&Expr>) -> Self::Output {
        Ok(f.eval(self.visit(arg, Some(node))?))
    }
}

impl Expr {
    /// Evaluates the expression to a [`Float`] with
    /// [`EVAL_PRECISION`](crate::primitive::EVAL_PRECISION) bits of precision.
    ///
    /// Returns an `UnboundVariable` error if the expression contains a variable, a
    /// `DivisionByZero` error if a denominator evaluates to zero, and an `UndefinedOperation`
    /// error if `0^0` is evaluated.
    pub fn evaluate_float(&self) -> Result<Float, Error> {
        Evaluator.visit(self, None)
    }

    /// Evaluates the expression to the nearest [`f64`]. See [`Expr::evaluate_float`].
    pub fn evaluate(&self) -> Result<f64, Error> {
        Ok(self.evaluate_float()?.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use super::super::error::{DivisionByZero, UnboundVariable, UndefinedOperation};
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn arithmetic() {
        let expr = Expr::int(2).plus(Expr::float(0.5)).times(Expr::int(4));
        assert_float_relative_eq!(expr.evaluate().unwrap(), 10.0);
    }

    #[test]
    fn ratio() {
        let expr = Expr::int(7).divide_by(Expr::int(2)).unwrap();
        assert_eq!(expr.to_string(), "7/2");
        assert_float_relative_eq!(expr.evaluate().unwrap(), 3.5);
    }

    #[test]
    fn constants() {
        let expr = Expr::pi().times(Expr::e());
        assert_float_relative_eq!(
            expr.evaluate().unwrap(),
            std::f64::consts::PI * std::f64::consts::E
        );
    }

    #[test]
    fn reciprocal_trig() {
        let expr = Expr::trig(Trig::Csc, Expr::pi().divide_by(Expr::float(4.0)).unwrap());
        assert_float_relative_eq!(expr.evaluate().unwrap(), 2.0 / 2f64.sqrt());
    }

    #[test]
    fn negative_power() {
        let expr = Expr::int(2).pow(Expr::int(-2)).unwrap();
        assert_float_relative_eq!(expr.evaluate().unwrap(), 0.25);
    }

    #[test]
    fn agrees_with_simplified_form() {
        let expr = Expr::int(3).pow(Expr::int(5)).unwrap()
            .times(Expr::int(5))
            .plus(Expr::int(3).pow(Expr::int(5).plus(Expr::int(1))).unwrap())
            .plus(Expr::int(3).times(Expr::int(3).pow(Expr::int(5)).unwrap()));
        assert_float_relative_eq!(expr.evaluate().unwrap(), 2673.0);
        assert_float_relative_eq!(expr.simplify().unwrap().evaluate().unwrap(), 2673.0);
    }

    #[test]
    fn unbound_variable() {
        let err = x().plus(Expr::int(1)).evaluate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnboundVariable>(),
            Some(&UnboundVariable { name: "x".to_string() }),
        );
    }

    #[test]
    fn zero_denominator() {
        let denominator = Expr::int(2).plus(Expr::int(-2));
        let expr = Expr::Rational(Box::new(Expr::int(1)), Box::new(denominator));
        let err = expr.evaluate().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, "1/(2 + -2)");
    }

    #[test]
    fn zero_to_the_zero() {
        let zero = Expr::float(0.5).plus(Expr::float(-0.5));
        let expr = Expr::Exponent(Box::new(zero.clone()), Box::new(zero));
        assert!(expr.evaluate().unwrap_err().is::<UndefinedOperation>());
    }
}
