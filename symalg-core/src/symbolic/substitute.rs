//! Replacing variables with the expressions bound to them.
//!
//! Substitution rebuilds the tree with the smart constructors, so trivial identities that appear
//! after substitution are removed, but nothing is simplified. A variable with no binding in the
//! [`Ctxt`] is left in place.
//!
//! ```
//! use symalg_core::{Ctxt, Expr};
//!
//! let expr = Expr::var("x").pow(Expr::var("y")).unwrap();
//! let ctxt = Ctxt::builder().bind_int("x", 3).bind_int("y", 5).build();
//! let substituted = expr.substitute(&ctxt).unwrap();
//! assert_eq!(substituted.to_string(), "3^5");
//! assert_eq!(substituted.simplify().unwrap().to_string(), "243");
//! ```

use rug::{Float, Integer};
use super::{
    ctxt::Ctxt,
    expr::{Expr, Primary},
    trig::{Transcendental, Trig},
    visit::Visitor,
};
use symalg_error::Error;

/// Substitutes the variables bound in a [`Ctxt`].
#[derive(Debug)]
pub struct Substituter<'a> {
    ctxt: &'a Ctxt,
}

impl<'a> Substituter<'a> {
    pub fn new(ctxt: &'a Ctxt) -> Self {
        Self { ctxt }
    }
}

impl Visitor for Substituter<'_> {
    type Output = Result<Expr, Error>;

    fn visit_integer(&mut self, n: &Integer, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Integer(n.clone())))
    }

    fn visit_float(&mut self, n: &Float, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Float(n.clone())))
    }

    fn visit_variable(&mut self, name: &str, _: Option<&Expr>) -> Self::Output {
        Ok(self.ctxt.get_var(name).unwrap_or_else(|| Expr::var(name)))
    }

    fn visit_transcendental(&mut self, c: Transcendental, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::Primary(Primary::Transcendental(c)))
    }

    fn visit_polynomial(&mut self, node: &Expr, terms: &[Expr], _: Option<&Expr>) -> Self::Output {
        terms.iter().try_fold(Expr::zero(), |sum, term| {
            Ok(sum.plus(self.visit(term, Some(node))?))
        })
    }

    fn visit_term(&mut self, node: &Expr, factors: &[Expr], _: Option<&Expr>) -> Self::Output {
        factors.iter().try_fold(Expr::one(), |product, factor| {
            Ok(product.times(self.visit(factor, Some(node))?))
        })
    }

    fn visit_exponent(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        let base = self.visit(base, Some(node))?;
        let power = self.visit(power, Some(node))?;
        base.pow(power)
    }

    fn visit_rational(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
        _: Option<&Expr>,
    ) -> Self::Output {
        let numerator = self.visit(numerator, Some(node))?;
        let denominator = self.visit(denominator, Some(node))?;
        numerator.divide_by(denominator)
    }

    fn visit_trig(&mut self, node: &Expr, f: Trig, arg: &Expr, _: Option<&Expr>) -> Self::Output {
        Ok(Expr::trig(f, self.visit(arg, Some(node))?))
    }
}

impl Expr {
    /// Replaces every variable bound in the given context with its value.
    ///
    /// Returns a `DivisionByZero` error if a denominator becomes zero, and an
    /// `UndefinedOperation` error if `0^0` appears.
    pub fn substitute(&self, ctxt: &Ctxt) -> Result<Expr, Error> {
        log::debug!("substituting {} binding(s) into `{}`", ctxt.get_vars().len(), self);
        Substituter::new(ctxt).visit(self, None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::super::error::{DivisionByZero, UndefinedOperation};
    use super::*;

    fn x() -> Expr {
        Expr::var("x")
    }

    fn y() -> Expr {
        Expr::var("y")
    }

    #[test]
    fn unbound_variables_stay() {
        let expr = x().plus(y());
        let ctxt = Ctxt::builder().bind_int("x", 2).build();
        assert_eq!(expr.substitute(&ctxt).unwrap().to_string(), "2 + y");
    }

    #[test]
    fn empty_context_is_identity() {
        let expr = Expr::sin(x()).times(y().pow(Expr::int(2)).unwrap());
        assert_eq!(expr.substitute(&Ctxt::new()).unwrap(), expr);
    }

    #[test]
    fn substituted_expressions_are_not_simplified() {
        let expr = x().pow(y()).unwrap()
            .times(y())
            .plus(x().pow(y().plus(Expr::int(1))).unwrap())
            .plus(Expr::int(3).times(x().pow(y()).unwrap()));
        assert_eq!(expr.to_string(), "(x^y)y + x^(y + 1) + 3(x^y)");

        let ctxt = Ctxt::builder().bind_int("x", 3).bind_int("y", 5).build();
        let substituted = expr.substitute(&ctxt).unwrap();
        assert_eq!(substituted.to_string(), "(3^5)5 + 3^(5 + 1) + 3(3^5)");
        assert_eq!(substituted.simplify().unwrap().to_string(), "2673");
    }

    #[test]
    fn bind_to_expression() {
        let expr = x().times(x());
        let ctxt = Ctxt::builder().bind("x", y().plus(Expr::int(1))).build();
        let substituted = expr.substitute(&ctxt).unwrap();
        assert_eq!(substituted.to_string(), "(y + 1)(y + 1)");
        assert_eq!(substituted.simplify().unwrap().to_string(), "(y + 1)^2");
    }

    #[test]
    fn trivial_identities_are_removed() {
        let expr = x().times(y()).plus(Expr::int(4));
        let ctxt = Ctxt::builder().bind_int("x", 0).build();
        assert_eq!(expr.substitute(&ctxt).unwrap().to_string(), "4");
    }

    #[test]
    fn trig_argument() {
        let expr = Expr::cos(x());
        let ctxt = Ctxt::builder().bind("x", Expr::pi()).build();
        assert_eq!(expr.substitute(&ctxt).unwrap().to_string(), "cos(π)");
    }

    #[test]
    fn zero_denominator() {
        let expr = Expr::int(1).divide_by(x()).unwrap();
        let ctxt = Ctxt::builder().bind_int("x", 0).build();
        let err = expr.substitute(&ctxt).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, "1/0");
    }

    #[test]
    fn zero_to_the_zero() {
        let expr = x().pow(y()).unwrap();
        let ctxt = Ctxt::builder().bind_int("x", 0).bind_float("y", 0.0).build();
        let err = expr.substitute(&ctxt).unwrap_err();
        assert!(err.is::<UndefinedOperation>());
        assert_eq!(err.expr, "0^0.0");
    }
}
