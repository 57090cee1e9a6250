//! The traversal protocol shared by every operation on expressions.
//!
//! A [`Visitor`] has one method per kind of node, and a provided [`Visitor::visit`] method that
//! dispatches on the node. Each method receives the parent of the node being visited, if any.
//! Compound nodes also receive the node itself, so that they can pass it as the parent when
//! visiting their children.
//!
//! ```
//! use rug::{Float, Integer};
//! use symalg_core::{Expr, Transcendental, Trig, Visitor};
//!
//! /// Counts the leaves of an expression.
//! struct Leaves;
//!
//! impl Visitor for Leaves {
//!     type Output = usize;
//!
//!     fn visit_integer(&mut self, _: &Integer, _: Option<&Expr>) -> usize { 1 }
//!     fn visit_float(&mut self, _: &Float, _: Option<&Expr>) -> usize { 1 }
//!     fn visit_variable(&mut self, _: &str, _: Option<&Expr>) -> usize { 1 }
//!     fn visit_transcendental(&mut self, _: Transcendental, _: Option<&Expr>) -> usize { 1 }
//!
//!     fn visit_polynomial(&mut self, node: &Expr, terms: &[Expr], _: Option<&Expr>) -> usize {
//!         terms.iter().map(|term| self.visit(term, Some(node))).sum()
//!     }
//!
//!     fn visit_term(&mut self, node: &Expr, factors: &[Expr], _: Option<&Expr>) -> usize {
//!         factors.iter().map(|factor| self.visit(factor, Some(node))).sum()
//!     }
//!
//!     fn visit_exponent(&mut self, node: &Expr, base: &Expr, power: &Expr, _: Option<&Expr>) -> usize {
//!         self.visit(base, Some(node)) + self.visit(power, Some(node))
//!     }
//!
//!     fn visit_rational(&mut self, node: &Expr, num: &Expr, den: &Expr, _: Option<&Expr>) -> usize {
//!         self.visit(num, Some(node)) + self.visit(den, Some(node))
//!     }
//!
//!     fn visit_trig(&mut self, node: &Expr, _: Trig, arg: &Expr, _: Option<&Expr>) -> usize {
//!         self.visit(arg, Some(node))
//!     }
//! }
//!
//! let expr = Expr::var("x").plus(Expr::int(2)).times(Expr::sin(Expr::pi()));
//! assert_eq!(Leaves.visit(&expr, None), 3);
//! ```

use rug::{Float, Integer};
use super::{
    expr::{Expr, Primary},
    trig::{Transcendental, Trig},
};

/// A depth-first operation over an [`Expr`], with one method per kind of node.
pub trait Visitor {
    /// The result of visiting a node.
    type Output;

    fn visit_integer(&mut self, n: &Integer, parent: Option<&Expr>) -> Self::Output;

    fn visit_float(&mut self, n: &Float, parent: Option<&Expr>) -> Self::Output;

    fn visit_variable(&mut self, name: &str, parent: Option<&Expr>) -> Self::Output;

    fn visit_transcendental(&mut self, c: Transcendental, parent: Option<&Expr>) -> Self::Output;

    fn visit_polynomial(
        &mut self,
        node: &Expr,
        terms: &[Expr],
        parent: Option<&Expr>,
    ) -> Self::Output;

    fn visit_term(
        &mut self,
        node: &Expr,
        factors: &[Expr],
        parent: Option<&Expr>,
    ) -> Self::Output;

    fn visit_exponent(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
        parent: Option<&Expr>,
    ) -> Self::Output;

    fn visit_rational(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
        parent: Option<&Expr>,
    ) -> Self::Output;

    fn visit_trig(
        &mut self,
        node: &Expr,
        f: Trig,
        arg: &Expr,
        parent: Option<&Expr>,
    ) -> Self::Output;

    /// Visits the given node, dispatching to the method for its kind.
    fn visit(&mut self, expr: &Expr, parent: Option<&Expr>) -> Self::Output {
        match expr {
            Expr::Primary(Primary::Integer(n)) => self.visit_integer(n, parent),
            Expr::Primary(Primary::Float(n)) => self.visit_float(n, parent),
            Expr::Primary(Primary::Variable(name)) => self.visit_variable(name, parent),
            Expr::Primary(Primary::Transcendental(c)) => self.visit_transcendental(*c, parent),
            Expr::Polynomial(terms) => self.visit_polynomial(expr, terms, parent),
            Expr::Term(factors) => self.visit_term(expr, factors, parent),
            Expr::Exponent(base, power) => self.visit_exponent(expr, base, power, parent),
            Expr::Rational(num, den) => self.visit_rational(expr, num, den, parent),
            Expr::Trig(f, arg) => self.visit_trig(expr, *f, arg, parent),
        }
    }
}
