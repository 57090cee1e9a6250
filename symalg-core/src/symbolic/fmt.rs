//! Rendering of expressions to their canonical text form.
//!
//! - Integers are rendered as-is, and floats always show a fractional part (`4.0`).
//! - The factors of a [`Expr::Term`] are concatenated with no separator (`3xy`).
//! - The terms of a [`Expr::Polynomial`] are joined by ` + `. There is no subtraction; a negative
//!   term is rendered as `+ -1`.
//! - A polynomial is parenthesized when it is a factor, a base or power, or a numerator or
//!   denominator. A power is parenthesized when it is a factor: `(x^2)y`.
//!
//! Children are rendered in the order they are stored, which is the canonical order for
//! simplified expressions.

use rug::{Float, Integer};
use std::fmt::{self, Display, Formatter};
use super::{
    expr::Expr,
    trig::{Transcendental, Trig},
    visit::Visitor,
};

/// Renders an expression to a [`String`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

/// Wraps the rendered expression in parentheses if `wrap` is true.
fn paren(rendered: String, wrap: bool) -> String {
    if wrap {
        format!("({})", rendered)
    } else {
        rendered
    }
}

/// Renders a float so that it always shows a fractional part, including in exponent form
/// (`1.0e16`, `1.0e-5`).
fn render_float(value: f64) -> String {
    let rendered = format!("{:?}", value);
    if !value.is_finite() || rendered.contains('.') {
        return rendered;
    }
    match rendered.find('e') {
        Some(idx) => format!("{}.0{}", &rendered[..idx], &rendered[idx..]),
        None => format!("{}.0", rendered),
    }
}

impl Visitor for Renderer {
    type Output = String;

    fn visit_integer(&mut self, n: &Integer, _: Option<&Expr>) -> String {
        n.to_string()
    }

    fn visit_float(&mut self, n: &Float, _: Option<&Expr>) -> String {
        render_float(n.to_f64())
    }

    fn visit_variable(&mut self, name: &str, _: Option<&Expr>) -> String {
        name.to_string()
    }

    fn visit_transcendental(&mut self, c: Transcendental, _: Option<&Expr>) -> String {
        c.symbol().to_string()
    }

    fn visit_polynomial(&mut self, node: &Expr, terms: &[Expr], parent: Option<&Expr>) -> String {
        let rendered = terms.iter()
            .map(|term| self.visit(term, Some(node)))
            .collect::<Vec<_>>()
            .join(" + ");
        let wrap = matches!(
            parent,
            Some(Expr::Term(_) | Expr::Exponent(..) | Expr::Rational(..))
        );
        paren(rendered, wrap)
    }

    fn visit_term(&mut self, node: &Expr, factors: &[Expr], _: Option<&Expr>) -> String {
        factors.iter()
            .map(|factor| self.visit(factor, Some(node)))
            .collect()
    }

    fn visit_exponent(
        &mut self,
        node: &Expr,
        base: &Expr,
        power: &Expr,
        parent: Option<&Expr>,
    ) -> String {
        let rendered = format!(
            "{}^{}",
            self.visit(base, Some(node)),
            self.visit(power, Some(node)),
        );
        paren(rendered, matches!(parent, Some(Expr::Term(_))))
    }

    fn visit_rational(
        &mut self,
        node: &Expr,
        numerator: &Expr,
        denominator: &Expr,
        _: Option<&Expr>,
    ) -> String {
        format!(
            "{}/{}",
            self.visit(numerator, Some(node)),
            self.visit(denominator, Some(node)),
        )
    }

    fn visit_trig(&mut self, node: &Expr, f: Trig, arg: &Expr, _: Option<&Expr>) -> String {
        format!("{}({})", f.name(), self.visit(arg, Some(node)))
    }
}

/// Renders `expr` as a child of `parent`.
pub(crate) fn render_child(expr: &Expr, parent: &Expr) -> String {
    Renderer.visit(expr, Some(parent))
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer.visit(self, None))
    }
}
