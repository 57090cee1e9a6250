//! A symbolic algebra kernel.
//!
//! Expressions are immutable trees built with the smart constructors on [`Expr`]
//! ([`Expr::plus`], [`Expr::times`], [`Expr::pow`], [`Expr::divide_by`], and [`Expr::invert`]),
//! which only remove trivial identities. [`Expr::simplify`] reduces a tree to its canonical form:
//! like terms and like factors are merged, numbers are folded, and products distribute over sums.
//!
//! ```
//! use symalg_core::Expr;
//!
//! let x = Expr::var("x");
//! let expr = (x.clone() + Expr::int(1)) * (x + Expr::int(3));
//! assert_eq!(expr.to_string(), "(x + 1)(x + 3)");
//! assert_eq!(expr.simplify().unwrap().to_string(), "x^2 + 4x + 3");
//! ```
//!
//! Variables are bound with a [`Ctxt`] and substituted with [`Expr::substitute`]. A fully bound
//! expression can be evaluated with [`Expr::evaluate`].

pub mod consts;
pub mod primitive;
pub mod symbolic;

pub use symbolic::{
    ctxt::{Ctxt, CtxtBuilder},
    expr::{Expr, Primary},
    ordering::Order,
    simplify::{simplify, simplify_with, simplify_with_steps, step::{Step, StepCollector}},
    trig::{Transcendental, Trig},
    visit::Visitor,
};
pub use symalg_error::Error;
