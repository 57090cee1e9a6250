//! Symbolic manipulation of expressions.
//!
//! Every operation on an [`Expr`](expr::Expr) other than the smart constructors is written as a
//! [`Visitor`](visit::Visitor): rendering ([`fmt`]), simplification ([`simplify`]), substitution
//! ([`substitute`]), and numeric evaluation ([`eval`]).

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod ordering;
pub mod simplify;
pub mod substitute;
#[cfg(test)]
pub(crate) mod testing;
pub mod trig;
pub mod visit;
