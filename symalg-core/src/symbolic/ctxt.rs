//! Bindings from variable names to expressions.

use rug::Integer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use super::expr::Expr;

/// A context to use when substituting into an expression, mapping variable names to the
/// expressions that replace them.
///
/// ```
/// use symalg_core::{Ctxt, Expr};
///
/// let ctxt = Ctxt::builder()
///     .bind("x", Expr::int(3))
///     .bind_int("y", 5)
///     .build();
/// assert_eq!(ctxt.get_var("y"), Some(Expr::int(5)));
/// assert_eq!(ctxt.get_var("z"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Expr>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Returns a builder for a context.
    pub fn builder() -> CtxtBuilder {
        CtxtBuilder::default()
    }

    /// Add a variable to the context, replacing any previous binding of the same name.
    pub fn add_var(&mut self, name: &str, value: Expr) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Expr> {
        self.vars.get(name).cloned()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Expr> {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Builds a [`Ctxt`] one binding at a time. The last binding of a name wins.
#[derive(Debug, Clone, Default)]
pub struct CtxtBuilder {
    vars: HashMap<String, Expr>,
}

impl CtxtBuilder {
    /// Binds a variable to an expression.
    pub fn bind(mut self, name: &str, value: impl Into<Expr>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }

    /// Binds a variable to an integer.
    pub fn bind_int<T>(self, name: &str, value: T) -> Self
    where
        Integer: From<T>,
    {
        self.bind(name, Expr::int(value))
    }

    /// Binds a variable to a float.
    pub fn bind_float(self, name: &str, value: f64) -> Self {
        self.bind(name, Expr::float(value))
    }

    pub fn build(self) -> Ctxt {
        Ctxt { vars: self.vars }
    }
}
