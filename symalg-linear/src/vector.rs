use rayon::prelude::*;
use std::fmt::{self, Display, Formatter};
use super::error::dimension_mismatch;
use symalg_core::{Ctxt, Expr};
use symalg_error::Error;

/// A vector of expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    values: Vec<Expr>,
}

impl Vector {
    /// Creates a vector with the given elements.
    pub fn new(values: Vec<Expr>) -> Self {
        Self { values }
    }

    /// Creates a vector of `n` zeros.
    pub fn zero(n: usize) -> Self {
        Self::new(vec![Expr::zero(); n])
    }

    /// The unit vector `[1, 0, 0]`.
    pub fn i() -> Self {
        Self::new(vec![Expr::one(), Expr::zero(), Expr::zero()])
    }

    /// The unit vector `[0, 1, 0]`.
    pub fn j() -> Self {
        Self::new(vec![Expr::zero(), Expr::one(), Expr::zero()])
    }

    /// The unit vector `[0, 0, 1]`.
    pub fn k() -> Self {
        Self::new(vec![Expr::zero(), Expr::zero(), Expr::one()])
    }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the element at the given index.
    pub fn get(&self, idx: usize) -> Option<&Expr> {
        self.values.get(idx)
    }

    /// Returns the elements of the vector.
    pub fn values(&self) -> &[Expr] {
        &self.values
    }

    /// Returns an error if the other vector has a different length.
    fn check_len(&self, op: &str, other: &Vector) -> Result<(), Error> {
        if self.len() != other.len() {
            return Err(dimension_mismatch(
                self,
                op,
                other,
                self.len().to_string(),
                other.len().to_string(),
            ));
        }
        Ok(())
    }

    /// Adds two vectors element-wise.
    pub fn add(&self, other: &Vector) -> Result<Vector, Error> {
        self.check_len("+", other)?;
        Ok(Self::new(
            self.values.iter()
                .zip(&other.values)
                .map(|(a, b)| a.clone().plus(b.clone()))
                .collect(),
        ))
    }

    /// Multiplies every element by the given scalar.
    pub fn scale(&self, scalar: &Expr) -> Vector {
        Self::new(self.values.iter().map(|value| scalar.clone().times(value.clone())).collect())
    }

    /// Returns the dot product of two vectors.
    pub fn dot(&self, other: &Vector) -> Result<Expr, Error> {
        self.check_len("·", other)?;
        Ok(self.values.iter()
            .zip(&other.values)
            .fold(Expr::zero(), |sum, (a, b)| sum.plus(a.clone().times(b.clone()))))
    }

    /// Returns the cross product of two 3-vectors.
    ///
    /// Each component is built as `ab + -1(cd)`, and is not simplified.
    pub fn cross(&self, other: &Vector) -> Result<Vector, Error> {
        if self.len() != 3 || other.len() != 3 {
            return Err(dimension_mismatch(
                self,
                "×",
                other,
                self.len().to_string(),
                other.len().to_string(),
            ));
        }

        let a = &self.values;
        let b = &other.values;
        let component = |p: usize, q: usize| {
            let positive = a[p].clone().times(b[q].clone());
            let negative = a[q].clone().times(b[p].clone());
            positive.plus(Expr::int(-1).times(negative))
        };
        Ok(Self::new(vec![component(1, 2), component(2, 0), component(0, 1)]))
    }

    /// Simplifies every element of the vector, in parallel.
    pub fn simplify(&self) -> Result<Vector, Error> {
        log::debug!("simplifying {}-vector", self.len());
        let values = self.values.par_iter()
            .map(Expr::simplify)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(values))
    }

    /// Substitutes the variables bound in the given context into every element, in parallel.
    pub fn substitute(&self, ctxt: &Ctxt) -> Result<Vector, Error> {
        let values = self.values.par_iter()
            .map(|value| value.substitute(ctxt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(values))
    }
}

impl From<Vec<Expr>> for Vector {
    fn from(values: Vec<Expr>) -> Self {
        Self::new(values)
    }
}

/// Renders the vector as `[a, b, c]`.
impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
