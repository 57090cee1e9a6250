use rayon::prelude::*;
use std::fmt::{self, Display, Formatter};
use super::{error::{dimension_mismatch, not_square}, vector::Vector};
use symalg_core::{Ctxt, Expr};
use symalg_error::Error;

/// A rectangular matrix of expressions, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: Vec<Vec<Expr>>,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from its rows.
    ///
    /// Returns a `DimensionMismatch` error if the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<Expr>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            let first = Vector::new(rows[0].clone());
            let ragged = Vector::new(row.clone());
            return Err(dimension_mismatch(
                &first,
                "|",
                &ragged,
                cols.to_string(),
                row.len().to_string(),
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Creates the `n×n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { Expr::one() } else { Expr::zero() }).collect())
            .collect();
        Self { rows, cols: n }
    }

    /// Returns the element at row `i` and column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<&Expr> {
        self.rows.get(i)?.get(j)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape of the matrix, as `rows×cols`.
    fn shape(&self) -> String {
        format!("{}×{}", self.rows(), self.cols())
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Builds a matrix of the same shape by applying `f` to every element.
    fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(&Expr) -> Expr,
    {
        let rows = self.rows.iter()
            .map(|row| row.iter().map(&f).collect())
            .collect();
        Self { rows, cols: self.cols }
    }

    /// Like [`Matrix::map`], but fallible, and applied to the rows in parallel.
    fn try_par_map<F>(&self, f: F) -> Result<Matrix, Error>
    where
        F: Fn(&Expr) -> Result<Expr, Error> + Sync + Send,
    {
        let rows = self.rows.par_iter()
            .map(|row| row.iter().map(&f).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows, cols: self.cols })
    }

    /// Adds two matrices element-wise.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(dimension_mismatch(self, "+", other, self.shape(), other.shape()));
        }

        let rows = self.rows.iter()
            .zip(&other.rows)
            .map(|(lhs, rhs)| {
                lhs.iter()
                    .zip(rhs)
                    .map(|(a, b)| a.clone().plus(b.clone()))
                    .collect()
            })
            .collect();
        Ok(Self { rows, cols: self.cols })
    }

    /// Multiplies every element by the given scalar.
    pub fn scale(&self, scalar: &Expr) -> Matrix {
        self.map(|value| scalar.clone().times(value.clone()))
    }

    /// Multiplies two matrices.
    ///
    /// Returns a `DimensionMismatch` error if the number of columns of `self` is not the number
    /// of rows of `other`.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols() != other.rows() {
            return Err(dimension_mismatch(self, "×", other, self.shape(), other.shape()));
        }

        let rows = self.rows.iter()
            .map(|row| {
                (0..other.cols())
                    .map(|j| {
                        row.iter()
                            .zip(&other.rows)
                            .fold(Expr::zero(), |sum, (a, other_row)| {
                                sum.plus(a.clone().times(other_row[j].clone()))
                            })
                    })
                    .collect()
            })
            .collect();
        Ok(Self { rows, cols: other.cols() })
    }

    /// Multiplies the matrix by a column vector.
    pub fn mul_vector(&self, vector: &Vector) -> Result<Vector, Error> {
        if self.cols() != vector.len() {
            return Err(dimension_mismatch(
                self,
                "×",
                vector,
                self.shape(),
                vector.len().to_string(),
            ));
        }

        Ok(Vector::new(
            self.rows.iter()
                .map(|row| {
                    row.iter()
                        .zip(vector.values())
                        .fold(Expr::zero(), |sum, (a, b)| sum.plus(a.clone().times(b.clone())))
                })
                .collect(),
        ))
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.cols())
            .map(|j| self.rows.iter().map(|row| row[j].clone()).collect())
            .collect();
        Self { rows, cols: self.rows() }
    }

    /// Returns the sum of the elements on the main diagonal.
    ///
    /// Returns a `NotSquare` error if the matrix is not square.
    pub fn trace(&self) -> Result<Expr, Error> {
        if !self.is_square() {
            return Err(not_square(self, self.rows(), self.cols()));
        }

        Ok(self.rows.iter()
            .enumerate()
            .fold(Expr::zero(), |sum, (i, row)| sum.plus(row[i].clone())))
    }

    /// Returns the determinant of the matrix, by cofactor expansion along the first row.
    ///
    /// The determinant is not simplified. The determinant of the empty matrix is one. Returns a
    /// `NotSquare` error if the matrix is not square.
    pub fn det(&self) -> Result<Expr, Error> {
        if !self.is_square() {
            return Err(not_square(self, self.rows(), self.cols()));
        }

        log::debug!("expanding determinant of {} matrix", self.shape());
        Ok(determinant(&self.rows))
    }

    /// Simplifies every element of the matrix, one row per task.
    pub fn simplify(&self) -> Result<Matrix, Error> {
        log::debug!("simplifying {} matrix", self.shape());
        self.try_par_map(Expr::simplify)
    }

    /// Substitutes the variables bound in the given context into every element, one row per
    /// task.
    pub fn substitute(&self, ctxt: &Ctxt) -> Result<Matrix, Error> {
        self.try_par_map(|value| value.substitute(ctxt))
    }
}

/// The determinant of a square matrix, given by its rows.
fn determinant(rows: &[Vec<Expr>]) -> Expr {
    match rows.len() {
        0 => Expr::one(),
        1 => rows[0][0].clone(),
        2 => {
            let ad = rows[0][0].clone().times(rows[1][1].clone());
            let bc = rows[0][1].clone().times(rows[1][0].clone());
            ad.plus(Expr::int(-1).times(bc))
        },
        _ => rows[0].iter()
            .enumerate()
            .fold(Expr::zero(), |sum, (j, a)| {
                let sign = if j % 2 == 0 { Expr::one() } else { Expr::int(-1) };
                let cofactor = sign.times(determinant(&minor(rows, j)));
                sum.plus(a.clone().times(cofactor))
            }),
    }
}

/// The rows of the matrix with the first row and the given column removed.
fn minor(rows: &[Vec<Expr>], col: usize) -> Vec<Vec<Expr>> {
    rows[1..].iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, value)| value.clone())
                .collect()
        })
        .collect()
}

/// Renders the matrix as `[[a, b], [c, d]]`.
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
