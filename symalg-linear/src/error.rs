//! Errors raised by operations on operands of incompatible shapes.

use std::fmt::Display;
use symalg_attrs::ErrorKind;
use symalg_error::Error;

/// The shapes of the operands of an operation are incompatible.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("dimension mismatch: {} vs {}", left, right),
    labels = [format!("this has dimension {}", left), format!("...but this has dimension {}", right)],
)]
pub struct DimensionMismatch {
    /// The shape of the left operand, such as `3` or `2×3`.
    pub left: String,

    /// The shape of the right operand.
    pub right: String,
}

/// The operation is only defined for square matrices.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected a square matrix, found a {}×{} matrix", rows, cols),
    labels = ["this matrix is not square"],
    help = "trace and determinant are only defined for square matrices",
)]
pub struct NotSquare {
    pub rows: usize,
    pub cols: usize,
}

/// Creates a [`DimensionMismatch`] error for `lhs op rhs`.
pub(crate) fn dimension_mismatch(
    lhs: &impl Display,
    op: &str,
    rhs: &impl Display,
    left: String,
    right: String,
) -> Error {
    let lhs = lhs.to_string();
    let rhs = rhs.to_string();
    let lhs_len = lhs.chars().count();
    let rhs_start = lhs_len + op.chars().count() + 2;
    let spans = vec![0..lhs_len, rhs_start..rhs_start + rhs.chars().count()];
    Error::new(format!("{} {} {}", lhs, op, rhs), spans, DimensionMismatch { left, right })
}

/// Creates a [`NotSquare`] error for the given matrix.
pub(crate) fn not_square(matrix: &impl Display, rows: usize, cols: usize) -> Error {
    let source = matrix.to_string();
    let spans = vec![0..source.chars().count()];
    Error::new(source, spans, NotSquare { rows, cols })
}
