//! Vectors and matrices whose elements are symbolic expressions.
//!
//! Arithmetic builds new elements with the smart constructors of [`Expr`], so results are not
//! simplified until [`Vector::simplify`] or [`Matrix::simplify`] is called. Both simplify their
//! elements in parallel.
//!
//! ```
//! use symalg_core::Expr;
//! use symalg_linear::Vector;
//!
//! let v = Vector::new(vec![Expr::var("x"), Expr::int(0), Expr::int(0)]);
//! let w = Vector::new(vec![Expr::int(0), Expr::var("y"), Expr::int(0)]);
//! let cross = v.cross(&w).unwrap().simplify().unwrap();
//! assert_eq!(cross.to_string(), "[0, 0, xy]");
//! ```
//!
//! [`Expr`]: symalg_core::Expr

pub mod error;
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
