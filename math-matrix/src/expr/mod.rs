//! Lazy element-wise expressions
//!
//! Arithmetic operators on matrix-like values build an [`ElementWise`] tree instead
//! of computing a result. Nothing is evaluated until the tree is materialized with
//! [`Matrix::from_expr`](crate::Matrix::from_expr) or
//! [`MatrixExpr::evaluate`](crate::MatrixExpr::evaluate), or until `at` is called on
//! it directly.
//!
//! ```
//! use math_audio_matrix::{Matrix, MatrixExpr};
//!
//! let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! let b = Matrix::new([[4.0, 3.0], [2.0, 1.0]]);
//!
//! let expr = (&a + &b) * 0.5;
//! assert_eq!(expr.at(1, 1).unwrap(), 2.5);
//!
//! let mean: Matrix<f64, 2, 2> = expr.evaluate().unwrap();
//! assert!(mean.iter().all(|&v| v == 2.5));
//! ```

mod elementwise;
mod ops;

pub use elementwise::{BinaryOp, ElementWise};
