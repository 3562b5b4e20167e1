//! Fixed-size matrices with lazy expressions and a Gaussian elimination solver
//!
//! This crate provides dense matrices whose dimensions are const generics, a set of
//! lazily evaluated expressions and views over them, and a direct solver for
//! square linear systems built on top of those views.
//!
//! # Features
//!
//! - **Dense Matrices**: `Matrix<T, R, C>`, row-major, 1-based bounds-checked access
//! - **Lazy Expressions**: element-wise `+ - * /` with scalar broadcast, evaluated on demand
//! - **Views**: transpose, column augmentation and row permutation without copies
//! - **Direct Solver**: Gaussian elimination with optional partial pivoting
//! - **Static Shapes**: shape mismatches between operands fail at compile time
//!
//! # Example
//!
//! ```
//! use math_audio_matrix::{Matrix, MatrixExpr, solve, transpose};
//!
//! let a = Matrix::new([[4.0, 1.0], [1.0, 3.0]]);
//! let b = Matrix::new([[1.0], [2.0]]);
//!
//! // Nothing is computed until the expression is evaluated
//! let sym: Matrix<f64, 2, 2> = ((&a + transpose(&a)) * 0.5).evaluate()?;
//! assert_eq!(sym, a);
//!
//! let x = solve(&a, &b)?;
//! let residual: Matrix<f64, 2, 1> = Matrix::from_expr(&a.dot(&x) - &b)?;
//! assert!(residual.iter().all(|r| r.abs() < 1e-12));
//! # Ok::<(), math_audio_matrix::MatrixError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod error;
pub mod expr;
pub mod interop;
pub mod scalar;
pub mod traits;
pub mod views;

// Re-export main types
pub use dense::{Matrix, identity};
pub use error::{MatrixError, Result};
pub use expr::{BinaryOp, ElementWise};
pub use scalar::Scalar;
pub use traits::{Element, IntoExpr, MatrixExpr, MatrixExprMut};

// Re-export views
pub use views::{Augment, RowSwapper, Transpose, augment, row_swapper, transpose};

// Re-export direct solvers
pub use direct::{
    Pivoting, SolveConfig, back_substitute, inverse, inverse_with, solve, solve_in_place,
    solve_in_place_with, solve_with, upper_triangularize, upper_triangularize_pivoted,
};
