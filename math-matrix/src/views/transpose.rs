//! Transpose view

use crate::error::{MatrixError, Result};
use crate::traits::{IntoExpr, MatrixExpr};

/// Read-only transposed view: `at(i, j)` reads `inner.at(j, i)`
#[derive(Debug, Clone, Copy)]
pub struct Transpose<E> {
    inner: E,
}

impl<E: MatrixExpr> Transpose<E> {
    /// Wrap an expression
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// The wrapped expression
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap the view
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: MatrixExpr> MatrixExpr for Transpose<E> {
    type Elem = E::Elem;
    const ROWS: usize = E::COLS;
    const COLS: usize = E::ROWS;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        if !self.contains(row, col) {
            return Err(MatrixError::out_of_range(row, col, Self::ROWS, Self::COLS));
        }
        self.inner.at(col, row)
    }
}

/// Lazy transpose of a matrix-like value
///
/// ```
/// use math_audio_matrix::{Matrix, MatrixExpr, transpose};
///
/// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
/// let t: Matrix<i32, 3, 2> = transpose(&m).evaluate().unwrap();
/// assert_eq!(t, Matrix::new([[1, 4], [2, 5], [3, 6]]));
/// ```
pub fn transpose<E: IntoExpr>(expr: E) -> Transpose<E::Expr> {
    Transpose::new(expr.into_expr())
}
