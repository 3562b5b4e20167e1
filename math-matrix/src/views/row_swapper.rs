//! Logical row permutation view
//!
//! A [`RowSwapper`] keeps a table mapping each logical row to a physical row of the
//! wrapped object. Swapping two rows only exchanges two table entries, so row
//! exchanges during pivoting cost O(1) regardless of the row length.

use crate::error::{MatrixError, Result};
use crate::traits::{IntoExpr, MatrixExpr, MatrixExprMut};

/// Table entry of a row that has never been swapped
const UNSET: usize = 0;

/// Row-permuted view over a matrix-like value
#[derive(Debug, Clone)]
pub struct RowSwapper<E> {
    inner: E,
    /// Logical row `i` (1-based) reads physical row `table[i - 1]`, `UNSET` meaning `i`
    table: Vec<usize>,
}

impl<E: MatrixExpr> RowSwapper<E> {
    /// Wrap an expression with the identity permutation
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            table: vec![UNSET; E::ROWS],
        }
    }

    /// Exchange logical rows `a` and `b`, 1-based
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        for row in [a, b] {
            if row == 0 || row > E::ROWS {
                return Err(MatrixError::RowOutOfRange { row, rows: E::ROWS });
            }
        }
        for row in [a, b] {
            if self.table[row - 1] == UNSET {
                self.table[row - 1] = row;
            }
        }
        self.table.swap(a - 1, b - 1);
        Ok(())
    }

    /// Physical row currently shown at logical `row`, `None` when out of range
    pub fn physical_row(&self, row: usize) -> Option<usize> {
        if row == 0 || row > E::ROWS {
            return None;
        }
        match self.table[row - 1] {
            UNSET => Some(row),
            physical => Some(physical),
        }
    }

    /// Current permutation as physical rows, in logical order
    pub fn permutation(&self) -> Vec<usize> {
        (1..=E::ROWS)
            .map(|row| self.physical_row(row).unwrap_or(row))
            .collect()
    }

    /// Wrapped expression, unpermuted
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Unwrap the view, dropping the permutation
    pub fn into_inner(self) -> E {
        self.inner
    }

    #[inline]
    fn resolve(&self, row: usize, col: usize) -> Result<usize> {
        if col == 0 || col > E::COLS {
            return Err(MatrixError::out_of_range(row, col, E::ROWS, E::COLS));
        }
        self.physical_row(row)
            .ok_or_else(|| MatrixError::out_of_range(row, col, E::ROWS, E::COLS))
    }
}

impl<E: MatrixExpr> MatrixExpr for RowSwapper<E> {
    type Elem = E::Elem;
    const ROWS: usize = E::ROWS;
    const COLS: usize = E::COLS;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        let physical = self.resolve(row, col)?;
        self.inner.at(physical, col)
    }
}

impl<E: MatrixExprMut> MatrixExprMut for RowSwapper<E> {
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Elem> {
        let physical = self.resolve(row, col)?;
        self.inner.at_mut(physical, col)
    }
}

/// Row-permutable view over a matrix-like value
pub fn row_swapper<E: IntoExpr>(expr: E) -> RowSwapper<E::Expr> {
    RowSwapper::new(expr.into_expr())
}
