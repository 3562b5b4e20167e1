//! Core traits for lazy matrix expressions
//!
//! This module defines the abstractions shared by every matrix-like type:
//! - [`Element`]: Trait for the arithmetic scalar types a matrix can hold
//! - [`MatrixExpr`]: The read contract (`rows`, `cols`, `at`) implemented by dense
//!   matrices, wrapped scalars, expression nodes and views
//! - [`MatrixExprMut`]: Mutable element access, used by in-place elimination
//! - [`IntoExpr`]: The "wrap-if-scalar" conversion applied to operator operands
//!
//! All indices are 1-based: valid positions are `1..=ROWS` and `1..=COLS`.

use crate::dense::Matrix;
use crate::error::Result;
use num_traits::{Num, NumAssign};
use std::fmt::Debug;

/// Trait for arithmetic element types.
///
/// Implemented automatically for every primitive integer and floating point type.
/// Operations that need fractional division (the linear solver) additionally
/// require [`num_traits::Float`], which rules out integral types at compile time.
pub trait Element: Num + NumAssign + Copy + PartialOrd + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Num + NumAssign + Copy + PartialOrd + Debug + Send + Sync + 'static {}

/// Trait for matrix-like objects with a static shape.
///
/// This abstraction lets dense matrices, wrapped scalars, element-wise expression
/// nodes and zero-copy views be composed and evaluated interchangeably. Dispatch is
/// fully static: expression trees are nested generic types, so evaluating an element
/// is a chain of inlined calls.
///
/// Shapes are associated constants. Constructors of composite expressions assert
/// their shape invariants against these constants, which turns a mismatch into a
/// build failure instead of a runtime error.
pub trait MatrixExpr {
    /// Element type produced by [`MatrixExpr::at`]
    type Elem: Element;

    /// Number of rows
    const ROWS: usize;

    /// Number of columns
    const COLS: usize;

    /// Evaluate the element at (`row`, `col`), 1-based.
    ///
    /// Fails with [`crate::MatrixError::IndexOutOfRange`] when the position lies
    /// outside the underlying storage. Views forward their (remapped) indices, so
    /// they inherit this check from the matrices they wrap.
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem>;

    /// Number of rows in the expression
    #[inline]
    fn rows(&self) -> usize {
        Self::ROWS
    }

    /// Number of columns in the expression
    #[inline]
    fn cols(&self) -> usize {
        Self::COLS
    }

    /// Check whether (`row`, `col`) is a valid 1-based position
    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        (1..=Self::ROWS).contains(&row) && (1..=Self::COLS).contains(&col)
    }

    /// Materialize the expression into an owned matrix.
    ///
    /// The target shape must equal the expression shape; this is checked at
    /// compile time.
    fn evaluate<const R: usize, const C: usize>(&self) -> Result<Matrix<Self::Elem, R, C>> {
        Matrix::from_expr(self)
    }
}

/// Trait for matrix-like objects whose elements can be written in place.
pub trait MatrixExprMut: MatrixExpr {
    /// Mutable reference to the element at (`row`, `col`), 1-based
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Elem>;

    /// Overwrite the element at (`row`, `col`)
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Self::Elem) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }
}

// A borrowed expression is an expression: this is how lvalue operands are kept by
// reference inside expression nodes and views.
impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    type Elem = E::Elem;
    const ROWS: usize = E::ROWS;
    const COLS: usize = E::COLS;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        (**self).at(row, col)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &mut E {
    type Elem = E::Elem;
    const ROWS: usize = E::ROWS;
    const COLS: usize = E::COLS;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        (**self).at(row, col)
    }
}

impl<E: MatrixExprMut + ?Sized> MatrixExprMut for &mut E {
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Elem> {
        (**self).at_mut(row, col)
    }
}

/// Conversion applied to every operand of an expression operator.
///
/// Matrix-like values pass through unchanged (a `&Matrix` stays a borrow, an owned
/// temporary is moved into the node); bare scalars are wrapped into a
/// [`crate::Scalar`] so they take part in the expression as a broadcast 1x1 matrix.
pub trait IntoExpr {
    /// The matrix-like type stored in the expression node
    type Expr: MatrixExpr;

    /// Perform the conversion
    fn into_expr(self) -> Self::Expr;
}

impl<E: MatrixExpr> IntoExpr for E {
    type Expr = E;

    #[inline]
    fn into_expr(self) -> E {
        self
    }
}

/// 1x1 shapes broadcast against any shape
#[inline]
pub(crate) const fn is_unit(rows: usize, cols: usize) -> bool {
    rows == 1 && cols == 1
}
