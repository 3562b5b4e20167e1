//! Element-wise binary expression node
//!
//! An [`ElementWise`] node stores its two operands and an operation tag and owns
//! no element storage: `at(i, j)` evaluates both operands at (i, j) and combines
//! the results. Operands are whatever [`IntoExpr`](crate::IntoExpr) produced: a
//! `&Matrix` stays a borrow (tied to the node by its lifetime), while temporaries
//! such as wrapped scalars or nested nodes are moved in by value.

use crate::error::{MatrixError, Result};
use crate::traits::{Element, MatrixExpr, is_unit};

/// Operation applied by an [`ElementWise`] node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `a + b`
    Plus,
    /// `a - b`
    Minus,
    /// `a * b`, element by element
    ElementwiseMultiply,
    /// `a / b`, element by element
    ElementwiseDivide,
}

impl BinaryOp {
    /// Combine two elements
    ///
    /// Division by zero behaves as `T`'s own division does.
    #[inline]
    pub fn apply<T: Element>(self, lhs: T, rhs: T) -> T {
        match self {
            BinaryOp::Plus => lhs + rhs,
            BinaryOp::Minus => lhs - rhs,
            BinaryOp::ElementwiseMultiply => lhs * rhs,
            BinaryOp::ElementwiseDivide => lhs / rhs,
        }
    }

    /// Operator symbol
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Plus => '+',
            BinaryOp::Minus => '-',
            BinaryOp::ElementwiseMultiply => '*',
            BinaryOp::ElementwiseDivide => '/',
        }
    }
}

/// Check that two shapes are equal or that one of them broadcasts
pub(crate) const fn broadcast_compatible(
    lhs_rows: usize,
    lhs_cols: usize,
    rhs_rows: usize,
    rhs_cols: usize,
) -> bool {
    (lhs_rows == rhs_rows && lhs_cols == rhs_cols)
        || is_unit(lhs_rows, lhs_cols)
        || is_unit(rhs_rows, rhs_cols)
}

/// Index into an operand dimension of length `len`, pinned to 1 when it broadcasts
#[inline]
const fn broadcast_index(len: usize, index: usize) -> usize {
    if len == 1 { 1 } else { index }
}

/// Lazy `lhs <op> rhs`
#[derive(Debug, Clone, Copy)]
pub struct ElementWise<L, R> {
    lhs: L,
    rhs: R,
    op: BinaryOp,
}

impl<L, R> ElementWise<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    /// Build a node
    ///
    /// Both operands must have the same shape, or one of them must be 1x1. A
    /// violation is reported when the crate using this node is compiled:
    ///
    /// ```compile_fail
    /// use math_audio_matrix::Matrix;
    ///
    /// let a = Matrix::<f64, 2, 3>::zeros();
    /// let b = Matrix::<f64, 3, 2>::zeros();
    /// let _ = &a + &b;
    /// ```
    pub fn new(lhs: L, rhs: R, op: BinaryOp) -> Self {
        const {
            assert!(
                broadcast_compatible(L::ROWS, L::COLS, R::ROWS, R::COLS),
                "element-wise operands must have equal shapes or one of them must be 1x1"
            )
        }
        Self { lhs, rhs, op }
    }

    /// Operation tag
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Left operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    /// Split the node back into its operands
    pub fn into_parts(self) -> (L, R, BinaryOp) {
        (self.lhs, self.rhs, self.op)
    }
}

impl<L, R> MatrixExpr for ElementWise<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    type Elem = L::Elem;

    // A 1x1 left operand broadcasts, so the right side then carries the shape.
    const ROWS: usize = if is_unit(L::ROWS, L::COLS) {
        R::ROWS
    } else {
        L::ROWS
    };
    const COLS: usize = if is_unit(L::ROWS, L::COLS) {
        R::COLS
    } else {
        L::COLS
    };

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        if !self.contains(row, col) {
            return Err(MatrixError::out_of_range(row, col, Self::ROWS, Self::COLS));
        }
        let lhs = self.lhs.at(broadcast_index(L::ROWS, row), broadcast_index(L::COLS, col))?;
        let rhs = self.rhs.at(broadcast_index(R::ROWS, row), broadcast_index(R::COLS, col))?;
        Ok(self.op.apply(lhs, rhs))
    }
}
