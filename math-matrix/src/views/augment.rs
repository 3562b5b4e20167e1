//! Column augmentation view

use crate::error::{MatrixError, Result};
use crate::traits::{IntoExpr, MatrixExpr, MatrixExprMut};

/// Horizontal concatenation `[left | right]`
///
/// Columns `1..=left.cols()` read from `left`, the following ones from `right`
/// shifted by `left.cols()`. Both sides must have the same number of rows.
#[derive(Debug, Clone, Copy)]
pub struct Augment<L, R> {
    left: L,
    right: R,
}

impl<L, R> Augment<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    /// Join two expressions side by side
    ///
    /// Row counts must match:
    ///
    /// ```compile_fail
    /// use math_audio_matrix::{Matrix, augment};
    ///
    /// let a = Matrix::<f64, 2, 2>::zeros();
    /// let b = Matrix::<f64, 3, 1>::zeros();
    /// let _ = augment(&a, &b);
    /// ```
    pub fn new(left: L, right: R) -> Self {
        const {
            assert!(
                L::ROWS == R::ROWS,
                "augmented operands must have the same number of rows"
            )
        }
        Self { left, right }
    }

    /// Left block
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Right block
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Split the view back into its blocks
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> MatrixExpr for Augment<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    type Elem = L::Elem;
    const ROWS: usize = L::ROWS;
    const COLS: usize = L::COLS + R::COLS;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<Self::Elem> {
        if !self.contains(row, col) {
            return Err(MatrixError::out_of_range(row, col, Self::ROWS, Self::COLS));
        }
        if col > L::COLS {
            self.right.at(row, col - L::COLS)
        } else {
            self.left.at(row, col)
        }
    }
}

impl<L, R> MatrixExprMut for Augment<L, R>
where
    L: MatrixExprMut,
    R: MatrixExprMut<Elem = L::Elem>,
{
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut Self::Elem> {
        if !self.contains(row, col) {
            return Err(MatrixError::out_of_range(row, col, Self::ROWS, Self::COLS));
        }
        if col > L::COLS {
            self.right.at_mut(row, col - L::COLS)
        } else {
            self.left.at_mut(row, col)
        }
    }
}

/// Lazy `[left | right]`
///
/// Pass `&mut` operands to get a writable view over existing matrices.
///
/// ```
/// use math_audio_matrix::{Matrix, MatrixExpr, augment};
///
/// let a = Matrix::new([[1, 2], [4, 5]]);
/// let b = Matrix::new([[3], [6]]);
/// let ab: Matrix<i32, 2, 3> = augment(&a, &b).evaluate().unwrap();
/// assert_eq!(ab.as_slice(), &[1, 2, 3, 4, 5, 6]);
/// ```
pub fn augment<L, R>(left: L, right: R) -> Augment<L::Expr, R::Expr>
where
    L: IntoExpr,
    R: IntoExpr,
    R::Expr: MatrixExpr<Elem = <L::Expr as MatrixExpr>::Elem>,
{
    Augment::new(left.into_expr(), right.into_expr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, MatrixError};

    #[test]
    fn test_reads_left_then_right() {
        let a = Matrix::new([[1, 2], [4, 5]]);
        let b = Matrix::new([[3], [6]]);
        let aug = augment(&a, &b);

        assert_eq!((aug.rows(), aug.cols()), (2, 3));
        let mut expected = 1;
        for row in 1..=aug.rows() {
            for col in 1..=aug.cols() {
                assert_eq!(aug.at(row, col).unwrap(), expected);
                expected += 1;
            }
        }
    }

    #[test]
    fn test_column_routing() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::new([[7.0, 8.0], [9.0, 10.0]]);
        let aug = augment(&a, &b);

        for row in 1..=2 {
            for col in 1..=5 {
                let expected = if col <= 3 {
                    a.at(row, col).unwrap()
                } else {
                    b.at(row, col - 3).unwrap()
                };
                assert_eq!(aug.at(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_writes_reach_the_blocks() {
        let mut a = Matrix::<f64, 2, 2>::zeros();
        let mut b = Matrix::<f64, 2, 1>::zeros();
        {
            let mut aug = augment(&mut a, &mut b);
            aug.set(1, 1, 1.0).unwrap();
            *aug.at_mut(2, 3).unwrap() = 5.0;
        }
        assert_eq!(a.at(1, 1).unwrap(), 1.0);
        assert_eq!(b.at(2, 1).unwrap(), 5.0);
    }

    #[test]
    fn test_write_out_of_range() {
        let mut a = Matrix::<f64, 2, 2>::zeros();
        let mut b = Matrix::<f64, 2, 1>::zeros();
        let mut aug = augment(&mut a, &mut b);

        assert!(aug.at_mut(1, 4).unwrap_err().is_index_error());
        assert!(aug.set(3, 1, 1.0).unwrap_err().is_index_error());
    }

    #[test]
    fn test_out_of_range() {
        let a = Matrix::new([[1, 2], [3, 4]]);
        let b = Matrix::new([[5], [6]]);
        let aug = augment(&a, &b);

        assert_eq!(
            aug.at(1, 4).unwrap_err(),
            MatrixError::IndexOutOfRange {
                row: 1,
                col: 4,
                rows: 2,
                cols: 3
            }
        );
        assert!(aug.at(0, 1).unwrap_err().is_index_error());
        assert!(aug.at(1, 0).unwrap_err().is_index_error());
    }

    #[test]
    fn test_owned_blocks() {
        let aug = augment(Matrix::new([[1, 2]]), 9_i32);
        assert_eq!(aug.cols(), 3);
        assert_eq!(aug.at(1, 3).unwrap(), 9);
        // The scalar block ignores indices, the view does not
        for (row, col) in [(1, 4), (1, 100), (7, 3), (2, 1)] {
            assert!(aug.at(row, col).unwrap_err().is_index_error());
        }
        let (left, right) = aug.into_parts();
        assert_eq!(left.at(1, 2).unwrap(), 2);
        assert_eq!(right.value(), 9);
    }
}
