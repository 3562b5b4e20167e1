//! Conversions between [`Matrix`] and `ndarray` arrays
//!
//! `ndarray` indices are 0-based; the conversions take care of the shift.

use crate::dense::Matrix;
use crate::error::{MatrixError, Result};
use crate::traits::Element;
use ndarray::{Array2, ArrayBase, Data, Ix2};

impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Copy into an owned `ndarray` array
    pub fn to_array2(&self) -> Array2<T> {
        Array2::from_shape_fn((R, C), |(i, j)| self.as_slice()[i * C + j])
    }

    /// Copy from a 2-D `ndarray` array of the same shape
    pub fn from_array2<S>(array: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = T>,
    {
        if array.dim() != (R, C) {
            return Err(MatrixError::ShapeMismatch {
                expected: (R, C),
                got: array.dim(),
            });
        }
        // Logical order, whatever the memory layout of the array
        Self::from_row_major(array.iter().copied().collect())
    }
}

impl<T: Element, const R: usize, const C: usize> From<&Matrix<T, R, C>> for Array2<T> {
    fn from(matrix: &Matrix<T, R, C>) -> Self {
        matrix.to_array2()
    }
}

impl<T, S, const R: usize, const C: usize> TryFrom<&ArrayBase<S, Ix2>> for Matrix<T, R, C>
where
    T: Element,
    S: Data<Elem = T>,
{
    type Error = MatrixError;

    fn try_from(array: &ArrayBase<S, Ix2>) -> Result<Self> {
        Self::from_array2(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, transpose};
    use ndarray::{Array1, array};

    #[test]
    fn test_to_array2() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let a = Array2::from(&m);

        assert_eq!(a.dim(), (2, 3));
        assert_eq!(a[[0, 0]], m[(1, 1)]);
        assert_eq!(a[[1, 2]], m[(2, 3)]);
    }

    #[test]
    fn test_from_array2() {
        let a = array![[1, 2], [3, 4], [5, 6]];
        let m = Matrix::<i32, 3, 2>::try_from(&a).unwrap();
        assert_eq!(m, Matrix::new([[1, 2], [3, 4], [5, 6]]));
    }

    #[test]
    fn test_from_transposed_layout() {
        let a = array![[1, 2, 3], [4, 5, 6]];
        let t = a.t();
        let m = Matrix::<i32, 3, 2>::from_array2(&t).unwrap();

        let expected = Matrix::from_expr(transpose(&Matrix::new([[1, 2, 3], [4, 5, 6]]))).unwrap();
        assert_eq!(m, expected);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let err = Matrix::<f64, 2, 3>::try_from(&a).unwrap_err();

        assert!(err.is_shape_error());
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                expected: (2, 3),
                got: (2, 2)
            }
        );
    }

    #[test]
    fn test_residual_with_ndarray() {
        let a = Matrix::new([[4.0, 1.0], [1.0, 3.0]]);
        let b = Matrix::new([[1.0], [2.0]]);
        let x = solve(&a, &b).unwrap();

        let ax = a.to_array2().dot(&x.to_array2());
        let residual: Array1<f64> = (&ax - &b.to_array2()).column(0).to_owned();
        assert!(residual.iter().all(|r| r.abs() < 1e-12));
    }
}
