//! Dense fixed-size matrix
//!
//! `Matrix<T, R, C>` owns exactly `R * C` elements in one contiguous row-major
//! buffer. Rows and columns are const generics, so every shape check between
//! matrices and expressions happens at compile time. Element access is 1-based
//! and always bounds-checked.

use crate::error::{MatrixError, Result};
use crate::traits::{Element, MatrixExpr, MatrixExprMut};
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix with compile-time dimensions
///
/// Storage lives on the heap, so large systems (hundreds of rows) do not blow the
/// stack. Cloning deep-copies the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    /// Row-major elements, always `R * C` long
    data: Vec<T>,
}

impl<T: Element, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a zero-filled matrix
    pub fn zeros() -> Self {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be non-zero") }
        Self {
            data: vec![T::zero(); R * C],
        }
    }

    /// Create a matrix from a nested row literal
    ///
    /// The literal's shape is part of its type, so a ragged or wrongly sized
    /// literal does not compile.
    pub fn new(rows: [[T; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be non-zero") }
        Self {
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Create a matrix from a row-major buffer
    pub fn from_row_major(data: Vec<T>) -> Result<Self> {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be non-zero") }
        if data.len() != R * C {
            return Err(MatrixError::LengthMismatch {
                expected: R * C,
                got: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Create a matrix by calling `f(row, col)` for every 1-based position
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be non-zero") }
        let mut data = Vec::with_capacity(R * C);
        for row in 1..=R {
            for col in 1..=C {
                data.push(f(row, col));
            }
        }
        Self { data }
    }

    /// Evaluate a matrix-like expression into fresh owned storage
    ///
    /// This is where a lazy expression becomes concrete data: every cell is
    /// visited once in row-major order and the expression tree is walked for it.
    /// The expression must have exactly this matrix's shape (checked at compile
    /// time):
    ///
    /// ```compile_fail
    /// use math_audio_matrix::Matrix;
    ///
    /// let m = Matrix::<i32, 3, 2>::zeros();
    /// let _ = Matrix::<i32, 2, 2>::from_expr(&m);
    /// ```
    pub fn from_expr<E>(expr: E) -> Result<Self>
    where
        E: MatrixExpr<Elem = T>,
    {
        const {
            assert!(
                E::ROWS == R && E::COLS == C,
                "expression shape does not match the target matrix"
            )
        }
        let mut data = Vec::with_capacity(R * C);
        for row in 1..=R {
            for col in 1..=C {
                data.push(expr.at(row, col)?);
            }
        }
        Ok(Self { data })
    }

    /// Number of rows
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Shape as `(rows, cols)`
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    #[inline]
    fn offset(row: usize, col: usize) -> Result<usize> {
        if row == 0 || row > R || col == 0 || col > C {
            return Err(MatrixError::out_of_range(row, col, R, C));
        }
        Ok((row - 1) * C + (col - 1))
    }

    /// Element at (`row`, `col`), 1-based
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<T> {
        Self::offset(row, col).map(|idx| self.data[idx])
    }

    /// Mutable reference to the element at (`row`, `col`), 1-based
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = Self::offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Reference to the element at (`row`, `col`), `None` when out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        Self::offset(row, col).ok().map(|idx| &self.data[idx])
    }

    /// Swap two rows of the underlying storage
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        for row in [a, b] {
            if row == 0 || row > R {
                return Err(MatrixError::RowOutOfRange { row, rows: R });
            }
        }
        if a != b {
            for col in 0..C {
                self.data.swap((a - 1) * C + col, (b - 1) * C + col);
            }
        }
        Ok(())
    }

    /// Iterate over elements in row-major order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over elements in row-major order
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Row-major view of the storage
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the storage
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix, returning its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Matrix product `self * rhs`
    ///
    /// Unlike the element-wise operators this is computed eagerly.
    pub fn dot<const K: usize>(&self, rhs: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut result = Matrix::<T, R, K>::zeros();
        for i in 0..R {
            for k in 0..C {
                let a_ik = self.data[i * C + k];
                for j in 0..K {
                    result.data[i * K + j] += a_ik * rhs.data[k * K + j];
                }
            }
        }
        result
    }
}

impl<T: Element, const N: usize> Matrix<T, N, N> {
    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }
}

/// Identity matrix of size `N`
pub fn identity<T: Element, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}

impl<T: Element, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}

impl<T: Element, const R: usize, const C: usize> MatrixExpr for Matrix<T, R, C> {
    type Elem = T;
    const ROWS: usize = R;
    const COLS: usize = C;

    #[inline]
    fn at(&self, row: usize, col: usize) -> Result<T> {
        Matrix::at(self, row, col)
    }
}

impl<T: Element, const R: usize, const C: usize> MatrixExprMut for Matrix<T, R, C> {
    #[inline]
    fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        Matrix::at_mut(self, row, col)
    }
}

impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    /// 1-based indexing; panics when out of range
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match Self::offset(row, col) {
            Ok(idx) => &self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match Self::offset(row, col) {
            Ok(idx) => &mut self.data[idx],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const R: usize, const C: usize> IntoIterator for Matrix<T, R, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Element + fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(C).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: Element + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: Element + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_literal_is_row_major() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

        let mut expected = 1;
        for row in 1..=3 {
            for col in 1..=3 {
                assert_eq!(m.at(row, col).unwrap(), expected);
                expected += 1;
            }
        }
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_zero_initialised() {
        let m = Matrix::<usize, 10, 10>::default();
        assert!(m.iter().all(|&v| v == 0));

        let f = Matrix::<f32, 3, 7>::zeros();
        assert!(f.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_clone_is_deep() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        let mut copy = m.clone();
        *copy.at_mut(1, 1).unwrap() = 42;

        assert_eq!(m.at(1, 1).unwrap(), 1);
        assert_eq!(copy.at(1, 1).unwrap(), 42);
    }

    #[test]
    fn test_modify_through_at_mut() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        *m.at_mut(2, 1).unwrap() = 9;
        assert_eq!(m.at(2, 1).unwrap(), 9);

        m[(1, 2)] = 5;
        assert_eq!(m[(1, 2)], 5);
    }

    #[test]
    fn test_out_of_range() {
        let mut m = Matrix::<i32, 2, 3>::zeros();

        for (row, col) in [(0, 1), (1, 0), (3, 1), (1, 4), (0, 0)] {
            let err = m.at(row, col).unwrap_err();
            assert_eq!(
                err,
                MatrixError::IndexOutOfRange {
                    row,
                    col,
                    rows: 2,
                    cols: 3
                }
            );
            assert!(m.at_mut(row, col).is_err());
            assert!(m.get(row, col).is_none());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let m = Matrix::<i32, 2, 2>::zeros();
        let _ = m[(0, 1)];
    }

    #[test]
    fn test_from_row_major() {
        let m = Matrix::<i32, 2, 2>::from_row_major(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m, Matrix::new([[1, 2], [3, 4]]));

        let err = Matrix::<i32, 2, 2>::from_row_major(vec![1, 2, 3]).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_from_fn_is_one_based() {
        let m = Matrix::<usize, 2, 3>::from_fn(|row, col| row * 10 + col);
        assert_eq!(m, Matrix::new([[11, 12, 13], [21, 22, 23]]));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut m = Matrix::<i32, 25, 50>::zeros();
        for (i, value) in m.iter_mut().enumerate() {
            *value = i as i32;
        }

        let first: Vec<i32> = m.iter().copied().collect();
        let second: Vec<i32> = (&m).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(m.at(2, 1).unwrap(), 50);
        assert_eq!(m.into_vec().len(), 25 * 50);
    }

    #[test]
    fn test_identity() {
        let id: Matrix<f64, 3, 3> = identity();
        for row in 1..=3 {
            for col in 1..=3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(id.at(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_swap_rows() {
        let mut m = Matrix::new([[1, 2], [3, 4], [5, 6]]);
        m.swap_rows(1, 3).unwrap();
        assert_eq!(m, Matrix::new([[5, 6], [3, 4], [1, 2]]));
        assert!(m.swap_rows(0, 2).unwrap_err().is_index_error());
    }

    #[test]
    fn test_dot() {
        let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let inv = Matrix::new([[0.6, -0.7], [-0.2, 0.4]]);
        assert_relative_eq!(a.dot(&inv), identity::<f64, 2>(), epsilon = 1e-12);

        let x = Matrix::new([[1.0], [2.0]]);
        assert_eq!(a.dot(&x), Matrix::new([[18.0], [14.0]]));
    }

    #[test]
    fn test_display() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "1 2\n3 4");
    }
}
