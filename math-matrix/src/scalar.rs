//! Scalar wrapper
//!
//! [`Scalar`] adapts a bare arithmetic value to the [`MatrixExpr`] contract as a
//! 1x1 matrix whose `at` ignores its indices. This is what makes `&m * 2.0` and
//! `2.0 * &m` broadcast the scalar over every element of `m`.

use crate::error::Result;
use crate::traits::{Element, IntoExpr, MatrixExpr};

/// A single value seen as a broadcast 1x1 matrix
///
/// Immutable once built. There is deliberately no `Default`: a wrapper without a
/// value has no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar<T> {
    value: T,
}

impl<T: Element> Scalar<T> {
    /// Wrap a value
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// The wrapped value
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Element> From<T> for Scalar<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Element> MatrixExpr for Scalar<T> {
    type Elem = T;
    const ROWS: usize = 1;
    const COLS: usize = 1;

    /// Returns the wrapped value for any index pair
    #[inline]
    fn at(&self, _row: usize, _col: usize) -> Result<T> {
        Ok(self.value)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoExpr for $t {
                type Expr = Scalar<$t>;

                #[inline]
                fn into_expr(self) -> Scalar<$t> {
                    Scalar::new(self)
                }
            }

            impl From<Scalar<$t>> for $t {
                #[inline]
                fn from(scalar: Scalar<$t>) -> $t {
                    scalar.value
                }
            }
        )*
    };
}

impl_scalar_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_from_value() {
        let s: Scalar<i32> = Scalar::from(3);
        assert_eq!(s.value(), 3);
        assert_eq!(i32::from(s), 3);
    }

    #[test]
    fn test_any_index_returns_value() {
        let s = Scalar::new(-17_i64);
        for (row, col) in [(0, 0), (1, 1), (5, 9), (usize::MAX, 42)] {
            assert_eq!(s.at(row, col).unwrap(), -17);
        }
    }

    #[test]
    fn test_reports_unit_shape() {
        let s = Scalar::new(2.5_f64);
        assert_eq!((s.rows(), s.cols()), (1, 1));
    }

    #[test]
    fn test_copy_keeps_value() {
        let s = Scalar::new(3_u8);
        let t = s;
        assert_eq!(t.value(), s.value());
    }

    #[test]
    fn test_into_expr_wraps() {
        let wrapped = 1.5_f32.into_expr();
        assert_eq!(wrapped, Scalar::new(1.5_f32));
        assert_eq!(f32::from(wrapped), 1.5);
    }
}
