//! Operator overloads building [`ElementWise`] nodes
//!
//! `+ - * /` are implemented for every matrix-like type of the crate. The right
//! operand goes through [`IntoExpr`] first, so it may be another matrix-like value
//! or a bare scalar. A scalar on the left (`2.0 * &m`) is handled by dedicated
//! impls on the primitive types. No operator evaluates anything: the result is
//! always a new node.

use super::elementwise::{BinaryOp, ElementWise};
use crate::dense::Matrix;
use crate::scalar::Scalar;
use crate::traits::{Element, IntoExpr, MatrixExpr};
use crate::views::{Augment, RowSwapper, Transpose};
use std::ops::{Add, Div, Mul, Sub};

macro_rules! impl_expr_ops {
    (@op [$($param:tt)*] $ty:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<$($param)* Rhs> $trait<Rhs> for $ty
        where
            $ty: MatrixExpr,
            Rhs: IntoExpr,
            Rhs::Expr: MatrixExpr<Elem = <$ty as MatrixExpr>::Elem>,
        {
            type Output = ElementWise<$ty, Rhs::Expr>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                ElementWise::new(self, rhs.into_expr(), BinaryOp::$op)
            }
        }
    };
    ($gens:tt $ty:ty) => {
        impl_expr_ops!(@op $gens $ty, Add, add, Plus);
        impl_expr_ops!(@op $gens $ty, Sub, sub, Minus);
        impl_expr_ops!(@op $gens $ty, Mul, mul, ElementwiseMultiply);
        impl_expr_ops!(@op $gens $ty, Div, div, ElementwiseDivide);
    };
}

impl_expr_ops!(['a, T: Element, const R: usize, const C: usize,] &'a Matrix<T, R, C>);
impl_expr_ops!([T: Element, const R: usize, const C: usize,] Matrix<T, R, C>);
impl_expr_ops!([T: Element,] Scalar<T>);
impl_expr_ops!([L, Rt,] ElementWise<L, Rt>);
impl_expr_ops!(['a, L, Rt,] &'a ElementWise<L, Rt>);
impl_expr_ops!([E,] Transpose<E>);
impl_expr_ops!(['a, E,] &'a Transpose<E>);
impl_expr_ops!([L, Rt,] Augment<L, Rt>);
impl_expr_ops!(['a, L, Rt,] &'a Augment<L, Rt>);
impl_expr_ops!([E,] RowSwapper<E>);
impl_expr_ops!(['a, E,] &'a RowSwapper<E>);

macro_rules! impl_scalar_lhs_ops {
    (@op [$($param:tt)*] $ty:ty, $scalar:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<$($param)*> $trait<$ty> for $scalar
        where
            $ty: MatrixExpr<Elem = $scalar>,
        {
            type Output = ElementWise<Scalar<$scalar>, $ty>;

            #[inline]
            fn $method(self, rhs: $ty) -> Self::Output {
                ElementWise::new(Scalar::new(self), rhs, BinaryOp::$op)
            }
        }
    };
    (@scalar $gens:tt $ty:ty, $scalar:ty) => {
        impl_scalar_lhs_ops!(@op $gens $ty, $scalar, Add, add, Plus);
        impl_scalar_lhs_ops!(@op $gens $ty, $scalar, Sub, sub, Minus);
        impl_scalar_lhs_ops!(@op $gens $ty, $scalar, Mul, mul, ElementwiseMultiply);
        impl_scalar_lhs_ops!(@op $gens $ty, $scalar, Div, div, ElementwiseDivide);
    };
    ($($gens:tt $ty:ty);+ $(;)?) => {
        $(
            impl_scalar_lhs_ops!(@scalar $gens $ty, i8);
            impl_scalar_lhs_ops!(@scalar $gens $ty, i16);
            impl_scalar_lhs_ops!(@scalar $gens $ty, i32);
            impl_scalar_lhs_ops!(@scalar $gens $ty, i64);
            impl_scalar_lhs_ops!(@scalar $gens $ty, i128);
            impl_scalar_lhs_ops!(@scalar $gens $ty, isize);
            impl_scalar_lhs_ops!(@scalar $gens $ty, u8);
            impl_scalar_lhs_ops!(@scalar $gens $ty, u16);
            impl_scalar_lhs_ops!(@scalar $gens $ty, u32);
            impl_scalar_lhs_ops!(@scalar $gens $ty, u64);
            impl_scalar_lhs_ops!(@scalar $gens $ty, u128);
            impl_scalar_lhs_ops!(@scalar $gens $ty, usize);
            impl_scalar_lhs_ops!(@scalar $gens $ty, f32);
            impl_scalar_lhs_ops!(@scalar $gens $ty, f64);
        )+
    };
}

impl_scalar_lhs_ops!(
    ['a, T: Element, const R: usize, const C: usize,] &'a Matrix<T, R, C>;
    [T: Element, const R: usize, const C: usize,] Matrix<T, R, C>;
    [T: Element,] Scalar<T>;
    [L, Rt,] ElementWise<L, Rt>;
    ['a, L, Rt,] &'a ElementWise<L, Rt>;
    [E,] Transpose<E>;
    ['a, E,] &'a Transpose<E>;
    [L, Rt,] Augment<L, Rt>;
    ['a, L, Rt,] &'a Augment<L, Rt>;
    [E,] RowSwapper<E>;
    ['a, E,] &'a RowSwapper<E>;
);
