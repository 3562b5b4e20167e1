//! Gaussian elimination solver
//!
//! Solves `A x = b` for a square coefficient matrix and a single right-hand side.
//! The coefficient matrix and the right-hand side are joined by an [`Augment`]
//! view, reduced to upper-triangular form in place, and the unknowns are then
//! recovered by back-substitution.
//!
//! By default elimination is the classic naive scheme: no row exchanges and no
//! singularity detection, so a zero pivot yields `inf`/`NaN` in the solution.
//! Both behaviours can be hardened through [`SolveConfig`].
//!
//! [`Augment`]: crate::Augment

use crate::dense::Matrix;
use crate::error::{MatrixError, Result};
use crate::traits::{Element, MatrixExpr, MatrixExprMut};
use crate::views::{RowSwapper, augment};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Row exchange strategy used during elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pivoting {
    /// Pivot on the diagonal as is
    #[default]
    #[serde(rename = "none")]
    None,
    /// Pick the largest magnitude entry of each column as pivot
    ///
    /// Rows are exchanged logically through a [`RowSwapper`], the underlying
    /// storage is never reordered.
    #[serde(rename = "partial")]
    Partial,
}

/// Gaussian elimination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Row exchange strategy
    #[serde(default)]
    pub pivoting: Pivoting,
    /// Reject pivots whose magnitude is at or below this value (None = no check)
    #[serde(default)]
    pub pivot_tolerance: Option<f64>,
    /// Log progress every N pivot columns (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::None,
            pivot_tolerance: None,
            print_interval: 0,
        }
    }
}

impl SolveConfig {
    /// Partial pivoting with a singularity check at `tolerance`
    pub fn robust(tolerance: f64) -> Self {
        Self {
            pivoting: Pivoting::Partial,
            pivot_tolerance: Some(tolerance),
            print_interval: 0,
        }
    }
}

fn check_pivot<T: Float>(pivot: T, column: usize, config: &SolveConfig) -> Result<()> {
    let Some(tolerance) = config.pivot_tolerance else {
        return Ok(());
    };
    let magnitude = pivot.abs().to_f64().unwrap_or(f64::NAN);
    // NaN pivots fail the comparison as well
    if magnitude > tolerance {
        Ok(())
    } else {
        Err(MatrixError::SingularPivot { column, magnitude })
    }
}

/// Subtract multiples of pivot row `k` from every row below it
fn eliminate_column<A>(aug: &mut A, k: usize) -> Result<()>
where
    A: MatrixExprMut,
    A::Elem: Float,
{
    let pivot = aug.at(k, k)?;
    for i in (k + 1)..=A::ROWS {
        let factor = aug.at(i, k)? / pivot;
        for j in k..=A::COLS {
            let update = factor * aug.at(k, j)?;
            *aug.at_mut(i, j)? -= update;
        }
    }
    Ok(())
}

fn log_progress(k: usize, n: usize, config: &SolveConfig) {
    if config.print_interval > 0 && k % config.print_interval == 0 {
        log::info!("Gaussian elimination: pivot column {}/{}", k, n);
    }
}

/// Reduce an `N x (N + 1)` augmented system to upper-triangular form in place
///
/// Rows are never exchanged, whatever `config.pivoting` says; use
/// [`upper_triangularize_pivoted`] for that. When `config.pivot_tolerance` is set,
/// a pivot at or below it aborts with [`MatrixError::SingularPivot`] and leaves
/// the system partially reduced.
pub fn upper_triangularize<A>(aug: &mut A, config: &SolveConfig) -> Result<()>
where
    A: MatrixExprMut,
    A::Elem: Float,
{
    const {
        assert!(
            A::COLS == A::ROWS + 1,
            "augmented system must have exactly one more column than rows"
        )
    }
    let n = A::ROWS;
    for k in 1..=n {
        check_pivot(aug.at(k, k)?, k, config)?;
        eliminate_column(aug, k)?;
        log_progress(k, n, config);
    }
    Ok(())
}

/// Upper-triangularize with partial pivoting
///
/// Before eliminating column `k`, the row holding the largest magnitude entry
/// of that column (from row `k` down) is swapped into position `k`. Swaps only
/// update the permutation of `aug`; read the reduced system back through the
/// same view.
pub fn upper_triangularize_pivoted<A>(aug: &mut RowSwapper<A>, config: &SolveConfig) -> Result<()>
where
    A: MatrixExprMut,
    A::Elem: Float,
{
    const {
        assert!(
            A::COLS == A::ROWS + 1,
            "augmented system must have exactly one more column than rows"
        )
    }
    let n = A::ROWS;
    for k in 1..=n {
        let mut best_row = k;
        let mut best = aug.at(k, k)?.abs();
        for i in (k + 1)..=n {
            let candidate = aug.at(i, k)?.abs();
            if candidate > best {
                best = candidate;
                best_row = i;
            }
        }
        if best_row != k {
            aug.swap_rows(k, best_row)?;
        }

        check_pivot(aug.at(k, k)?, k, config)?;
        eliminate_column(aug, k)?;
        log_progress(k, n, config);
    }
    Ok(())
}

/// Recover the solution of an upper-triangular `N x (N + 1)` augmented system
///
/// `x[N] = rhs[N] / A[N, N]`, then upward `x[i] = (rhs[i] - sum(A[i, j] x[j])) / A[i, i]`.
/// Entries below the diagonal are never read.
pub fn back_substitute<A, const N: usize>(aug: &A) -> Result<Matrix<A::Elem, N, 1>>
where
    A: MatrixExpr,
    A::Elem: Float,
{
    const {
        assert!(
            A::ROWS == N && A::COLS == N + 1,
            "back-substitution needs an N x (N + 1) augmented system"
        )
    }
    let mut x = Matrix::<A::Elem, N, 1>::zeros();
    for i in (1..=N).rev() {
        let mut sum = <A::Elem as num_traits::Zero>::zero();
        for j in (i + 1)..=N {
            sum += aug.at(i, j)? * x.at(j, 1)?;
        }
        *x.at_mut(i, 1)? = (aug.at(i, N + 1)? - sum) / aug.at(i, i)?;
    }
    Ok(x)
}

/// Solve `A x = b` in place with the default configuration
///
/// `a` and `b` are overwritten by the reduced system. Use [`solve`] to keep them.
pub fn solve_in_place<T, const N: usize>(
    a: &mut Matrix<T, N, N>,
    b: &mut Matrix<T, N, 1>,
) -> Result<Matrix<T, N, 1>>
where
    T: Element + Float,
{
    solve_in_place_with(a, b, &SolveConfig::default())
}

/// Solve `A x = b` in place
///
/// Elimination writes straight into `a` and `b` through an augmented view. With
/// partial pivoting the rows of `a` and `b` keep their original order; only the
/// view is permuted.
pub fn solve_in_place_with<T, const N: usize>(
    a: &mut Matrix<T, N, N>,
    b: &mut Matrix<T, N, 1>,
    config: &SolveConfig,
) -> Result<Matrix<T, N, 1>>
where
    T: Element + Float,
{
    log::debug!(
        "Gaussian elimination on a {}x{} system (pivoting: {:?}, tolerance: {:?})",
        N,
        N,
        config.pivoting,
        config.pivot_tolerance
    );

    let mut aug = augment(a, b);
    match config.pivoting {
        Pivoting::None => {
            upper_triangularize(&mut aug, config)?;
            back_substitute(&aug)
        }
        Pivoting::Partial => {
            let mut swapped = RowSwapper::new(aug);
            upper_triangularize_pivoted(&mut swapped, config)?;
            back_substitute(&swapped)
        }
    }
}

/// Solve `A x = b` with the default configuration
///
/// # Example
///
/// ```
/// use math_audio_matrix::{Matrix, solve};
///
/// let a: Matrix<f64, 3, 3> = Matrix::new([[1.0, -3.0, 1.0], [2.0, -8.0, 8.0], [-6.0, 3.0, -15.0]]);
/// let b = Matrix::new([[4.0], [-2.0], [9.0]]);
///
/// let x = solve(&a, &b).unwrap();
/// assert!((x[(1, 1)] - 3.0).abs() < 1e-9);
/// ```
///
/// Integer systems are rejected, elimination needs fractional division:
///
/// ```compile_fail
/// use math_audio_matrix::{Matrix, solve};
///
/// let a = Matrix::new([[2_i32, 1], [1, 3]]);
/// let b = Matrix::new([[3_i32], [5]]);
/// let _ = solve(&a, &b);
/// ```
pub fn solve<T, const N: usize>(a: &Matrix<T, N, N>, b: &Matrix<T, N, 1>) -> Result<Matrix<T, N, 1>>
where
    T: Element + Float,
{
    solve_with(a, b, &SolveConfig::default())
}

/// Solve `A x = b` on copies of `a` and `b`
pub fn solve_with<T, const N: usize>(
    a: &Matrix<T, N, N>,
    b: &Matrix<T, N, 1>,
    config: &SolveConfig,
) -> Result<Matrix<T, N, 1>>
where
    T: Element + Float,
{
    let mut a = a.clone();
    let mut b = b.clone();
    solve_in_place_with(&mut a, &mut b, config)
}

/// Inverse of `a` with the default configuration
pub fn inverse<T, const N: usize>(a: &Matrix<T, N, N>) -> Result<Matrix<T, N, N>>
where
    T: Element + Float,
{
    inverse_with(a, &SolveConfig::default())
}

/// Inverse of `a`, one solve per column of the identity
pub fn inverse_with<T, const N: usize>(
    a: &Matrix<T, N, N>,
    config: &SolveConfig,
) -> Result<Matrix<T, N, N>>
where
    T: Element + Float,
{
    let mut inv = Matrix::<T, N, N>::zeros();
    for col in 1..=N {
        let unit = Matrix::<T, N, 1>::from_fn(|row, _| if row == col { T::one() } else { T::zero() });
        let x = solve_with(a, &unit, config)?;
        for row in 1..=N {
            *inv.at_mut(row, col)? = x.at(row, 1)?;
        }
    }
    Ok(inv)
}
