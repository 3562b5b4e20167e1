//! Direct solvers for linear systems
//!
//! This module provides Gaussian elimination on static-size systems:
//! - [`solve`] / [`solve_with`]: solve `A x = b` on copies of the inputs
//! - [`solve_in_place`] / [`solve_in_place_with`]: destructive variant
//! - [`upper_triangularize`], [`upper_triangularize_pivoted`], [`back_substitute`]:
//!   the two phases, usable on any augmented matrix-like view
//! - [`inverse`]: one solve per identity column

mod gauss;

pub use gauss::{
    Pivoting, SolveConfig, back_substitute, inverse, inverse_with, solve, solve_in_place,
    solve_in_place_with, solve_with, upper_triangularize, upper_triangularize_pivoted,
};
