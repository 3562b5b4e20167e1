//! Error types for matrix access and linear solves.
//!
//! Shape violations between matrix-like types are rejected while the crate is
//! compiled (see [`crate::traits::MatrixExpr`]), so the variants below only cover
//! what can go wrong at runtime: indices outside the 1-based range, buffers whose
//! length does not match a static shape, and (when explicitly requested) pivots
//! that are too small to divide by.

use thiserror::Error;

/// Errors that can occur while accessing or solving matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// An element was requested outside `[1, rows] x [1, cols]`.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix (indices are 1-based)")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows of the accessed object
        rows: usize,
        /// Number of columns of the accessed object
        cols: usize,
    },

    /// A row swap referenced a row outside `[1, rows]`.
    #[error("row {row} out of range for a matrix with {rows} rows (indices are 1-based)")]
    RowOutOfRange {
        /// Requested row
        row: usize,
        /// Number of rows of the view
        rows: usize,
    },

    /// Runtime-sized input does not match the static shape of the target.
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        /// Shape required by the target type
        expected: (usize, usize),
        /// Shape of the input
        got: (usize, usize),
    },

    /// A flat buffer does not hold exactly `rows * cols` elements.
    #[error("buffer length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Number of elements required by the target shape
        expected: usize,
        /// Number of elements provided
        got: usize,
    },

    /// A pivot fell at or below the configured tolerance.
    #[error("pivot in column {column} has magnitude {magnitude:e}, matrix is singular or nearly singular")]
    SingularPivot {
        /// 1-based pivot column
        column: usize,
        /// Magnitude of the rejected pivot
        magnitude: f64,
    },
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns `true` if this is an out-of-range index error.
    ///
    /// This includes `IndexOutOfRange` and `RowOutOfRange`.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            MatrixError::IndexOutOfRange { .. } | MatrixError::RowOutOfRange { .. }
        )
    }

    /// Returns `true` if this is a runtime shape mismatch.
    ///
    /// This includes `ShapeMismatch` and `LengthMismatch`.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MatrixError::ShapeMismatch { .. } | MatrixError::LengthMismatch { .. }
        )
    }

    /// Returns `true` if the error comes from the numerical checks of the solver.
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, MatrixError::SingularPivot { .. })
    }

    pub(crate) fn out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrixError::out_of_range(0, 2, 3, 3);
        assert_eq!(
            err.to_string(),
            "index (0, 2) out of range for a 3x3 matrix (indices are 1-based)"
        );

        let err = MatrixError::ShapeMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");
    }

    #[test]
    fn test_is_index_error() {
        let index_err = MatrixError::out_of_range(4, 1, 3, 3);
        let row_err = MatrixError::RowOutOfRange { row: 0, rows: 3 };
        let shape_err = MatrixError::ShapeMismatch {
            expected: (1, 1),
            got: (2, 2),
        };

        assert!(index_err.is_index_error());
        assert!(row_err.is_index_error());
        assert!(!shape_err.is_index_error());
    }

    #[test]
    fn test_is_numerical_error() {
        let pivot_err = MatrixError::SingularPivot {
            column: 2,
            magnitude: 0.0,
        };

        assert!(pivot_err.is_numerical_error());
        assert!(!pivot_err.is_shape_error());
        assert!(pivot_err.to_string().contains("column 2"));
    }
}
