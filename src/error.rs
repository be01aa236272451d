//! Error types for matrix construction, access, solving and persistence.

use thiserror::Error;

/// Errors that can occur in any engine operation.
///
/// All failures are reported synchronously to the immediate caller; the
/// engine never retries or recovers internally.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Construction with zero rows or columns
    #[error("Matrix dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Element access outside `[0, rows) x [0, cols)`
    #[error("Matrix index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// `solve` requires an n x (n+1) augmented matrix
    #[error("Matrix must have n rows and n+1 columns for system solving, got {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize },

    /// `inverse` and `determinant` require a square matrix
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Pivot magnitude fell below [`PIVOT_TOLERANCE`](crate::PIVOT_TOLERANCE)
    #[error("Matrix is singular or nearly singular")]
    SingularMatrix,

    /// File open, read or write failure during `save`/`load`
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed persisted data (ragged rows, empty file, unparsable token)
    #[error("Format error: {0}")]
    Format(String),
}
