//! Dense row-major matrix storage with bounds-checked element access.
//!
//! [`DenseMatrix`] owns its elements exclusively; clones and derived
//! matrices (inverses, working copies) are independent instances. The
//! dimensions are fixed at construction and change only through
//! [`load`](DenseMatrix::load), which replaces the backing store wholesale.

use crate::error::MatrixError;
use ndarray::Array2;
use std::fmt;

/// Dense matrix of `f64` elements in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub(crate) data: Array2<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled matrix with the given dimensions.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            data: Array2::zeros((rows, cols)),
        })
    }

    /// Build a matrix from nested row vectors.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] on empty input and
    /// [`MatrixError::Format`] if the rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                rows: nrows,
                cols: ncols,
            });
        }
        let mut data = Array2::zeros((nrows, ncols));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::Format(format!(
                    "inconsistent number of columns: row 0 has {}, row {} has {}",
                    ncols,
                    i,
                    row.len()
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        Ok(Self { data })
    }

    /// The n x n identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[[i, i]] = 1.0;
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)` pair.
    pub fn dimensions(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Read one element, bounds-checked.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.data[[row, col]])
    }

    /// Overwrite one element, bounds-checked. No other state changes.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self.data[[row, col]] = value;
        Ok(())
    }

    /// Borrow the backing `ndarray` storage.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        let (rows, cols) = self.data.dim();
        if row >= rows || col >= cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(())
    }
}

/// Fixed six-decimal display with columns aligned to the widest entry.
impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| format!("{v:.6}").len())
            .max()
            .unwrap_or(0);
        for row in self.data.rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:>width$.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
