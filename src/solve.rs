//! Elimination-based dense solvers.
//!
//! Both solvers use partial pivoting: within the current column the row
//! with the largest magnitude is selected, ties going to the lowest row
//! index (strict `>` scan). [`solve`](DenseMatrix::solve) runs forward
//! Gaussian elimination followed by back-substitution on an augmented
//! system; [`inverse`](DenseMatrix::inverse) runs full Gauss-Jordan
//! elimination on `[A | I]`, eliminating above and below each pivot.
//!
//! A pivot with magnitude below [`PIVOT_TOLERANCE`] fails with
//! [`MatrixError::SingularMatrix`] in every solver. Neither solver
//! mutates the input; each works on its own augmented copy.

use crate::dense::DenseMatrix;
use crate::error::MatrixError;
use ndarray::{Array1, Array2};

/// Pivot magnitudes below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Pivots below this (but above [`PIVOT_TOLERANCE`]) are accepted with a
/// warning: the system is close to singular and results may be inaccurate.
const NEAR_SINGULAR_WARN: f64 = 1e-7;

/// Select the row in `col..n` with the largest magnitude in `col`.
///
/// A strict `>` comparison makes tie-breaking deterministic: the lowest
/// row index achieving the maximum wins.
fn find_pivot_row(a: &Array2<f64>, col: usize, n: usize) -> usize {
    let mut max_row = col;
    for k in (col + 1)..n {
        if a[[k, col]].abs() > a[[max_row, col]].abs() {
            max_row = k;
        }
    }
    max_row
}

fn swap_rows(a: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    let ncols = a.ncols();
    for col in 0..ncols {
        a.swap([i, col], [j, col]);
    }
}

impl DenseMatrix {
    /// Solve the linear system held in this augmented matrix.
    ///
    /// The matrix must be `n x (n+1)`: columns `0..n` are the
    /// coefficients, column `n` the right-hand side. Returns the `n`
    /// solution values in column order.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] on any other shape
    /// and [`MatrixError::SingularMatrix`] when a pivot column has no
    /// entry above [`PIVOT_TOLERANCE`].
    pub fn solve(&self) -> Result<Array1<f64>, MatrixError> {
        let (rows, cols) = self.dimensions();
        if cols != rows + 1 {
            return Err(MatrixError::DimensionMismatch { rows, cols });
        }

        let n = rows;
        let mut a = self.data.clone();

        // Forward elimination
        for i in 0..n {
            let max_row = find_pivot_row(&a, i, n);
            let pivot = a[[max_row, i]].abs();
            if pivot < PIVOT_TOLERANCE {
                return Err(MatrixError::SingularMatrix);
            }
            if pivot < NEAR_SINGULAR_WARN {
                log::warn!("solve: pivot magnitude {pivot:.3e} in column {i} is near singular");
            }
            if max_row != i {
                log::debug!("solve: swapping rows {i} and {max_row}");
                swap_rows(&mut a, i, max_row);
            }

            for k in (i + 1)..n {
                let factor = a[[k, i]] / a[[i, i]];
                for j in i..=n {
                    a[[k, j]] -= factor * a[[i, j]];
                }
            }
        }

        // Back-substitution
        let mut solution = Array1::zeros(n);
        for i in (0..n).rev() {
            let mut value = a[[i, n]];
            for j in (i + 1)..n {
                value -= a[[i, j]] * solution[j];
            }
            solution[i] = value / a[[i, i]];
        }

        Ok(solution)
    }

    /// Compute the inverse via Gauss-Jordan elimination on `[A | I]`.
    ///
    /// Fails with [`MatrixError::NotSquare`] on non-square input and
    /// [`MatrixError::SingularMatrix`] when no usable pivot exists. For
    /// any accepted input the result `R` satisfies `A . R ≈ I` to
    /// floating-point precision.
    pub fn inverse(&self) -> Result<DenseMatrix, MatrixError> {
        let (rows, cols) = self.dimensions();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let n = rows;
        let mut a = Array2::zeros((n, 2 * n));
        for i in 0..n {
            for j in 0..n {
                a[[i, j]] = self.data[[i, j]];
            }
            a[[i, i + n]] = 1.0;
        }

        for i in 0..n {
            let max_row = find_pivot_row(&a, i, n);
            let pivot = a[[max_row, i]].abs();
            if pivot < PIVOT_TOLERANCE {
                return Err(MatrixError::SingularMatrix);
            }
            if pivot < NEAR_SINGULAR_WARN {
                log::warn!("inverse: pivot magnitude {pivot:.3e} in column {i} is near singular");
            }
            if max_row != i {
                log::debug!("inverse: swapping rows {i} and {max_row}");
                swap_rows(&mut a, i, max_row);
            }

            // Scale the pivot row so the pivot element becomes 1
            let scale = a[[i, i]];
            for j in i..(2 * n) {
                a[[i, j]] /= scale;
            }

            // Eliminate the column from every other row, above and below
            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = a[[k, i]];
                for j in i..(2 * n) {
                    a[[k, j]] -= factor * a[[i, j]];
                }
            }
        }

        let mut result = DenseMatrix::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                result.data[[i, j]] = a[[i, j + n]];
            }
        }
        Ok(result)
    }

    /// Compute the determinant via forward elimination with sign
    /// tracking for row swaps.
    ///
    /// Returns `0.0` when a pivot column is entirely below
    /// [`PIVOT_TOLERANCE`]. Fails with [`MatrixError::NotSquare`] on
    /// non-square input.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        let (rows, cols) = self.dimensions();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let n = rows;
        let mut a = self.data.clone();
        let mut det = 1.0;

        for i in 0..n {
            let max_row = find_pivot_row(&a, i, n);
            if a[[max_row, i]].abs() < PIVOT_TOLERANCE {
                return Ok(0.0);
            }
            if max_row != i {
                swap_rows(&mut a, i, max_row);
                det = -det;
            }

            det *= a[[i, i]];
            for k in (i + 1)..n {
                let factor = a[[k, i]] / a[[i, i]];
                for j in i..n {
                    a[[k, j]] -= factor * a[[i, j]];
                }
            }
        }

        Ok(det)
    }
}
