//! Dense `f64` matrix engine built on elimination algorithms.
//!
//! This crate provides a single component, [`DenseMatrix`], exposing:
//!
//! - **Linear-system solving**: Gaussian elimination with partial
//!   pivoting on an `n x (n+1)` augmented matrix
//! - **Matrix inversion**: Gauss-Jordan elimination on `[A | I]` with a
//!   near-zero pivot threshold for singularity detection
//! - **Determinants**: forward elimination with swap-sign tracking
//! - **Text persistence**: a deterministic row-per-line format with
//!   full `f64` round-trip precision
//!
//! Everything is synchronous and single-threaded; a matrix is a plain
//! owned value and callers must serialize access if they share one
//! across threads.
//!
//! # Example
//!
//! ```
//! use densemat::DenseMatrix;
//!
//! // 2x + y = 5, x + 3y = 10
//! let system = DenseMatrix::from_rows(&[
//!     vec![2.0, 1.0, 5.0],
//!     vec![1.0, 3.0, 10.0],
//! ])?;
//! let x = system.solve()?;
//! assert!((x[0] - 1.0).abs() < 1e-9);
//! assert!((x[1] - 3.0).abs() < 1e-9);
//! # Ok::<(), densemat::MatrixError>(())
//! ```

pub mod dense;
pub mod error;
pub mod io;
pub mod solve;

pub use dense::DenseMatrix;
pub use error::MatrixError;
pub use solve::PIVOT_TOLERANCE;
