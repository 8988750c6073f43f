//! Transpose, minors, determinant, cofactors and inverse.
//!
//! The determinant is a plain Laplace expansion along the first row. It is
//! `O(n!)` and numerically naive, but its rounding is fully determined by
//! the expansion order below, and results are expected to be reproducible
//! bit for bit. Use a factorization (e.g. `faer`'s LU) for large matrices.

use log::{debug, trace};

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{MatError, Result};
use crate::matrix::Matrix;

impl Matrix {
    fn check_square(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MatError::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(MatError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    /// Transposed copy, `cols x rows`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let src = self.as_slice();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = src[i * cols + j];
            }
        }
        Matrix::from_vec(cols, rows, data).unwrap_or_default()
    }

    /// Submatrix with column `col` and row `row` removed.
    ///
    /// Callers pass in-range indices on a square matrix of size at least 2.
    pub(crate) fn minor(&self, col: usize, row: usize) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in (0..rows).filter(|&i| i != row) {
            for j in (0..cols).filter(|&j| j != col) {
                data.push(self.get_unchecked(i, j));
            }
        }
        Matrix::from_vec(rows - 1, cols - 1, data).unwrap_or_default()
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Errors
    /// `NotSquare` for non-square input, `EmptyMatrix` for the empty matrix.
    pub fn determinant(&self) -> Result<f64> {
        self.check_square()?;
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        let n = self.rows();
        match n {
            1 => self.get_unchecked(0, 0),
            2 => {
                self.get_unchecked(0, 0) * self.get_unchecked(1, 1)
                    - self.get_unchecked(0, 1) * self.get_unchecked(1, 0)
            }
            _ => {
                trace!("expanding {n}x{n} determinant");
                let mut result = 0.0;
                let mut sign = -1.0;
                for j in 0..n {
                    sign *= -1.0;
                    result += sign * self.get_unchecked(0, j) * self.minor(j, 0).det_unchecked();
                }
                result
            }
        }
    }

    /// Matrix of cofactors: entry `(i, j)` is `(-1)^(i+j)` times the minor
    /// obtained by deleting row `i` and column `j`.
    ///
    /// A `1x1` input yields `[[1.0]]`.
    pub fn calc_complements(&self) -> Result<Matrix> {
        self.check_square()?;
        let n = self.rows();
        if n == 1 {
            return Matrix::from_vec(1, 1, vec![1.0]);
        }
        Matrix::from_fn(n, n, |i, j| {
            let det = self.minor(j, i).det_unchecked();
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            det * sign
        })
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.calc_complements()?.transpose())
    }

    /// Inverse as `adjugate * (1 / det)`.
    ///
    /// # Errors
    /// `SingularMatrix` if the determinant is exactly `0.0`.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            debug!("inverse requested for singular {}x{} matrix", self.rows(), self.cols());
            return Err(MatError::SingularMatrix);
        }
        let mut result = self.adjugate()?;
        result.mul_number(1.0 / det);
        Ok(result)
    }
}
