//! Elementwise arithmetic, equality and the matrix product.
//!
//! The in-place methods check shapes before touching any element, so a
//! failing call leaves both operands unchanged.

use crate::config::CompareOptions;
use crate::core::traits::MatShape;
use crate::error::{MatError, Result};
use crate::matrix::Matrix;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    /// Approximate equality with the default absolute tolerance (`f64::EPSILON`).
    pub fn eq_matrix(&self, other: &Matrix) -> bool {
        self.eq_matrix_with(other, &CompareOptions::default())
    }

    /// Shapes must match and every pair of entries must differ by strictly less than `opts.epsilon`.
    pub fn eq_matrix_with(&self, other: &Matrix, opts: &CompareOptions) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (a - b).abs() < opts.epsilon)
    }

    /// `self += other`.
    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "sum")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += *b;
        }
        Ok(())
    }

    /// `self -= other`.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "sub")?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a -= *b;
        }
        Ok(())
    }

    /// Scale every entry by `num`.
    pub fn mul_number(&mut self, num: f64) {
        for a in self.as_mut_slice() {
            *a *= num;
        }
    }

    /// Matrix product `self * other`, written back into `self`.
    ///
    /// The product is accumulated from the original `self` before it is
    /// replaced, so the change of shape to `rows x other.cols` is safe.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<()> {
        let product = self.product(other)?;
        *self = product;
        Ok(())
    }

    /// Matrix product as a new matrix.
    ///
    /// # Errors
    /// `DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn product(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(MatError::DimensionMismatch {
                op: "mul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let a = self.as_slice();
        let b = other.as_slice();
        let mut data = vec![0.0; n * p];
        for i in 0..n {
            for j in 0..p {
                let mut sum = 0.0;
                for k in 0..m {
                    sum += a[i * m + k] * b[k * p + j];
                }
                data[i * p + j] = sum;
            }
        }
        if data.is_empty() {
            return Ok(Matrix::empty());
        }
        Matrix::from_vec(n, p, data)
    }
}
