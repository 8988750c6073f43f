//! Conversions between `Matrix` and `faer::Mat<f64>`.
//!
//! `faer` stores column-major and `Matrix` row-major; both sides are read
//! through `MatShape` + `MatrixGet`, so the copy is layout-agnostic.

use faer::Mat;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{MatError, Result};
use crate::matrix::Matrix;

impl MatShape for Mat<f64> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl MatrixGet for Mat<f64> {
    fn get_unchecked(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }
}

impl Matrix {
    /// Copy any readable matrix into a new `Matrix`.
    ///
    /// # Errors
    /// `InvalidDimension` if the source has a zero dimension.
    pub fn from_source<M: MatShape + MatrixGet>(src: &M) -> Result<Matrix> {
        Matrix::from_fn(src.nrows(), src.ncols(), |i, j| src.get_unchecked(i, j))
    }
}

impl From<&Matrix> for Mat<f64> {
    fn from(m: &Matrix) -> Self {
        Mat::from_fn(m.rows(), m.cols(), |i, j| m.get_unchecked(i, j))
    }
}

impl TryFrom<&Mat<f64>> for Matrix {
    type Error = MatError;
    fn try_from(m: &Mat<f64>) -> Result<Self> {
        Matrix::from_source(m)
    }
}
