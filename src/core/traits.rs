//! Core matrix-access traits for densemat.
//!
//! These let `Matrix` and `faer::Mat<f64>` be read through one interface,
//! so conversions between them are written once.

/// Shape of a two-dimensional container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Unchecked element read. Callers guarantee `i < nrows()` and `j < ncols()`.
pub trait MatrixGet {
    fn get_unchecked(&self, i: usize, j: usize) -> f64;
}
