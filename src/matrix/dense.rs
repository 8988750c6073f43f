//! Dense row-major matrix storage.
//!
//! `Matrix` owns a single contiguous `Vec<f64>` of `rows * cols` entries,
//! indexed by `row * cols + col`. Every constructed matrix has at least one
//! row and one column; the only exception is the empty `0x0` state produced
//! by `Matrix::default()` or left behind by `Matrix::take`, which is valid for
//! reassignment but not for element access or the square-matrix algorithms.

use std::fmt;

use log::debug;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::{MatError, Result};

/// A dense matrix of `f64` values with value semantics.
///
/// `Clone` is a deep copy. Moving a `Matrix` transfers its buffer.
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Validate a shape and return its element count.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows < 1 || cols < 1 {
        return Err(MatError::InvalidDimension { rows, cols });
    }
    // The buffer must fit in isize::MAX bytes.
    rows.checked_mul(cols)
        .filter(|&len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(MatError::InvalidDimension { rows, cols })
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    /// `InvalidDimension` if either dimension is zero or the element count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// The empty `0x0` matrix. Same as `Matrix::default()`.
    pub fn empty() -> Self {
        Matrix::default()
    }

    /// Build from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        if data.len() != len {
            return Err(MatError::DimensionMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Build from a slice of rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = check_dims(nrows, ncols)?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatError::DimensionMismatch {
                    op: "from_rows",
                    left: (nrows, ncols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Build from a function of `(row, col)`.
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(rows: usize, cols: usize, mut f: F) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        Matrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True for the `0x0` default/drained state.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the storage out, leaving `self` empty.
    pub fn take(&mut self) -> Matrix {
        std::mem::take(self)
    }

    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Mutable reference to entry `(i, j)`.
    ///
    /// The borrow ends before any resize, so it can never outlive the buffer.
    pub fn at(&mut self, i: usize, j: usize) -> Result<&mut f64> {
        self.check_index(i, j)?;
        let cols = self.cols;
        Ok(&mut self.data[i * cols + j])
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check_index(i, j)?;
        Ok(self.data[i * self.cols + j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        *self.at(i, j)? = value;
        Ok(())
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        self.check_index(i, 0)?;
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Change the row count, keeping the overlapping block and zero-filling new cells.
    ///
    /// # Errors
    /// `InvalidDimension` if `rows == 0`, `EmptyMatrix` if the matrix has no storage.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        self.resize(rows, self.cols)
    }

    /// Change the column count, keeping the overlapping block and zero-filling new cells.
    ///
    /// # Errors
    /// `InvalidDimension` if `cols == 0`, `EmptyMatrix` if the matrix has no storage.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        self.resize(self.rows, cols)
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        if self.is_empty() {
            return Err(MatError::EmptyMatrix);
        }
        let len = check_dims(rows, cols)?;
        debug!("resize {}x{} -> {}x{}", self.rows, self.cols, rows, cols);
        let mut data = vec![0.0; len];
        let keep_cols = cols.min(self.cols);
        for i in 0..rows.min(self.rows) {
            let src = i * self.cols;
            let dst = i * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
        Ok(())
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl MatrixGet for Matrix {
    fn get_unchecked(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Matrix::new(0, 2).unwrap_err(),
            MatError::InvalidDimension { rows: 0, cols: 2 }
        );
        assert!(Matrix::new(2, 0).is_err());
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let rows = usize::MAX / 2 + 2;
        assert_eq!(
            Matrix::from_vec(rows, 2, vec![1.0, 2.0]).unwrap_err(),
            MatError::InvalidDimension { rows, cols: 2 }
        );
        assert_eq!(
            Matrix::new(usize::MAX, 2).unwrap_err(),
            MatError::InvalidDimension { rows: usize::MAX, cols: 2 }
        );
        assert!(Matrix::new(usize::MAX, 1).is_err());
        assert!(Matrix::from_fn(usize::MAX, 3, |_, _| 0.0).is_err());
        let mut m = Matrix::new(2, 2).unwrap();
        assert!(m.set_cols(usize::MAX).is_err());
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatError::DimensionMismatch { op: "from_vec", .. })
        ));
        assert_eq!(Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap().shape(), (1, 3));
    }

    #[test]
    fn at_rejects_index_equal_to_bound() {
        let mut m = Matrix::new(2, 3).unwrap();
        assert!(matches!(m.at(2, 0), Err(MatError::IndexOutOfRange { .. })));
        assert!(matches!(m.at(0, 3), Err(MatError::IndexOutOfRange { .. })));
        *m.at(1, 2).unwrap() = 7.5;
        assert_eq!(m.get(1, 2).unwrap(), 7.5);
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Matrix::new(2, 2).unwrap();
        a.set(0, 0, 1.0).unwrap();
        let b = a.clone();
        a.set(0, 0, 9.0).unwrap();
        assert_eq!(b.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Matrix::new(2, 2).unwrap();
        a.set(1, 1, 4.0).unwrap();
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(a.shape(), (0, 0));
        assert!(a.get(0, 0).is_err());
        assert_eq!(a.set_rows(3), Err(MatError::EmptyMatrix));
        assert_eq!(b.get(1, 1).unwrap(), 4.0);
    }

    #[test]
    fn set_rows_keeps_overlap() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        m.set_rows(1).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0]);
        m.set_rows(3).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(m.set_rows(0).is_err());
        assert_eq!(m.rows(), 3);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(MatError::DimensionMismatch { op: "from_rows", .. })
        ));
    }

    #[test]
    fn display_prints_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.5]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4.5\n");
    }
}
