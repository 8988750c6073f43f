//! Operator overloads for `Matrix`.
//!
//! `+`, `-` and matrix `*` can fail on shape mismatch, so they yield
//! `Result<Matrix, MatError>`. Scalar `*` cannot fail and yields `Matrix`.
//! The compound forms `+=`, `-=` and matrix `*=` panic on mismatch; use
//! `sum_matrix`, `sub_matrix` or `mul_matrix` to handle the error instead.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::error::{MatError, Result};
use crate::matrix::Matrix;

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.eq_matrix(other)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.sum_matrix(rhs)?;
        Ok(result)
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Result<Matrix>;
    fn add(mut self, rhs: &Matrix) -> Result<Matrix> {
        self.sum_matrix(rhs)?;
        Ok(self)
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.sub_matrix(rhs)?;
        Ok(result)
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Result<Matrix>;
    fn sub(mut self, rhs: &Matrix) -> Result<Matrix> {
        self.sub_matrix(rhs)?;
        Ok(self)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;
    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.product(rhs)
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Result<Matrix>;
    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.product(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        let mut result = self.clone();
        result.mul_number(rhs);
        result
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(mut self, rhs: f64) -> Matrix {
        self.mul_number(rhs);
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

fn or_panic(res: Result<()>) {
    if let Err(e) = res {
        panic!("{e}");
    }
}

impl AddAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics if the shapes differ.
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sum_matrix(rhs));
    }
}

impl SubAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics if the shapes differ.
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sub_matrix(rhs));
    }
}

impl MulAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics if `self.cols() != rhs.rows()`.
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.mul_matrix(rhs));
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.mul_number(rhs);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        let cols = self.cols();
        if i >= self.rows() || j >= cols {
            panic!(
                "{}",
                MatError::IndexOutOfRange { row: i, col: j, rows: self.rows(), cols }
            );
        }
        &self.as_slice()[i * cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        match self.at(i, j) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}
