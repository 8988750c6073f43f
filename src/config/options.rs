//! Options controlling matrix comparison.
//!
//! Equality between matrices is an absolute, element-wise test: two entries
//! match when `|a - b| < epsilon`. The default tolerance is the machine
//! epsilon of `f64`, which is scale-sensitive for very large or very small
//! magnitudes. Callers working at such scales can widen it here.

/// Tolerance used by `Matrix::eq_matrix_with`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Absolute tolerance; entries match when their difference is strictly below it.
    pub epsilon: f64,
}

impl CompareOptions {
    pub fn with_epsilon(epsilon: f64) -> Self {
        CompareOptions { epsilon }
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            epsilon: f64::EPSILON,
        }
    }
}
