//! densemat: dense f64 matrices with value semantics
//!
//! This crate provides a single owned, row-major `Matrix` type with elementwise
//! arithmetic, matrix multiplication, transpose, determinant (cofactor
//! expansion), cofactor matrix, adjugate and inverse, plus in-place resizing.
//! It favours exact, reproducible results over speed and is meant for small
//! matrices.
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]]).unwrap();
//! let inv = a.inverse().unwrap();
//! assert_eq!((&inv * &a).unwrap(), Matrix::identity(3).unwrap());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
