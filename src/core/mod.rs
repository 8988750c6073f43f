//! Core traits shared by the matrix engine and its interop layer.

pub mod traits;
pub use traits::{MatShape, MatrixGet};
