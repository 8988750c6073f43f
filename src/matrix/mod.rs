//! Matrix module: the dense `Matrix` type and its operations.

pub mod dense;
pub use dense::Matrix;

pub mod algebra;
pub mod arith;
pub mod interop;
pub mod ops;
