//! Configuration structs for matrix operations.

pub mod options;
pub use options::CompareOptions;
