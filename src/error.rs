use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid dimension {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("singular matrix (determinant is zero)")]
    SingularMatrix,
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix has no storage")]
    EmptyMatrix,
}

pub type Result<T> = std::result::Result<T, MatError>;
