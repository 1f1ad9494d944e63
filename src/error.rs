//! Errors reported by grid construction.

use thiserror::Error;

/// Result type returned by fallible grid constructors.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while constructing a [`Grid`](crate::Grid).
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("wrong cell count for {rows}x{cols} grid: {len}")]
    WrongCellCount { rows: usize, cols: usize, len: usize },
}
