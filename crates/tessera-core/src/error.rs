//! Error types for tessera

use thiserror::Error;

/// Reasons a shape is rejected before anything is allocated or mutated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("must have at least one dimension")]
    Empty,

    #[error("too many dimensions: {rank} (maximum is {max})")]
    TooManyDimensions { rank: usize, max: usize },

    #[error("dimension size must be positive, got {size} on axis {axis}")]
    NonPositiveExtent { axis: usize, size: usize },

    #[error("element count of shape {shape:?} overflows usize")]
    SizeOverflow { shape: Vec<usize> },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TesseraError {
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeViolation),

    #[error("Rank mismatch: expected {expected} indices, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("Index out of bounds: index {index} on axis {axis} of size {size}")]
    IndexOutOfBounds { index: isize, axis: usize, size: usize },

    #[error("Offset out of bounds: offset {offset} for buffer of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("Shape mismatch: cannot reshape array of size {size} into shape {shape:?} (size {requested})")]
    ShapeMismatch {
        size: usize,
        shape: Vec<usize>,
        requested: usize,
    },

    #[error("Data length {len} doesn't match shape (expected {expected})")]
    DataLength { len: usize, expected: usize },
}

/// Coarse classification of a [`TesseraError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidShape,
    RankMismatch,
    IndexOutOfBounds,
    ShapeMismatch,
}

impl TesseraError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TesseraError::InvalidShape(_) => ErrorKind::InvalidShape,
            TesseraError::RankMismatch { .. } => ErrorKind::RankMismatch,
            TesseraError::IndexOutOfBounds { .. } | TesseraError::OffsetOutOfBounds { .. } => {
                ErrorKind::IndexOutOfBounds
            }
            TesseraError::ShapeMismatch { .. } | TesseraError::DataLength { .. } => {
                ErrorKind::ShapeMismatch
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TesseraError>;
