//! Tessera Core - indexing and error types
//!
//! This crate holds the parts of a dense array that do not depend on the
//! storage: shape validation, row-major stride derivation, coordinate to
//! offset arithmetic, and the error taxonomy shared by every operation.

pub mod array;
pub mod error;
pub mod layout;

pub use array::Array;
pub use error::{ErrorKind, Result, ShapeViolation, TesseraError};
pub use layout::{compute_strides, validate_shape, Layout, MAX_RANK};
