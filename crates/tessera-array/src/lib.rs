//! Dense N-dimensional arrays for Tessera
//!
//! [`NdArray`] owns a flat `f64` buffer addressed through a row-major
//! [`Layout`]. Element access goes through the [`Array`] trait.
//!
//! ```
//! use tessera_array::{Array, NdArray};
//!
//! let mut arr = NdArray::zeros(&[2, 2])?;
//! arr.set(42.0, &[1, 1])?;
//! assert_eq!(arr.get(&[1, 1])?, 42.0);
//! assert!(arr.get(&[3, 0]).is_err());
//! # Ok::<(), tessera_array::TesseraError>(())
//! ```

mod array;
mod creation;
mod manipulation;

pub use array::NdArray;
pub use tessera_core::{Array, ErrorKind, Layout, Result, ShapeViolation, TesseraError, MAX_RANK};
