//! Abstract owned-buffer array

use crate::error::{Result, TesseraError};
use crate::layout::Layout;

/// Core array trait
///
/// An implementor owns a flat `f64` buffer whose length always equals
/// `layout().size()`. Coordinate access is routed through
/// [`Layout::offset`], so bounds and rank checks happen before the buffer is
/// touched.
pub trait Array: Clone + std::fmt::Debug {
    /// Get the shape/stride descriptor
    fn layout(&self) -> &Layout;

    /// Read-only view of the flat buffer in row-major order
    fn as_slice(&self) -> &[f64];

    /// Mutable view of the flat buffer; its length cannot change
    fn as_mut_slice(&mut self) -> &mut [f64];

    /// Adopt `data` as the buffer of an array of the given shape
    fn from_vec(data: Vec<f64>, shape: &[usize]) -> Result<Self>
    where
        Self: Sized;

    /// Get shape
    fn shape(&self) -> &[usize] {
        self.layout().shape()
    }

    /// Get row-major strides
    fn strides(&self) -> &[usize] {
        self.layout().strides()
    }

    /// Get number of dimensions
    fn ndim(&self) -> usize {
        self.layout().ndim()
    }

    /// Get total number of elements (the buffer length)
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Get element at flat offset
    fn get_flat(&self, offset: usize) -> Result<f64> {
        let data = self.as_slice();
        data.get(offset)
            .copied()
            .ok_or(TesseraError::OffsetOutOfBounds {
                offset,
                len: data.len(),
            })
    }

    /// Set element at flat offset
    fn set_flat(&mut self, value: f64, offset: usize) -> Result<()> {
        let data = self.as_mut_slice();
        let len = data.len();
        let slot = data
            .get_mut(offset)
            .ok_or(TesseraError::OffsetOutOfBounds { offset, len })?;
        *slot = value;
        Ok(())
    }

    /// Get element at a coordinate tuple
    fn get(&self, indices: &[isize]) -> Result<f64> {
        let offset = self.layout().offset(indices)?;
        self.get_flat(offset)
    }

    /// Set element at a coordinate tuple
    fn set(&mut self, value: f64, indices: &[isize]) -> Result<()> {
        let offset = self.layout().offset(indices)?;
        self.set_flat(value, offset)
    }
}
