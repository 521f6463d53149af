//! In-place array manipulation
//!
//! Reshaping only rewrites the [`Layout`](tessera_core::Layout); the buffer
//! is never reallocated or reordered.

use log::debug;
use tessera_core::Result;

use crate::NdArray;

impl NdArray {
    /// Give the array a new shape with the same number of elements.
    ///
    /// On error the array is unchanged.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let from = self.layout.shape().to_vec();
        self.layout.reshape(shape)?;
        debug!("reshaped array {:?} -> {:?}", from, shape);
        Ok(())
    }

    /// Consuming variant of [`NdArray::reshape`]
    pub fn into_shape(mut self, shape: &[usize]) -> Result<Self> {
        self.reshape(shape)?;
        Ok(self)
    }

    /// Collapse to a single axis
    pub fn flatten(&mut self) -> Result<()> {
        let size = self.data.len();
        self.reshape(&[size])
    }

    /// Overwrite every element with `value`
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}
