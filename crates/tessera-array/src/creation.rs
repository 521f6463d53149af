//! Array creation

use log::debug;
use tessera_core::{Layout, Result};

use crate::NdArray;

impl NdArray {
    /// Create a zero-initialized array
    pub fn new(shape: &[usize]) -> Result<Self> {
        Self::full(0.0, shape)
    }

    /// Create array of zeros
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::new(shape)
    }

    /// Create array of ones
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(1.0, shape)
    }

    /// Create array filled with `value`
    pub fn full(value: f64, shape: &[usize]) -> Result<Self> {
        let layout = Layout::new(shape)?;
        debug!(
            "allocating array of shape {:?} ({} elements)",
            layout.shape(),
            layout.size()
        );
        Ok(Self {
            data: vec![value; layout.size()],
            layout,
        })
    }
}
