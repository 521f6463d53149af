//! Owned dense array

use std::fmt;

use tessera_core::{Array, Layout, Result, TesseraError};

/// Dense N-dimensional `f64` array
///
/// Owns its buffer exclusively; cloning copies the elements.
#[derive(Debug, Clone)]
pub struct NdArray {
    pub(crate) data: Vec<f64>,
    pub(crate) layout: Layout,
}

impl NdArray {
    /// Consume and return the flat buffer
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }
}

impl Array for NdArray {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn from_vec(data: Vec<f64>, shape: &[usize]) -> Result<Self> {
        let layout = Layout::new(shape)?;
        if data.len() != layout.size() {
            return Err(TesseraError::DataLength {
                len: data.len(),
                expected: layout.size(),
            });
        }
        Ok(Self { data, layout })
    }
}

impl PartialEq for NdArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NdArray(shape={:?}, data={:?})", self.shape(), self.data)
    }
}
