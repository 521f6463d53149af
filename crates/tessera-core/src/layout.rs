//! Row-major shape and stride bookkeeping
//!
//! A [`Layout`] owns the shape of an array and the stride table derived from
//! it. Strides are never set directly: every constructor and every reshape
//! goes through shape validation and [`compute_strides`], so the table is
//! always the row-major derivation of the current shape.

use crate::error::{Result, ShapeViolation, TesseraError};
use log::trace;
use serde::{Deserialize, Serialize};

/// Maximum number of axes an array may have
pub const MAX_RANK: usize = 32;

/// Shape plus derived row-major strides
///
/// Serializes as the bare shape; deserializing revalidates the shape and
/// rederives the strides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<usize>,
    size: usize,
}

impl Layout {
    pub fn new(shape: &[usize]) -> Result<Self> {
        let size = validate_shape(shape)?;
        Ok(Self {
            shape: shape.to_vec(),
            strides: compute_strides(shape),
            size,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements addressed by this layout
    pub fn size(&self) -> usize {
        self.size
    }

    /// Convert a coordinate tuple into a flat buffer offset.
    ///
    /// Every coordinate is bounds-checked against its axis before any part of
    /// the offset is computed.
    pub fn offset(&self, indices: &[isize]) -> Result<usize> {
        if indices.len() != self.ndim() {
            return Err(TesseraError::RankMismatch {
                expected: self.ndim(),
                got: indices.len(),
            });
        }

        for (axis, (&index, &size)) in indices.iter().zip(&self.shape).enumerate() {
            if index < 0 || index as usize >= size {
                return Err(TesseraError::IndexOutOfBounds { index, axis, size });
            }
        }

        let offset: usize = indices
            .iter()
            .zip(&self.strides)
            .map(|(&index, &stride)| index as usize * stride)
            .sum();

        // Unreachable when the per-axis checks hold.
        if offset >= self.size {
            return Err(TesseraError::OffsetOutOfBounds {
                offset,
                len: self.size,
            });
        }
        Ok(offset)
    }

    /// Inverse of [`Layout::offset`]: the coordinate tuple stored at `offset`
    pub fn unravel(&self, offset: usize) -> Result<Vec<usize>> {
        if offset >= self.size {
            return Err(TesseraError::OffsetOutOfBounds {
                offset,
                len: self.size,
            });
        }

        let mut rem = offset;
        let coords = self
            .strides
            .iter()
            .map(|&stride| {
                let index = rem / stride;
                rem %= stride;
                index
            })
            .collect();
        Ok(coords)
    }

    /// Replace the shape, keeping the element count.
    ///
    /// Leaves `self` untouched on error.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let requested = validate_shape(shape)?;
        if requested != self.size {
            return Err(TesseraError::ShapeMismatch {
                size: self.size,
                shape: shape.to_vec(),
                requested,
            });
        }

        self.shape = shape.to_vec();
        self.strides = compute_strides(shape);
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Layout {
    type Error = TesseraError;

    fn try_from(shape: Vec<usize>) -> Result<Self> {
        Layout::new(&shape)
    }
}

impl From<Layout> for Vec<usize> {
    fn from(layout: Layout) -> Self {
        layout.shape
    }
}

/// Check a shape and return its element count
pub fn validate_shape(shape: &[usize]) -> std::result::Result<usize, ShapeViolation> {
    let violation = if shape.is_empty() {
        Some(ShapeViolation::Empty)
    } else if shape.len() > MAX_RANK {
        Some(ShapeViolation::TooManyDimensions {
            rank: shape.len(),
            max: MAX_RANK,
        })
    } else {
        shape
            .iter()
            .position(|&size| size == 0)
            .map(|axis| ShapeViolation::NonPositiveExtent { axis, size: 0 })
    };

    if let Some(violation) = violation {
        trace!("rejecting shape {:?}: {}", shape, violation);
        return Err(violation);
    }

    shape
        .iter()
        .try_fold(1usize, |acc, &size| acc.checked_mul(size))
        .ok_or_else(|| ShapeViolation::SizeOverflow {
            shape: shape.to_vec(),
        })
}

/// Row-major strides, in elements, for an already validated shape
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}
