//! LumaMap - Floating-point luminance image
//!
//! Holds one `f32` luminance sample per pixel on the 0..=255 scale.
//! Used as the intermediate between color frames and binary masks.

use crate::error::{Error, Result};

/// Floating-point single-channel image
#[derive(Debug, Clone, PartialEq)]
pub struct LumaMap {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl LumaMap {
    /// Create a map with every sample set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Build a map from a flat row-major buffer.
    pub fn from_vec(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a sample, `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Check whether two maps have the same size.
    pub fn sizes_equal(&self, other: &LumaMap) -> bool {
        self.width == other.width && self.height == other.height
    }
}
