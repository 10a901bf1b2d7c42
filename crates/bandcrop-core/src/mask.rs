//! Mask - Binary dark/light grid
//!
//! One `bool` per pixel in a flat buffer indexed by `y * width + x`.
//! `true` marks a dark (foreground) pixel.

use crate::error::{Error, Result};

/// Binary mask derived from a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-light mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![false; width as usize * height as usize],
        })
    }

    /// Build a mask from a flat row-major buffer.
    pub fn from_vec(width: u32, height: u32, data: Vec<bool>) -> Result<Self> {
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

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Result<Self> {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let idx = mask.index(x, y);
                mask.data[idx] = f(x, y);
            }
        }
        Ok(mask)
    }

    /// Get the mask width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a mask has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Raw row-major cells.
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Whether (x, y) is dark. Out-of-bounds coordinates read as light.
    #[inline]
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)]
    }

    /// Set one cell.
    pub fn set(&mut self, x: u32, y: u32, dark: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height)),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = dark;
        Ok(())
    }

    /// Mark every cell inside the inclusive rectangle as dark, clipped.
    pub fn set_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32) {
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let idx = self.index(x, y);
                self.data[idx] = true;
            }
        }
    }

    /// Number of dark cells.
    pub fn count_dark(&self) -> usize {
        self.data.iter().filter(|&&d| d).count()
    }
}
