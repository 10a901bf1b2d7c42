//! Graphics rendering functions
//!
//! This module provides functions for painting onto frames:
//! - Filled rectangles
//! - Full-width horizontal bands (the debug highlight)

use super::RasterMut;
use crate::box_::Box;
use crate::color;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
}

impl RasterMut {
    /// Paint only the RGB channels of one pixel, keeping its alpha.
    #[inline]
    fn paint_unchecked(&mut self, x: u32, y: u32, c: Color) {
        let a = color::alpha(self.get_pixel_unchecked(x, y));
        self.set_pixel_unchecked(x, y, color::compose_rgba(c.r, c.g, c.b, a));
    }

    /// Fill a rectangle with a color.
    ///
    /// The rectangle is clipped to the image; a rectangle lying entirely
    /// outside paints nothing. Returns the number of pixels painted.
    pub fn fill_box_color(&mut self, b: &Box, c: Color) -> Result<u64> {
        if !b.is_valid() {
            return Err(Error::InvalidParameter(format!(
                "box has negative size: {}x{}",
                b.w, b.h
            )));
        }
        let Some(clipped) = b.clip_to(self.width(), self.height()) else {
            return Ok(0);
        };

        let (x0, y0) = (clipped.x as u32, clipped.y as u32);
        let (x1, y1) = (clipped.right() as u32, clipped.bottom() as u32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.paint_unchecked(x, y, c);
            }
        }
        Ok(clipped.area() as u64)
    }

    /// Paint a full-width horizontal band of `thickness` rows starting at `y`.
    ///
    /// The band is clipped to the image: rows past the bottom edge are
    /// skipped, so any `thickness` is accepted.
    pub fn render_hband(&mut self, y: u32, thickness: u32, c: Color) -> Result<u64> {
        if thickness == 0 {
            return Err(Error::InvalidParameter(
                "band thickness must be positive".to_string(),
            ));
        }
        let end = y.saturating_add(thickness).min(self.height());
        if y >= end {
            return Ok(0);
        }
        for row in y..end {
            for x in 0..self.width() {
                self.paint_unchecked(x, row, c);
            }
        }
        Ok((end - y) as u64 * self.width() as u64)
    }
}
