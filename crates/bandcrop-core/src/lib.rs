//! bandcrop-core - Basic data structures for frame analysis
//!
//! This crate provides the fundamental data structures shared by the
//! other bandcrop crates:
//!
//! - [`Raster`] / [`RasterMut`] - RGBA frame container (immutable / mutable)
//! - [`LumaMap`] - Floating-point luminance grid
//! - [`Mask`] - Binary dark/light grid
//! - [`Box`] - Rectangle regions
//! - [`Color`] - RGB color used for rendering

pub mod box_;
pub mod error;
pub mod luma;
pub mod mask;
pub mod raster;

pub use box_::Box;
pub use error::{Error, Result};
pub use luma::LumaMap;
pub use mask::Mask;
pub use raster::{Color, ImageFormat, Raster, RasterMut, RowDiff};

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// ITU-R BT.601 luma weights.
    pub const LUMA_RED: f32 = 0.299;
    pub const LUMA_GREEN: f32 = 0.587;
    pub const LUMA_BLUE: f32 = 0.114;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Luminance of an RGB triple, `0.299 R + 0.587 G + 0.114 B`.
    ///
    /// Alpha is ignored.
    #[inline]
    pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
        LUMA_RED * r as f32 + LUMA_GREEN * g as f32 + LUMA_BLUE * b as f32
    }

    /// Luminance of a packed 32-bit pixel.
    #[inline]
    pub fn pixel_luminance(pixel: u32) -> f32 {
        let (r, g, b) = extract_rgb(pixel);
        luminance(r, g, b)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_and_extract() {
            let p = compose_rgba(10, 20, 30, 40);
            assert_eq!(p, 0x0a141e28);
            assert_eq!(extract_rgba(p), (10, 20, 30, 40));
            assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
        }

        #[test]
        fn test_luminance_extremes() {
            assert_eq!(luminance(0, 0, 0), 0.0);
            assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-3);
        }

        #[test]
        fn test_luminance_weights() {
            assert!((luminance(100, 0, 0) - 29.9).abs() < 1e-3);
            assert!((luminance(0, 100, 0) - 58.7).abs() < 1e-3);
            assert!((luminance(0, 0, 100) - 11.4).abs() < 1e-3);
            assert_eq!(
                pixel_luminance(compose_rgb(0, 100, 0)),
                luminance(0, 100, 0)
            );
        }
    }
}
