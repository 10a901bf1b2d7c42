//! Raster - The frame container
//!
//! The `Raster` structure holds one decoded video frame as a grid of
//! 32-bit RGBA pixels.
//!
//! # Pixel layout
//!
//! - One `u32` per pixel, rows stored contiguously (`y * width + x`)
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod access;
pub mod compare;
pub mod graphics;

pub use compare::RowDiff;
pub use graphics::Color;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            _ => Self::Unknown,
        }
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (3 for RGB, 4 for RGBA)
    spp: u32,
    /// Input file format
    informat: ImageFormat,
    /// The image data, one packed RGBA word per pixel
    data: Vec<u32>,
}

impl RasterData {
    fn duplicate(&self) -> Self {
        RasterData {
            width: self.width,
            height: self.height,
            spp: self.spp,
            informat: self.informat,
            data: self.data.clone(),
        }
    }
}

/// Raster - Main frame container
///
/// # Examples
///
/// ```
/// use bandcrop_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// Every pixel is initialized to opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, color::compose_rgb(0, 0, 0))
    }

    /// Create a new raster with every pixel set to `pixel`.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let inner = RasterData {
            width,
            height,
            spp: 3,
            informat: ImageFormat::Unknown,
            data: vec![pixel; width as usize * height as usize],
        };

        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Build a raster from already packed `0xRRGGBBAA` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, spp: u32, data: Vec<u32>) -> Result<Self> {
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
        if spp != 3 && spp != 4 {
            return Err(Error::InvalidParameter(format!(
                "samples per pixel must be 3 or 4, got {spp}"
            )));
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                spp,
                informat: ImageFormat::Unknown,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check whether two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Tag the raster with the format it was decoded from.
    ///
    /// Reuses the pixel buffer when this is the only reference.
    pub fn with_informat(self, format: ImageFormat) -> Raster {
        let mut raster = self.try_into_mut().unwrap_or_else(|shared| shared.to_mut());
        raster.set_informat(format);
        raster.into()
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: self.inner.duplicate(),
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Set the input file format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 50).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 50);
        assert_eq!(raster.spp(), 3);
        assert_eq!(raster.data().len(), 5000);
        assert_eq!(raster.get_rgb(99, 49), Some((0, 0, 0)));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(Raster::new(10, 0).is_err());
    }

    #[test]
    fn test_from_pixels_size_check() {
        assert!(matches!(
            Raster::from_pixels(4, 4, 3, vec![0; 15]),
            Err(Error::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
        assert!(Raster::from_pixels(4, 4, 5, vec![0; 16]).is_err());
    }

    #[test]
    fn test_try_into_mut_shared() {
        let raster = Raster::new(4, 4).unwrap();
        let shared = raster.clone();
        let raster = raster.try_into_mut().unwrap_err();
        drop(shared);
        assert!(raster.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let raster = Raster::new(3, 3).unwrap();
        let mut copy = raster.to_mut();
        copy.set_rgb(1, 1, 255, 255, 255).unwrap();
        let copy: Raster = copy.into();
        assert_eq!(raster.get_rgb(1, 1), Some((0, 0, 0)));
        assert_eq!(copy.get_rgb(1, 1), Some((255, 255, 255)));
    }

    #[test]
    fn test_with_informat() {
        let raster = Raster::new(2, 2).unwrap().with_informat(ImageFormat::Jpeg);
        assert_eq!(raster.informat(), ImageFormat::Jpeg);

        let shared = Raster::new(2, 2).unwrap();
        let tagged = shared.clone().with_informat(ImageFormat::Png);
        assert_eq!(tagged.informat(), ImageFormat::Png);
        assert_eq!(shared.informat(), ImageFormat::Unknown);
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::from_extension("JPEG"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("tif"), ImageFormat::Unknown);
    }
}
