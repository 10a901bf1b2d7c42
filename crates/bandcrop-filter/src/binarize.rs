//! Binarization of frames into dark/light masks
//!
//! A pixel is dark when its (smoothed) luminance is strictly below
//! `255 - pixel_threshold`. Raising the threshold therefore never adds
//! dark pixels.

use crate::luma::luminance_map;
use crate::smooth::Smoothing;
use crate::FilterResult;
use bandcrop_core::{LumaMap, Mask, Raster};
use serde::{Deserialize, Serialize};

/// Default darkness threshold on the 0..=255 scale.
pub const DEFAULT_PIXEL_THRESHOLD: u8 = 20;

/// Options for [`binarize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizeOptions {
    /// Distance below white a pixel must reach to count as dark
    pub pixel_threshold: u8,
    /// Smoothing applied before thresholding
    pub smoothing: Smoothing,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            pixel_threshold: DEFAULT_PIXEL_THRESHOLD,
            smoothing: Smoothing::default(),
        }
    }
}

impl BinarizeOptions {
    /// Create options with the given threshold and default smoothing
    pub fn new(pixel_threshold: u8) -> Self {
        Self {
            pixel_threshold,
            ..Self::default()
        }
    }

    /// Set the smoothing
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// Luminance cut-off for a threshold: pixels strictly below it are dark.
#[inline]
pub fn dark_cutoff(pixel_threshold: u8) -> f32 {
    255.0 - pixel_threshold as f32
}

/// Threshold a luminance map into a mask.
pub fn threshold_luma(map: &LumaMap, pixel_threshold: u8) -> FilterResult<Mask> {
    let cutoff = dark_cutoff(pixel_threshold);
    let data = map.data().iter().map(|&g| g < cutoff).collect();
    Ok(Mask::from_vec(map.width(), map.height(), data)?)
}

/// Convert a color frame into a dark/light mask.
///
/// Computes luminance, applies `options.smoothing`, then thresholds.
pub fn binarize(raster: &Raster, options: &BinarizeOptions) -> FilterResult<Mask> {
    let luma = luminance_map(raster)?;
    let smoothed = options.smoothing.apply(&luma)?;
    let mask = threshold_luma(&smoothed, options.pixel_threshold)?;

    log::trace!(
        "binarized {}x{} frame: {} dark pixels (threshold {}, {:?})",
        mask.width(),
        mask.height(),
        mask.count_dark(),
        options.pixel_threshold,
        options.smoothing
    );

    Ok(mask)
}
