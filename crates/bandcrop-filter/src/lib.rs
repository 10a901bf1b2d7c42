//! bandcrop-filter - Luminance, smoothing and binarization
//!
//! This crate turns a color frame into a binary dark/light [`Mask`]:
//!
//! - [`luminance_map`] - BT.601 luma per pixel
//! - [`Smoothing`] - median (default) or block-average noise suppression
//! - [`binarize`] - smoothing followed by a fixed darkness threshold
//!
//! # Examples
//!
//! ```
//! use bandcrop_core::{Raster, color};
//! use bandcrop_filter::{BinarizeOptions, binarize};
//!
//! let frame = Raster::new_filled(32, 32, color::compose_rgb(10, 10, 10)).unwrap();
//! let mask = binarize(&frame, &BinarizeOptions::new(60)).unwrap();
//! assert_eq!(mask.count_dark(), 32 * 32);
//! ```
//!
//! [`Mask`]: bandcrop_core::Mask

pub mod binarize;
pub mod block_conv;
mod error;
pub mod luma;
pub mod rank;
pub mod smooth;

pub use error::{FilterError, FilterResult};

pub use binarize::{
    BinarizeOptions, DEFAULT_PIXEL_THRESHOLD, binarize, dark_cutoff, threshold_luma,
};
pub use block_conv::{blockconv_accum, blockconv_luma};
pub use luma::luminance_map;
pub use rank::median_filter_luma;
pub use smooth::{DEFAULT_SMOOTHING_RADIUS, MAX_SMOOTHING_RADIUS, Smoothing};
