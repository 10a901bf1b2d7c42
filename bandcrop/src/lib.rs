//! bandcrop - Dark block detection for video frames
//!
//! Finds the dark rectangular region nearest the top of a frame, such as
//! the picture area of a letterboxed video, and reports the row it starts
//! on and how many rows it spans.
//!
//! # Overview
//!
//! - Frame I/O (PNG, JPEG)
//! - Luminance, smoothing and binarization
//! - Connected component location and block selection
//! - Detection pipeline with optional debug rendering
//!
//! # Example
//!
//! ```
//! use bandcrop::detect::{DetectOptions, detect_block};
//! use bandcrop::{Raster, color};
//!
//! let frame = Raster::new_filled(640, 360, color::compose_rgb(255, 255, 255)).unwrap();
//! let report = detect_block(&frame, &DetectOptions::default()).unwrap();
//! assert!(!report.is_found());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bandcrop_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bandcrop_detect as detect;
pub use bandcrop_filter as filter;
pub use bandcrop_io as io;
pub use bandcrop_region as region;
