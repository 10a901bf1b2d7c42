//! bandcrop-detect - Top-most dark block detection
//!
//! Given a decoded frame, finds the dark block nearest the top whose
//! bounding box is at least `min_block_size` on both sides, and reports
//! its first row and height. Typical use is locating the picture area of
//! a letterboxed video frame.
//!
//! # Pipeline
//!
//! 1. Binarize ([`bandcrop_filter::binarize`])
//! 2. Locate components ([`bandcrop_region::locate_blocks`])
//! 3. Select the top-most ([`bandcrop_region::select_topmost`])
//! 4. Describe it ([`RegionDescriptor`]) and optionally render a debug band
//!
//! [`AcceptancePolicy`] holds the extra checks a cropping caller applies
//! to the result.

mod error;

pub mod descriptor;
pub mod detect;
pub mod options;
pub mod policy;
pub mod visualize;

pub use error::{DetectError, DetectResult};

pub use descriptor::{RegionDescriptor, emit_descriptor};
pub use detect::{BlockReport, detect_block, detect_block_in_file};
pub use options::{DEFAULT_MIN_BLOCK_SIZE, DetectOptions};
pub use policy::{AcceptancePolicy, Rejection};
pub use visualize::{HighlightStyle, render_debug};
