//! Detection options

use crate::visualize::HighlightStyle;
use crate::{DetectError, DetectResult};
use bandcrop_filter::{BinarizeOptions, DEFAULT_PIXEL_THRESHOLD, Smoothing};
use bandcrop_region::ConnectivityType;
use serde::{Deserialize, Serialize};

/// Default minimum block side in pixels.
pub const DEFAULT_MIN_BLOCK_SIZE: u32 = 120;

/// Options for [`detect_block`](crate::detect_block)
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectOptions {
    /// Minimum width and height of a block
    pub min_block_size: u32,
    /// Darkness threshold; see [`BinarizeOptions::pixel_threshold`]
    pub pixel_threshold: u8,
    /// Smoothing before thresholding
    pub smoothing: Smoothing,
    /// Pixel adjacency used to group dark cells
    pub connectivity: ConnectivityType,
    /// Render a debug image when a block is found
    pub debug: bool,
    /// Style of the debug band
    pub highlight: HighlightStyle,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            pixel_threshold: DEFAULT_PIXEL_THRESHOLD,
            smoothing: Smoothing::default(),
            connectivity: ConnectivityType::default(),
            debug: false,
            highlight: HighlightStyle::default(),
        }
    }
}

impl DetectOptions {
    /// Create options with the given size and threshold
    pub fn new(min_block_size: u32, pixel_threshold: u8) -> Self {
        Self {
            min_block_size,
            pixel_threshold,
            ..Self::default()
        }
    }

    /// Set the minimum block size
    pub fn with_min_block_size(mut self, size: u32) -> Self {
        self.min_block_size = size;
        self
    }

    /// Set the darkness threshold
    pub fn with_pixel_threshold(mut self, threshold: u8) -> Self {
        self.pixel_threshold = threshold;
        self
    }

    /// Set the smoothing
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Enable or disable the debug image
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the debug band style
    pub fn with_highlight(mut self, highlight: HighlightStyle) -> Self {
        self.highlight = highlight;
        self
    }

    /// Binarization part of these options
    pub fn binarize_options(&self) -> BinarizeOptions {
        BinarizeOptions::new(self.pixel_threshold).with_smoothing(self.smoothing)
    }

    /// Check the options before use.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::InvalidParameter`] for a zero block size, an
    /// oversized smoothing radius, or a zero band thickness.
    pub fn validate(&self) -> DetectResult<()> {
        if self.min_block_size == 0 {
            return Err(DetectError::InvalidParameter(
                "min_block_size must be positive".to_string(),
            ));
        }
        self.smoothing
            .validate()
            .map_err(|e| DetectError::InvalidParameter(e.to_string()))?;
        if self.highlight.thickness == 0 {
            return Err(DetectError::InvalidParameter(
                "highlight thickness must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
