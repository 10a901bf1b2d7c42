//! Detection pipeline
//!
//! Binarize the frame, locate blocks that are large enough, take the
//! top-most one and describe it.

use crate::descriptor::{RegionDescriptor, emit_descriptor};
use crate::options::DetectOptions;
use crate::visualize::render_debug;
use crate::DetectResult;
use bandcrop_core::Raster;
use bandcrop_filter::binarize;
use bandcrop_region::{ConnectedComponent, locate_blocks, select_topmost};
use std::path::Path;

/// Outcome of one detection
#[derive(Debug, Clone)]
pub struct BlockReport {
    /// Vertical extent of the selected block, `None` when not found
    pub descriptor: Option<RegionDescriptor>,
    /// The selected block with its full bounds
    pub block: Option<ConnectedComponent>,
    /// Number of blocks meeting the minimum size
    pub candidates: usize,
    /// Number of smaller dark regions ignored
    pub discarded: usize,
    /// Dark pixels in the binary mask
    pub dark_pixels: usize,
    /// Frame with the highlight band, when requested and found
    pub debug_image: Option<Raster>,
}

impl BlockReport {
    /// Whether a block was found
    pub fn is_found(&self) -> bool {
        self.descriptor.is_some()
    }
}

/// Find the top-most dark block in a frame.
///
/// Not finding a block is a normal outcome reported through
/// [`BlockReport::descriptor`].
///
/// # Errors
///
/// Returns [`DetectError::InvalidParameter`](crate::DetectError::InvalidParameter)
/// when `options` fail [`DetectOptions::validate`].
///
/// # Examples
///
/// ```
/// use bandcrop_core::{Box, Color, Raster, color};
/// use bandcrop_detect::{DetectOptions, detect_block};
///
/// let mut frame = Raster::new_filled(300, 300, color::compose_rgb(255, 255, 255))
///     .unwrap()
///     .to_mut();
/// frame
///     .fill_box_color(&Box::new_unchecked(0, 40, 300, 150), Color::BLACK)
///     .unwrap();
///
/// let report = detect_block(&frame.into(), &DetectOptions::new(120, 60)).unwrap();
/// let d = report.descriptor.unwrap();
/// assert_eq!((d.start_y, d.height), (40, 150));
/// ```
pub fn detect_block(raster: &Raster, options: &DetectOptions) -> DetectResult<BlockReport> {
    options.validate()?;

    let mask = binarize(raster, &options.binarize_options())?;
    let dark_pixels = mask.count_dark();
    log::debug!(
        "{}x{} frame: {} dark pixels",
        raster.width(),
        raster.height(),
        dark_pixels
    );

    let scan = locate_blocks(&mask, options.min_block_size, options.connectivity)?;
    let block = select_topmost(&scan.components).copied();
    let descriptor = emit_descriptor(block.as_ref());

    let debug_image = match descriptor {
        Some(d) if options.debug => Some(render_debug(raster, &d, &options.highlight)?),
        _ => None,
    };

    match descriptor {
        Some(d) => log::debug!("block found: start_y={} height={}", d.start_y, d.height),
        None => log::debug!(
            "no block of at least {} px found",
            options.min_block_size
        ),
    }

    Ok(BlockReport {
        descriptor,
        block,
        candidates: scan.components.len(),
        discarded: scan.discarded,
        dark_pixels,
        debug_image,
    })
}

/// Decode a frame from disk and run [`detect_block`] on it.
///
/// Decode failures are returned as
/// [`DetectError::Decode`](crate::DetectError::Decode).
pub fn detect_block_in_file<P: AsRef<Path>>(
    path: P,
    options: &DetectOptions,
) -> DetectResult<BlockReport> {
    let raster = bandcrop_io::read_image(path)?;
    detect_block(&raster, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DetectError;
    use bandcrop_core::{Box, Color, color};

    fn white(w: u32, h: u32) -> Raster {
        Raster::new_filled(w, h, color::compose_rgb(255, 255, 255)).unwrap()
    }

    #[test]
    fn test_all_white_not_found() {
        let report = detect_block(&white(200, 200), &DetectOptions::default()).unwrap();
        assert!(!report.is_found());
        assert!(report.block.is_none());
        assert_eq!(report.dark_pixels, 0);
        assert_eq!(report.candidates, 0);
    }

    #[test]
    fn test_debug_only_when_found() {
        let opts = DetectOptions::default().with_debug(true);
        let report = detect_block(&white(50, 50), &opts).unwrap();
        assert!(report.debug_image.is_none());
    }

    #[test]
    fn test_block_smaller_than_min_is_discarded() {
        let mut frame = white(300, 300).to_mut();
        frame
            .fill_box_color(&Box::new_unchecked(10, 10, 119, 200), Color::BLACK)
            .unwrap();
        let report = detect_block(&frame.into(), &DetectOptions::new(120, 60)).unwrap();
        assert!(!report.is_found());
        assert_eq!(report.discarded, 1);
    }

    #[test]
    fn test_oversized_band_is_clipped() {
        let mut frame = white(300, 300).to_mut();
        frame
            .fill_box_color(&Box::new_unchecked(0, 40, 300, 150), Color::BLACK)
            .unwrap();
        let frame: Raster = frame.into();

        let opts: DetectOptions = serde_json::from_str(
            r#"{"min_block_size":120,"pixel_threshold":60,"debug":true,
                "highlight":{"thickness":4294967295}}"#,
        )
        .unwrap();
        assert!(opts.validate().is_ok());

        let report = detect_block(&frame, &opts).unwrap();
        let debug = report.debug_image.unwrap();
        let diff = frame.diff_rows(&debug).unwrap();
        assert_eq!(diff.rows, (40..300).collect::<Vec<u32>>());
        assert_eq!(diff.n_diff, 260 * 300);
    }

    #[test]
    fn test_invalid_options() {
        let err = detect_block(&white(4, 4), &DetectOptions::new(0, 20)).unwrap_err();
        assert!(matches!(err, DetectError::InvalidParameter(_)));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = detect_block_in_file("/nonexistent/frame.png", &DetectOptions::default())
            .unwrap_err();
        assert!(matches!(err, DetectError::Decode(_)));
    }
}
