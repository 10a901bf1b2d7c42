//! Debug rendering of detected blocks

use crate::descriptor::RegionDescriptor;
use crate::DetectResult;
use bandcrop_core::{Color, Raster};
use serde::{Deserialize, Serialize};

/// Appearance of the highlight band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    /// Band thickness in rows
    pub thickness: u32,
    /// Band color
    pub color: Color,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            thickness: 2,
            color: Color::RED,
        }
    }
}

/// Paint a full-width band at the top of the detected block.
///
/// Works on a copy of `source`; the band covers rows
/// `[start_y, start_y + thickness)` clipped to the frame.
pub fn render_debug(
    source: &Raster,
    descriptor: &RegionDescriptor,
    style: &HighlightStyle,
) -> DetectResult<Raster> {
    let mut out = source.to_mut();
    let painted = out.render_hband(descriptor.start_y, style.thickness, style.color)?;
    log::trace!("debug band at row {}: {} pixels", descriptor.start_y, painted);
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_rows() {
        let src = Raster::new_filled(8, 8, bandcrop_core::color::compose_rgb(255, 255, 255)).unwrap();
        let d = RegionDescriptor {
            start_y: 3,
            height: 4,
        };
        let out = render_debug(&src, &d, &HighlightStyle::default()).unwrap();
        let diff = src.diff_rows(&out).unwrap();
        assert_eq!(diff.rows, vec![3, 4]);
        assert_eq!(diff.n_diff, 16);
        assert_eq!(out.get_rgb(0, 3), Some((255, 0, 0)));
        // source untouched
        assert_eq!(src.get_rgb(0, 3), Some((255, 255, 255)));
    }

    #[test]
    fn test_band_clipped_at_bottom() {
        let src = Raster::new(4, 4).unwrap();
        let d = RegionDescriptor {
            start_y: 3,
            height: 1,
        };
        let style = HighlightStyle {
            thickness: 5,
            color: Color::GREEN,
        };
        let out = render_debug(&src, &d, &style).unwrap();
        assert_eq!(src.diff_rows(&out).unwrap().rows, vec![3]);
    }
}
