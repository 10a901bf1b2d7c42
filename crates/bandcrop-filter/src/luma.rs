//! Luminance extraction

use crate::FilterResult;
use bandcrop_core::{LumaMap, Raster, color};

/// Convert a color frame into a luminance map.
///
/// Each sample is `0.299 R + 0.587 G + 0.114 B`; alpha is ignored.
pub fn luminance_map(raster: &Raster) -> FilterResult<LumaMap> {
    let data = raster
        .data()
        .iter()
        .map(|&p| color::pixel_luminance(p))
        .collect();
    Ok(LumaMap::from_vec(raster.width(), raster.height(), data)?)
}
