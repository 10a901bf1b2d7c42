//! Rank filtering operations
//!
//! Median filtering of luminance maps. A median keeps straight edges in
//! place while removing isolated specks, which is what a band detector
//! wants from its smoothing pass.

use crate::FilterResult;
use bandcrop_core::LumaMap;

/// Median over a `(2*radius + 1)` square window.
///
/// The window is clipped at the border. For an even number of samples
/// the upper median is taken. A radius of 0 returns a copy.
pub fn median_filter_luma(map: &LumaMap, radius: u32) -> FilterResult<LumaMap> {
    if radius == 0 {
        return Ok(map.clone());
    }

    let w = map.width();
    let h = map.height();
    let side = 2 * radius as usize + 1;
    let mut window: Vec<f32> = Vec::with_capacity(side * side);
    let mut out = Vec::with_capacity(w as usize * h as usize);

    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(w - 1);

            window.clear();
            for wy in y0..=y1 {
                for wx in x0..=x1 {
                    window.push(map.get_unchecked(wx, wy));
                }
            }

            let mid = window.len() / 2;
            let (_, median, _) = window.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
            out.push(*median);
        }
    }

    Ok(LumaMap::from_vec(w, h, out)?)
}
