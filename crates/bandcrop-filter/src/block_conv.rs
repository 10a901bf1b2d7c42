//! Block convolution using integral images (summed area tables)
//!
//! Fast block average filter that runs in O(1) per pixel regardless of
//! kernel size, by precomputing an integral image (accumulator).

use crate::FilterResult;
use bandcrop_core::LumaMap;

/// Build an integral image of a luminance map.
///
/// The result has `(w + 1) * (h + 1)` entries with a zero first row and
/// column, so entry `(x, y)` holds the sum of all samples in
/// `[0, x) x [0, y)`.
///
/// The recursion is: `a(x,y) = v(x-1,y-1) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`
pub fn blockconv_accum(map: &LumaMap) -> Vec<f64> {
    let w = map.width() as usize;
    let h = map.height() as usize;
    let stride = w + 1;
    let mut acc = vec![0f64; stride * (h + 1)];

    for y in 0..h {
        let mut row_sum = 0f64;
        for x in 0..w {
            row_sum += map.get_unchecked(x as u32, y as u32) as f64;
            acc[(y + 1) * stride + x + 1] = acc[y * stride + x + 1] + row_sum;
        }
    }

    acc
}

/// Block average over a `(2*radius + 1)` square window.
///
/// The window is clipped at the image border and the sum is normalized by
/// the number of samples actually covered. A radius of 0 returns a copy.
pub fn blockconv_luma(map: &LumaMap, radius: u32) -> FilterResult<LumaMap> {
    if radius == 0 {
        return Ok(map.clone());
    }

    let w = map.width();
    let h = map.height();
    let stride = w as usize + 1;
    let acc = blockconv_accum(map);

    let mut out = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        let y0 = y.saturating_sub(radius) as usize;
        let y1 = (y + radius).min(h - 1) as usize + 1;
        for x in 0..w {
            let x0 = x.saturating_sub(radius) as usize;
            let x1 = (x + radius).min(w - 1) as usize + 1;

            // Four-corner lookup on integral image
            let sum = acc[y1 * stride + x1] - acc[y0 * stride + x1] - acc[y1 * stride + x0]
                + acc[y0 * stride + x0];
            let count = ((x1 - x0) * (y1 - y0)) as f64;
            out.push((sum / count) as f32);
        }
    }

    Ok(LumaMap::from_vec(w, h, out)?)
}
