//! Synthetic frame builders
//!
//! Deterministic frames for regression tests: flat backgrounds, painted
//! rectangles and seeded noise.

use crate::TestResult;
use bandcrop_core::{Box, Color, Raster, color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A frame filled with a single color.
pub fn solid_frame(width: u32, height: u32, c: Color) -> TestResult<Raster> {
    Ok(Raster::new_filled(
        width,
        height,
        color::compose_rgb(c.r, c.g, c.b),
    )?)
}

/// A white frame.
pub fn light_frame(width: u32, height: u32) -> TestResult<Raster> {
    solid_frame(width, height, Color::WHITE)
}

/// A white frame with each `(min_x, min_y, max_x, max_y)` rectangle
/// (inclusive) painted in `c`.
pub fn frame_with_rects(
    width: u32,
    height: u32,
    rects: &[(u32, u32, u32, u32)],
    c: Color,
) -> TestResult<Raster> {
    let mut raster = light_frame(width, height)?.to_mut();
    for &(x0, y0, x1, y1) in rects {
        let b = Box::from_inclusive(x0 as i32, y0 as i32, x1 as i32, y1 as i32);
        raster.fill_box_color(&b, c)?;
    }
    Ok(raster.into())
}

/// A frame of uniformly random opaque RGB pixels.
pub fn noise_frame(width: u32, height: u32, seed: u64) -> TestResult<Raster> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width as usize * height as usize)
        .map(|_| color::compose_rgb(rng.random(), rng.random(), rng.random()))
        .collect();
    Ok(Raster::from_pixels(width, height, 3, pixels)?)
}

/// Copy `raster` and paint `count` isolated single pixels in `c`.
pub fn with_specks(raster: &Raster, count: usize, seed: u64, c: Color) -> TestResult<Raster> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = raster.to_mut();
    for _ in 0..count {
        let x = rng.random_range(0..raster.width());
        let y = rng.random_range(0..raster.height());
        out.set_rgb(x, y, c.r, c.g, c.b)?;
    }
    Ok(out.into())
}
