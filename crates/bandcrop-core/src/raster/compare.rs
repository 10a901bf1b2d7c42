//! Image comparison operations
//!
//! Exact, pixel-level comparison between two frames of equal size.

use super::Raster;
use crate::error::{Error, Result};

/// Summary of where two rasters differ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDiff {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// Rows containing at least one differing pixel, ascending
    pub rows: Vec<u32>,
}

impl RowDiff {
    /// Check whether the rasters were identical.
    pub fn is_equal(&self) -> bool {
        self.n_diff == 0
    }

    /// Check whether every differing row lies in `[start, end)`.
    pub fn confined_to_rows(&self, start: u32, end: u32) -> bool {
        self.rows.iter().all(|&y| y >= start && y < end)
    }
}

impl Raster {
    fn check_same_size(&self, other: &Raster) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    /// Check if two images are exactly equal, pixel for pixel.
    pub fn equals(&self, other: &Raster) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Locate the pixels and rows that differ between two rasters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn diff_rows(&self, other: &Raster) -> Result<RowDiff> {
        self.check_same_size(other)?;

        let mut diff = RowDiff::default();
        for y in 0..self.height() {
            let n = self
                .row_data(y)
                .iter()
                .zip(other.row_data(y))
                .filter(|(a, b)| a != b)
                .count() as u64;
            if n > 0 {
                diff.n_diff += n;
                diff.rows.push(y);
            }
        }
        Ok(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_equal_rasters() {
        let a = Raster::new(5, 5).unwrap();
        let b: Raster = a.to_mut().into();
        assert!(a.equals(&b));
        assert!(a.diff_rows(&b).unwrap().is_equal());
    }

    #[test]
    fn test_diff_rows() {
        let a = Raster::new(5, 5).unwrap();
        let mut b = a.to_mut();
        b.render_hband(3, 1, Color::WHITE).unwrap();
        let b: Raster = b.into();

        let diff = a.diff_rows(&b).unwrap();
        assert_eq!(diff.n_diff, 5);
        assert_eq!(diff.rows, vec![3]);
        assert!(diff.confined_to_rows(3, 4));
        assert!(!diff.confined_to_rows(0, 3));
    }

    #[test]
    fn test_size_mismatch() {
        let a = Raster::new(5, 5).unwrap();
        let b = Raster::new(5, 6).unwrap();
        assert!(!a.equals(&b));
        assert!(matches!(
            a.diff_rows(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
