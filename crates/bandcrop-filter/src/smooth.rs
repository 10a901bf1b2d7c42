//! Smoothing pass applied before thresholding

use crate::block_conv::blockconv_luma;
use crate::rank::median_filter_luma;
use crate::{FilterError, FilterResult};
use bandcrop_core::LumaMap;
use serde::{Deserialize, Serialize};

/// Largest smoothing radius accepted.
pub const MAX_SMOOTHING_RADIUS: u32 = 32;

/// Radius of the default smoothing window (5x5).
pub const DEFAULT_SMOOTHING_RADIUS: u32 = 2;

/// Noise suppression applied to the luminance map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Smoothing {
    /// Threshold the raw luminance
    None,
    /// Block average over a `(2*radius + 1)` square
    Box { radius: u32 },
    /// Median over a `(2*radius + 1)` square
    Median { radius: u32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Median {
            radius: DEFAULT_SMOOTHING_RADIUS,
        }
    }
}

impl Smoothing {
    /// Window radius, 0 for [`Smoothing::None`].
    pub fn radius(&self) -> u32 {
        match *self {
            Smoothing::None => 0,
            Smoothing::Box { radius } | Smoothing::Median { radius } => radius,
        }
    }

    /// Check the radius is within [`MAX_SMOOTHING_RADIUS`].
    pub fn validate(&self) -> FilterResult<()> {
        if self.radius() > MAX_SMOOTHING_RADIUS {
            return Err(FilterError::InvalidParameters(format!(
                "smoothing radius {} exceeds {}",
                self.radius(),
                MAX_SMOOTHING_RADIUS
            )));
        }
        Ok(())
    }

    /// Apply this smoothing to a luminance map.
    pub fn apply(&self, map: &LumaMap) -> FilterResult<LumaMap> {
        self.validate()?;
        match *self {
            Smoothing::None => Ok(map.clone()),
            Smoothing::Box { radius } => blockconv_luma(map, radius),
            Smoothing::Median { radius } => median_filter_luma(map, radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_median_5x5() {
        assert_eq!(Smoothing::default(), Smoothing::Median { radius: 2 });
        assert_eq!(Smoothing::default().radius(), 2);
        assert_eq!(Smoothing::None.radius(), 0);
    }

    #[test]
    fn test_radius_limit() {
        let map = LumaMap::new_filled(4, 4, 0.0).unwrap();
        let too_big = Smoothing::Box {
            radius: MAX_SMOOTHING_RADIUS + 1,
        };
        assert!(matches!(
            too_big.apply(&map),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(Smoothing::Box { radius: 32 }.validate().is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Smoothing::Box { radius: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"box","radius":3}"#);
        let back: Smoothing = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
        assert_eq!(back, Smoothing::None);
    }
}
