//! Acceptance policy for detected blocks
//!
//! Detection itself reports any block it finds. Callers that crop frames
//! usually also want to drop blocks too short to be content or starting
//! too far down the frame; [`AcceptancePolicy`] expresses those checks.

use crate::descriptor::RegionDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a detected block was not accepted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Block is shorter than the policy minimum
    #[error("block height {height} is below the minimum {min_height}")]
    TooShort { height: u32, min_height: u32 },

    /// Block starts below the allowed fraction of the frame
    #[error("block starts at row {start_y}, below the limit {limit}")]
    StartsTooLow { start_y: u32, limit: f64 },
}

/// Thresholds applied to a [`RegionDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptancePolicy {
    /// Smallest acceptable block height
    pub min_height: u32,
    /// Largest acceptable `start_y / frame_height`
    pub max_start_fraction: f64,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self {
            min_height: 20,
            max_start_fraction: 0.8,
        }
    }
}

impl AcceptancePolicy {
    /// Set the minimum height
    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the maximum start fraction
    pub fn with_max_start_fraction(mut self, fraction: f64) -> Self {
        self.max_start_fraction = fraction;
        self
    }

    /// Check a descriptor against this policy for a frame of `frame_height`
    /// rows.
    pub fn evaluate(&self, descriptor: &RegionDescriptor, frame_height: u32) -> Result<(), Rejection> {
        if descriptor.height < self.min_height {
            return Err(Rejection::TooShort {
                height: descriptor.height,
                min_height: self.min_height,
            });
        }
        let limit = self.max_start_fraction * frame_height as f64;
        if descriptor.start_y as f64 > limit {
            return Err(Rejection::StartsTooLow {
                start_y: descriptor.start_y,
                limit,
            });
        }
        Ok(())
    }
}
