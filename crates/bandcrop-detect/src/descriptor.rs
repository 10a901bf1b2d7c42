//! Region descriptors
//!
//! The reduced `{startY, height}` form of a selected block.

use bandcrop_region::ConnectedComponent;
use serde::{Deserialize, Serialize};

/// Vertical extent of a detected block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDescriptor {
    /// First row of the block
    pub start_y: u32,
    /// Number of rows spanned
    pub height: u32,
}

impl RegionDescriptor {
    /// Describe a component by its top row and bounding-box height.
    pub fn from_component(component: &ConnectedComponent) -> Self {
        Self {
            start_y: component.min_y,
            height: component.height(),
        }
    }

    /// One past the last row of the block.
    #[inline]
    pub fn end_y(&self) -> u32 {
        self.start_y + self.height
    }
}

impl From<&ConnectedComponent> for RegionDescriptor {
    fn from(component: &ConnectedComponent) -> Self {
        Self::from_component(component)
    }
}

/// Describe the selected block, or `None` when nothing was selected.
pub fn emit_descriptor(block: Option<&ConnectedComponent>) -> Option<RegionDescriptor> {
    block.map(RegionDescriptor::from_component)
}
