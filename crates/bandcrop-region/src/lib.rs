//! bandcrop-region - Dark region location for bandcrop
//!
//! This crate works on binary [`Mask`]s:
//!
//! - **Connected component analysis** - grouping dark cells and measuring
//!   their bounding boxes
//! - **Block selection** - size filtering and picking the top-most block
//!
//! # Examples
//!
//! ```
//! use bandcrop_core::Mask;
//! use bandcrop_region::{ConnectivityType, locate_blocks, select_topmost};
//!
//! let mut mask = Mask::new(40, 40).unwrap();
//! mask.set_rect(0, 20, 39, 35);
//! mask.set_rect(5, 2, 6, 3);
//!
//! let scan = locate_blocks(&mask, 10, ConnectivityType::EightWay).unwrap();
//! assert_eq!(scan.discarded, 1);
//! let block = select_topmost(&scan.components).unwrap();
//! assert_eq!((block.min_y, block.height()), (20, 16));
//! ```
//!
//! [`Mask`]: bandcrop_core::Mask

pub mod conncomp;
pub mod error;
pub mod select;

// Re-export core types
pub use bandcrop_core;

pub use error::{RegionError, RegionResult};

pub use conncomp::{
    ComponentScan, ConnectedComponent, ConnectivityType, find_connected_components,
    locate_blocks,
};
pub use select::{filter_by_min_size, select_topmost};
