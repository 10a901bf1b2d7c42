//! Connected component analysis
//!
//! Finds maximal groups of dark mask cells joined under 4- or
//! 8-connectivity. Each group is grown breadth-first from its first
//! unvisited cell in row-major order, using an explicit queue of flat
//! indices and a visited grid allocated per call.

use crate::error::{RegionError, RegionResult};
use bandcrop_core::{Box, Mask};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// A connected component of dark cells
///
/// Bounds are inclusive and tight: every member cell lies inside them and
/// each edge touches at least one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedComponent {
    /// Leftmost column
    pub min_x: u32,
    /// Rightmost column
    pub max_x: u32,
    /// Top row
    pub min_y: u32,
    /// Bottom row
    pub max_y: u32,
    /// Number of cells in this component
    pub pixel_count: u64,
}

impl ConnectedComponent {
    /// Component holding a single cell
    fn seed(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
            pixel_count: 0,
        }
    }

    #[inline]
    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }

    /// Bounding box width (`max_x - min_x + 1`)
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Bounding box height (`max_y - min_y + 1`)
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Bounding box as a [`Box`]
    pub fn bounds(&self) -> Box {
        Box::from_inclusive(
            self.min_x as i32,
            self.min_y as i32,
            self.max_x as i32,
            self.max_y as i32,
        )
    }

    /// Whether both sides of the bounding box reach `min_size`
    #[inline]
    pub fn meets_min_size(&self, min_size: u32) -> bool {
        self.width() >= min_size && self.height() >= min_size
    }
}

/// Result of [`locate_blocks`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentScan {
    /// Components meeting the minimum size, in discovery order
    pub components: Vec<ConnectedComponent>,
    /// Number of components dropped for being too small
    pub discarded: usize,
}

impl ComponentScan {
    /// Total number of components seen
    pub fn total(&self) -> usize {
        self.components.len() + self.discarded
    }
}

/// Grow the component containing `seed` and mark it visited.
fn flood_component(
    mask: &Mask,
    visited: &mut [bool],
    queue: &mut VecDeque<usize>,
    seed: usize,
    offsets: &[(i64, i64)],
) -> ConnectedComponent {
    let w = mask.width() as usize;
    let (wi, hi) = (mask.width() as i64, mask.height() as i64);
    let data = mask.data();

    let mut comp = ConnectedComponent::seed((seed % w) as u32, (seed / w) as u32);
    visited[seed] = true;
    queue.push_back(seed);

    while let Some(idx) = queue.pop_front() {
        let x = (idx % w) as i64;
        let y = (idx / w) as i64;
        comp.include(x as u32, y as u32);

        for &(dx, dy) in offsets {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= wi || ny >= hi {
                continue;
            }
            let nidx = ny as usize * w + nx as usize;
            if data[nidx] && !visited[nidx] {
                visited[nidx] = true;
                queue.push_back(nidx);
            }
        }
    }

    comp
}

/// Run one traversal, keeping components that pass `keep`.
fn scan_components(
    mask: &Mask,
    connectivity: ConnectivityType,
    keep: impl Fn(&ConnectedComponent) -> bool,
) -> ComponentScan {
    let offsets = connectivity.offsets();
    let mut visited = vec![false; mask.len()];
    let mut queue = VecDeque::new();
    let mut scan = ComponentScan::default();

    for (idx, &dark) in mask.data().iter().enumerate() {
        if !dark || visited[idx] {
            continue;
        }
        let comp = flood_component(mask, &mut visited, &mut queue, idx, offsets);
        if keep(&comp) {
            scan.components.push(comp);
        } else {
            scan.discarded += 1;
        }
    }

    scan
}

/// Find all connected components of dark cells in a mask
///
/// Components are returned in row-major order of their first cell. This
/// never fails; the `Result` matches [`locate_blocks`].
///
/// # Examples
///
/// ```
/// use bandcrop_core::Mask;
/// use bandcrop_region::{ConnectivityType, find_connected_components};
///
/// let mut mask = Mask::new(10, 10).unwrap();
/// mask.set(1, 1, true).unwrap();
/// mask.set(2, 2, true).unwrap();
///
/// let eight = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
/// let four = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
/// assert_eq!(eight.len(), 1);
/// assert_eq!(four.len(), 2);
/// ```
pub fn find_connected_components(
    mask: &Mask,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    Ok(scan_components(mask, connectivity, |_| true).components)
}

/// Locate components whose bounding box is at least `min_block_size` on
/// both sides.
///
/// Smaller components are still traversed, so their cells are consumed
/// exactly once, and are only counted in [`ComponentScan::discarded`].
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `min_block_size` is 0.
pub fn locate_blocks(
    mask: &Mask,
    min_block_size: u32,
    connectivity: ConnectivityType,
) -> RegionResult<ComponentScan> {
    if min_block_size == 0 {
        return Err(RegionError::InvalidParameters(
            "min_block_size must be positive".to_string(),
        ));
    }

    let scan = scan_components(mask, connectivity, |c| c.meets_min_size(min_block_size));
    log::debug!(
        "located {} block(s) of at least {}x{} ({} smaller discarded)",
        scan.components.len(),
        min_block_size,
        min_block_size,
        scan.discarded
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let mask = Mask::new(8, 8).unwrap();
        let comps = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
        assert!(comps.is_empty());
        let scan = locate_blocks(&mask, 1, ConnectivityType::EightWay).unwrap();
        assert_eq!(scan.total(), 0);
    }

    #[test]
    fn test_diagonal_connectivity() {
        let mask = Mask::from_fn(4, 4, |x, y| x == y).unwrap();
        let eight = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 4);
        assert_eq!((eight[0].width(), eight[0].height()), (4, 4));

        let four = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.len(), 4);
        assert!(four.iter().all(|c| c.pixel_count == 1));
    }

    #[test]
    fn test_tight_bounds_of_l_shape() {
        let mut mask = Mask::new(10, 10).unwrap();
        mask.set_rect(2, 3, 2, 7);
        mask.set_rect(2, 7, 6, 7);
        let comps = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
        assert_eq!(comps.len(), 1);
        let c = comps[0];
        assert_eq!((c.min_x, c.max_x, c.min_y, c.max_y), (2, 6, 3, 7));
        assert_eq!(c.pixel_count, 9);
        assert_eq!(c.bounds(), Box::new_unchecked(2, 3, 5, 5));
    }

    #[test]
    fn test_u_shape_seed_order() {
        // Two arms joined at the bottom form one component, found from the
        // top-left arm.
        let mut mask = Mask::new(7, 5).unwrap();
        mask.set_rect(0, 0, 0, 4);
        mask.set_rect(6, 0, 6, 4);
        mask.set_rect(0, 4, 6, 4);
        let comps = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].width(), 7);
        assert_eq!(comps[0].pixel_count, 15);
    }

    #[test]
    fn test_row_major_discovery() {
        let mut mask = Mask::new(10, 10).unwrap();
        mask.set_rect(6, 1, 7, 2);
        mask.set_rect(1, 5, 2, 6);
        mask.set_rect(0, 1, 1, 1);
        let comps = find_connected_components(&mask, ConnectivityType::EightWay).unwrap();
        let starts: Vec<_> = comps.iter().map(|c| (c.min_x, c.min_y)).collect();
        assert_eq!(starts, vec![(0, 1), (6, 1), (1, 5)]);
    }

    #[test]
    fn test_locate_blocks_size_filter() {
        let mut mask = Mask::new(20, 20).unwrap();
        // 5x5 block, 5x4 block, 4x5 block
        mask.set_rect(0, 0, 4, 4);
        mask.set_rect(10, 0, 14, 3);
        mask.set_rect(0, 10, 3, 14);
        let scan = locate_blocks(&mask, 5, ConnectivityType::EightWay).unwrap();
        assert_eq!(scan.components.len(), 1);
        assert_eq!(scan.discarded, 2);
        assert_eq!(scan.components[0].bounds(), Box::new_unchecked(0, 0, 5, 5));
    }

    #[test]
    fn test_locate_blocks_rejects_zero() {
        let mask = Mask::new(4, 4).unwrap();
        assert!(matches!(
            locate_blocks(&mask, 0, ConnectivityType::EightWay),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_default_connectivity() {
        assert_eq!(ConnectivityType::default(), ConnectivityType::EightWay);
    }
}
