//! Block selection
//!
//! Picks the candidate block closest to the top of the frame.

use crate::conncomp::ConnectedComponent;

/// Keep only components at least `min_size` wide and tall.
pub fn filter_by_min_size(components: &[ConnectedComponent], min_size: u32) -> Vec<ConnectedComponent> {
    components
        .iter()
        .filter(|c| c.meets_min_size(min_size))
        .copied()
        .collect()
}

/// Select the component with the smallest `min_y`.
///
/// Which of several components sharing the smallest `min_y` is returned
/// is unspecified, but fixed for a given input. Returns `None` for an
/// empty slice.
pub fn select_topmost(components: &[ConnectedComponent]) -> Option<&ConnectedComponent> {
    let mut best: Option<&ConnectedComponent> = None;
    for c in components {
        match best {
            Some(b) if b.min_y <= c.min_y => {}
            _ => best = Some(c),
        }
    }
    if let Some(b) = best {
        log::debug!(
            "selected block at rows {}..={} (cols {}..={})",
            b.min_y,
            b.max_y,
            b.min_x,
            b.max_x
        );
    }
    best
}
