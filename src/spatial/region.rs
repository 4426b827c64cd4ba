//! Rectangular regions and the shapes they must hold

use crate::geometry::ShapeId;
use crate::io::configuration::MAX_REGION_CELLS;

/// A rectangular container with a multiset of required shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Required shape ids, repeated once per copy
    pub required: Vec<ShapeId>,
}

impl Region {
    /// Create a region from an explicit list of required shape ids
    pub const fn new(width: usize, height: usize, required: Vec<ShapeId>) -> Self {
        Self {
            width,
            height,
            required,
        }
    }

    /// Create a region from per-id copy counts, where `counts[i]` copies of shape `i` are required
    pub fn from_counts(width: usize, height: usize, counts: &[usize]) -> Self {
        let required = counts
            .iter()
            .enumerate()
            .flat_map(|(id, &count)| std::iter::repeat_n(id, count))
            .collect();
        Self::new(width, height, required)
    }

    /// Total number of cells, saturating at `usize::MAX`
    pub const fn capacity(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Whether a grid for this region stays within `MAX_REGION_CELLS`
    ///
    /// A zero-length side counts as one, so `0xN` regions are still bounded by `N`.
    pub fn within_cell_limit(&self) -> bool {
        self.width
            .max(1)
            .checked_mul(self.height.max(1))
            .is_some_and(|cells| cells <= MAX_REGION_CELLS)
    }
}
