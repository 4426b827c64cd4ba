//! Item queue construction for one region
//!
//! Items are sorted once, largest area first with ties broken by ascending
//! shape id. The order is deterministic and doubles as the search's piece
//! ordering heuristic.

use crate::geometry::{ShapeId, ShapeLibrary};
use crate::spatial::Region;

/// One required copy of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Shape to place
    pub shape_id: ShapeId,
    /// Cells the shape covers; zero for ids missing from the library
    pub area: usize,
}

/// Build the sorted item queue for a region
pub fn build_items(region: &Region, library: &ShapeLibrary) -> Vec<Item> {
    let mut items: Vec<Item> = region
        .required
        .iter()
        .map(|&shape_id| Item {
            shape_id,
            area: library.area(shape_id).unwrap_or(0),
        })
        .collect();

    items.sort_by(|a, b| {
        b.area
            .cmp(&a.area)
            .then_with(|| a.shape_id.cmp(&b.shape_id))
    });
    items
}

/// Sum of item areas
pub fn total_area(items: &[Item]) -> usize {
    items.iter().map(|item| item.area).sum()
}

/// Whether the items cannot possibly fit, judged by area alone
pub fn exceeds_capacity(region: &Region, items: &[Item]) -> bool {
    total_area(items) > region.capacity()
}
