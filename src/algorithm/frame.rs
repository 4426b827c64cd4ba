//! Explicit backtracking frames
//!
//! A frame replaces one level of a recursive search: it remembers which item
//! it is placing, where its scan stopped, and the placement it made so that
//! the placement can be undone when the search returns to it.

use crate::geometry::{Shape, ShapeId};
use crate::spatial::Grid;

/// Resumable scan position: grid cell plus variant index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Current row
    pub row: usize,
    /// Current column
    pub col: usize,
    /// Next variant to try at the current cell
    pub variant: usize,
}

/// One shape variant placed at one grid origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the solver's sorted item queue
    pub item_index: usize,
    /// Shape that was placed
    pub shape_id: ShapeId,
    /// Index into the shape's variant list
    pub variant_index: usize,
    /// Column of the bounding box origin
    pub origin_x: usize,
    /// Row of the bounding box origin
    pub origin_y: usize,
}

/// One level of backtracking state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Item this frame is trying to place
    pub item_index: usize,
    /// Where the scan resumes
    pub cursor: Cursor,
    /// Placement made by this frame, kept for undo
    pub placed: Option<Placement>,
}

impl Frame {
    /// Fresh frame scanning from the top-left cell and first variant
    pub fn new(item_index: usize) -> Self {
        Self {
            item_index,
            cursor: Cursor::default(),
            placed: None,
        }
    }
}

/// Advance the cursor to the next `(cell, variant)` the grid accepts
///
/// Cells are visited in row-major order and only empty cells are tried; at
/// each cell the variants are tried in order from `cursor.variant`. Returns
/// the accepted variant with the cursor left on it, or `None` with the cursor
/// past the last row once every remaining candidate has been rejected.
pub fn scan_for_placement<'s>(
    grid: &Grid,
    variants: &'s [Shape],
    cursor: &mut Cursor,
) -> Option<&'s Shape> {
    while cursor.row < grid.height() {
        while cursor.col < grid.width() {
            if grid.is_empty_at(cursor.col, cursor.row) {
                while let Some(variant) = variants.get(cursor.variant) {
                    if grid.can_place(variant, cursor.col, cursor.row) {
                        return Some(variant);
                    }
                    cursor.variant += 1;
                }
            }
            cursor.variant = 0;
            cursor.col += 1;
        }
        cursor.col = 0;
        cursor.row += 1;
    }
    None
}
