//! Independent check that a packing honours the grid invariants
//!
//! Recomputes coverage from the placement trace alone and compares it with
//! the grid, so a bug in `place`/`remove` bookkeeping cannot hide itself.

use bitvec::prelude::*;

use crate::algorithm::frame::Placement;
use crate::geometry::ShapeLibrary;
use crate::io::error::{Result, verification_error};
use crate::spatial::Grid;

/// Verify that placements cover disjoint in-bounds cells matching the grid
///
/// # Errors
///
/// Returns [`crate::PackError::Verification`] if:
/// - A placement names a variant missing from the library
/// - A placed cell lies outside the grid
/// - Two placements share a cell
/// - A placed cell is not owned by the placement's shape in the grid
/// - The grid holds occupied cells no placement accounts for
pub fn verify_packing(grid: &Grid, placements: &[Placement], library: &ShapeLibrary) -> Result<()> {
    let width = grid.width();
    let height = grid.height();
    let mut covered = bitvec![0; width * height];
    let mut expected = 0;

    for placement in placements {
        let variant = library
            .variants(placement.shape_id)
            .get(placement.variant_index)
            .ok_or_else(|| {
                verification_error(&format!(
                    "shape {} has no variant {}",
                    placement.shape_id, placement.variant_index
                ))
            })?;

        for (x, y) in variant.cells_at(placement.origin_x, placement.origin_y) {
            if x >= width || y >= height {
                return Err(verification_error(&format!(
                    "item {} covers ({x}, {y}) outside the {width}x{height} grid",
                    placement.item_index
                )));
            }
            if covered.replace(y * width + x, true) {
                return Err(verification_error(&format!(
                    "item {} overlaps another item at ({x}, {y})",
                    placement.item_index
                )));
            }
            if grid.cell(x, y) != Some(placement.shape_id) {
                return Err(verification_error(&format!(
                    "cell ({x}, {y}) is not owned by shape {}",
                    placement.shape_id
                )));
            }
            expected += 1;
        }
    }

    let occupied = grid.occupied_count();
    if occupied != expected {
        return Err(verification_error(&format!(
            "grid has {occupied} occupied cells but placements cover {expected}"
        )));
    }

    Ok(())
}
