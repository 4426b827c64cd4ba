//! Occupancy grid for a single region
//!
//! Each cell is either empty or owned by the shape id placed over it. The grid
//! is mutated in place by the solver: `place` and `remove` are exact inverses,
//! so backtracking never needs to copy grid state.

use std::fmt;

use ndarray::Array2;

use crate::geometry::{Shape, ShapeId};

/// Width x height matrix of cells, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<ShapeId>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Owner of the cell at `(x, y)`; `None` when empty or out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<ShapeId> {
        self.cells.get([y, x]).copied().flatten()
    }

    /// Whether `(x, y)` lies inside the grid and is empty
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        matches!(self.cells.get([y, x]), Some(None))
    }

    /// Whether a variant fits with its bounding box starting at the origin
    ///
    /// True iff the bounding box lies fully inside the grid and every covered
    /// cell is currently empty.
    pub fn can_place(&self, variant: &Shape, origin_x: usize, origin_y: usize) -> bool {
        if origin_x + variant.width() > self.width() || origin_y + variant.height() > self.height()
        {
            return false;
        }

        variant
            .cells_at(origin_x, origin_y)
            .all(|(x, y)| self.is_empty_at(x, y))
    }

    /// Write the variant's id into every covered cell
    ///
    /// Callers must have checked [`Grid::can_place`] for the same arguments;
    /// nothing is re-validated here.
    pub fn place(&mut self, variant: &Shape, origin_x: usize, origin_y: usize) {
        for (x, y) in variant.cells_at(origin_x, origin_y) {
            if let Some(cell) = self.cells.get_mut([y, x]) {
                *cell = Some(variant.id());
            }
        }
    }

    /// Clear exactly the cells a matching [`Grid::place`] call set
    pub fn remove(&mut self, variant: &Shape, origin_x: usize, origin_y: usize) {
        for (x, y) in variant.cells_at(origin_x, origin_y) {
            if let Some(cell) = self.cells.get_mut([y, x]) {
                *cell = None;
            }
        }
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Raw cell matrix
    pub const fn cells(&self) -> &Array2<Option<ShapeId>> {
        &self.cells
    }
}

/// Display character for a shape id: `A` for 0, `B` for 1, wrapping after `Z`
pub fn shape_symbol(id: ShapeId) -> char {
    char::from(b'A' + (id % 26) as u8)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let symbol = cell.map_or('.', shape_symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
