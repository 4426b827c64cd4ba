//! Resumable backtracking packer for polyomino shapes in rectangular regions
//!
//! Each region demands a multiset of shapes. The solver places them one at a
//! time in a fixed order, trying every rotation and reflection at every empty
//! cell, and undoes placements when it runs out of candidates. The search is
//! driven in bounded batches of steps so a caller can pause and resume it.

#![forbid(unsafe_code)]

/// Backtracking solver, its frames, the region driver and packing verification
pub mod algorithm;
/// Shapes, their variants and the shape library
pub mod geometry;
/// Parsing, output, logging and error handling
pub mod io;
/// Occupancy grids and region descriptions
pub mod spatial;

pub use io::error::{PackError, Result};
