//! Spatial data structures for one packing region
//!
//! This module contains:
//! - The occupancy grid answering placement queries
//! - Region descriptions with their shape demands

/// Occupancy grid with place/remove mutations
pub mod grid;
/// Rectangular regions and their required shapes
pub mod region;

pub use grid::Grid;
pub use region::Region;
