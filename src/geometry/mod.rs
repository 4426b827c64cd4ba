//! Shape geometry for the packer
//!
//! This module contains:
//! - Point and shape types with canonical normalization
//! - Rotation and reflection variant generation
//! - The shape library indexing precomputed variants by shape id

/// Precomputed variant lists indexed by shape id
pub mod library;
/// Points, normalized shapes and dihedral variant generation
pub mod shape;

pub use library::ShapeLibrary;
pub use shape::{Point, Shape, ShapeId};
