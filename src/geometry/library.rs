//! Shape library with variant lists precomputed once per puzzle

use log::debug;

use crate::geometry::shape::{Shape, ShapeId};

/// Variant lists for every base shape, indexed by shape id
///
/// Ids need not be contiguous; missing ids have no variants, which makes any
/// item demanding them unplaceable.
#[derive(Debug, Clone, Default)]
pub struct ShapeLibrary {
    variants: Vec<Vec<Shape>>,
}

impl ShapeLibrary {
    /// Precompute variants for each base shape
    ///
    /// When two shapes share an id the later one wins.
    pub fn new(shapes: &[Shape]) -> Self {
        let slots = shapes.iter().map(|s| s.id() + 1).max().unwrap_or(0);
        let mut variants = vec![Vec::new(); slots];

        for shape in shapes {
            if let Some(slot) = variants.get_mut(shape.id()) {
                *slot = shape.variants();
            }
        }

        debug!(
            "shape library: {} shapes, {} variants",
            shapes.len(),
            variants.iter().map(Vec::len).sum::<usize>()
        );

        Self { variants }
    }

    /// Variants of a shape in generation order; empty for unknown ids
    pub fn variants(&self, id: ShapeId) -> &[Shape] {
        self.variants
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cell count of a shape, or `None` if the id is unknown
    pub fn area(&self, id: ShapeId) -> Option<usize> {
        self.variants(id).first().map(Shape::area)
    }

    /// Ids that have at least one variant, ascending
    pub fn shape_ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.variants
            .iter()
            .enumerate()
            .filter(|(_, variants)| !variants.is_empty())
            .map(|(id, _)| id)
    }
}
