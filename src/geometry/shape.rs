//! Normalized polyomino shapes and their rotation/reflection variants
//!
//! A shape is stored as the sorted list of cells it occupies, translated so the
//! bounding box starts at the origin. Variants are produced by rotating and
//! mirroring that cell list, re-normalizing and dropping duplicates.

use std::collections::HashSet;

/// Identifier shared by a base shape and every variant generated from it
pub type ShapeId = usize;

/// Integer cell offset inside a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column offset
    pub x: i32,
    /// Row offset
    pub y: i32,
}

impl Point {
    /// Create a point from column and row offsets
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quarter turn about the origin: `(x, y) -> (-y, x)`
    pub const fn rotate_90(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Mirror across the vertical axis: `(x, y) -> (-x, y)`
    pub const fn flip_horizontal(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

/// A normalized cell pattern
///
/// Points are sorted row-major (by `y`, then `x`) and lie inside
/// `[0, width) x [0, height)`. Unless the shape is empty, at least one point
/// touches each of the two origin axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    id: ShapeId,
    points: Vec<Point>,
    width: usize,
    height: usize,
}

impl Shape {
    /// Translate a point set so its minimum coordinates are zero
    ///
    /// Duplicate points collapse into one. An empty point set yields a
    /// zero-area shape with a `0 x 0` bounding box.
    pub fn normalize(id: ShapeId, points: impl IntoIterator<Item = Point>) -> Self {
        let mut points: Vec<Point> = points.into_iter().collect();

        let (Some(min_x), Some(min_y)) = (
            points.iter().map(|p| p.x).min(),
            points.iter().map(|p| p.y).min(),
        ) else {
            return Self {
                id,
                points,
                width: 0,
                height: 0,
            };
        };

        for point in &mut points {
            point.x -= min_x;
            point.y -= min_y;
        }
        points.sort_unstable_by_key(|p| (p.y, p.x));
        points.dedup();

        let width = points.iter().map(|p| p.x).max().map_or(0, |x| x as usize + 1);
        let height = points.iter().map(|p| p.y).max().map_or(0, |y| y as usize + 1);

        Self {
            id,
            points,
            width,
            height,
        }
    }

    /// Build a shape from text rows where `#` marks an occupied cell
    ///
    /// Every other character is treated as empty.
    pub fn from_pattern<I>(id: ShapeId, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut points = Vec::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, ch) in row.as_ref().chars().enumerate() {
                if ch == '#' {
                    points.push(Point::new(x as i32, y as i32));
                }
            }
        }
        Self::normalize(id, points)
    }

    /// Generate the deduplicated rotation/reflection variants of this shape
    ///
    /// Visits the four quarter-turn states and, at each, the horizontal mirror
    /// of that state. The first occurrence of every distinct point set is kept,
    /// so the output order is fixed: rotation 0, its mirror, rotation 1, its
    /// mirror, and so on. Always returns between 1 and 8 shapes, all carrying
    /// this shape's id.
    pub fn variants(&self) -> Vec<Self> {
        let mut seen: HashSet<Vec<Point>> = HashSet::new();
        let mut unique = Vec::with_capacity(8);

        let mut current = Self::normalize(self.id, self.points.iter().copied());
        for _ in 0..4 {
            let mirrored = current.transformed(Point::flip_horizontal);
            let next = current.transformed(Point::rotate_90);

            for candidate in [current, mirrored] {
                if seen.insert(candidate.points.clone()) {
                    unique.push(candidate);
                }
            }

            current = next;
        }

        unique
    }

    fn transformed(&self, transform: impl Fn(Point) -> Point) -> Self {
        Self::normalize(self.id, self.points.iter().map(|&p| transform(p)))
    }

    /// Shape id shared with the base shape
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// Occupied cells in canonical order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of occupied cells
    pub const fn area(&self) -> usize {
        self.points.len()
    }

    /// Bounding-box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Bounding-box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Absolute `(x, y)` cells covered when the bounding box starts at the origin
    pub fn cells_at(
        &self,
        origin_x: usize,
        origin_y: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.points
            .iter()
            .map(move |p| (origin_x + p.x as usize, origin_y + p.y as usize))
    }
}
