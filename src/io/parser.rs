//! Puzzle text format
//!
//! A puzzle is a list of shape blocks followed by region lines:
//!
//! ```text
//! 0:
//! ###
//! ##.
//! ##.
//!
//! 4x4: 2
//! 12x5: 6
//! ```
//!
//! A shape block is an `<id>:` header followed by rows of `#` (occupied) and
//! `.` (empty). A region line is `<width>x<height>:` followed by one count per
//! shape id, starting at id 0. Blank lines separate blocks.

use log::debug;

use crate::geometry::{Shape, ShapeId};
use crate::io::configuration::MAX_REGION_CELLS;
use crate::io::error::{Result, parse_error};
use crate::spatial::Region;

/// Shapes and regions read from one puzzle text
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    /// Base shapes in the order they were declared
    pub shapes: Vec<Shape>,
    /// Regions in the order they were declared
    pub regions: Vec<Region>,
}

struct OpenBlock {
    id: ShapeId,
    header_line: usize,
    rows: Vec<String>,
}

impl OpenBlock {
    fn close(self) -> Result<Shape> {
        if self.rows.is_empty() {
            return Err(parse_error(
                self.header_line,
                &format!("shape {} has no rows", self.id),
            ));
        }
        Ok(Shape::from_pattern(self.id, &self.rows))
    }
}

/// Parse puzzle text into shapes and regions
///
/// # Errors
///
/// Returns [`crate::PackError::Parse`] with the 1-based line number of the
/// first malformed header, number, or shape row
pub fn parse_puzzle(input: &str) -> Result<Puzzle> {
    let mut puzzle = Puzzle::default();
    let mut block: Option<OpenBlock> = None;

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(open) = block.take() {
                puzzle.shapes.push(open.close()?);
            }
            continue;
        }

        match line.split_once(':') {
            Some((head, rest)) if head.contains('x') => {
                if let Some(open) = block.take() {
                    puzzle.shapes.push(open.close()?);
                }
                puzzle
                    .regions
                    .push(parse_region(line_number, head, rest)?);
            }
            Some((head, rest)) => {
                if let Some(open) = block.take() {
                    puzzle.shapes.push(open.close()?);
                }
                if !rest.trim().is_empty() {
                    return Err(parse_error(
                        line_number,
                        &format!("unexpected text after shape header: '{}'", rest.trim()),
                    ));
                }
                let id = parse_number(line_number, head.trim(), "shape id")?;
                block = Some(OpenBlock {
                    id,
                    header_line: line_number,
                    rows: Vec::new(),
                });
            }
            None => {
                let Some(open) = block.as_mut() else {
                    return Err(parse_error(
                        line_number,
                        &format!("shape row '{line}' outside of a shape block"),
                    ));
                };
                if let Some(bad) = line.chars().find(|&ch| ch != '#' && ch != '.') {
                    return Err(parse_error(
                        line_number,
                        &format!("unexpected character '{bad}' in shape row"),
                    ));
                }
                open.rows.push(line.to_string());
            }
        }
    }

    if let Some(open) = block.take() {
        puzzle.shapes.push(open.close()?);
    }

    debug!(
        "parsed {} shapes and {} regions",
        puzzle.shapes.len(),
        puzzle.regions.len()
    );
    Ok(puzzle)
}

fn parse_region(line_number: usize, size: &str, counts: &str) -> Result<Region> {
    let Some((width, height)) = size.trim().split_once('x') else {
        return Err(parse_error(line_number, &"region size must be WxH"));
    };
    let width = parse_number(line_number, width, "region width")?;
    let height = parse_number(line_number, height, "region height")?;

    let counts = counts
        .split_whitespace()
        .map(|count| parse_number(line_number, count, "shape count"))
        .collect::<Result<Vec<_>>>()?;

    let region = Region::new(width, height, Vec::new());
    if !region.within_cell_limit() {
        return Err(parse_error(
            line_number,
            &format!("region {width}x{height} exceeds {MAX_REGION_CELLS} cells"),
        ));
    }
    let copies = counts
        .iter()
        .try_fold(0_usize, |total, &count| total.checked_add(count));
    if copies.is_none_or(|copies| copies > MAX_REGION_CELLS) {
        return Err(parse_error(
            line_number,
            &format!("region {width}x{height} demands more than {MAX_REGION_CELLS} shapes"),
        ));
    }

    Ok(Region::from_counts(width, height, &counts))
}

fn parse_number(line_number: usize, text: &str, what: &str) -> Result<usize> {
    text.parse()
        .map_err(|err| parse_error(line_number, &format!("invalid {what} '{text}': {err}")))
}
