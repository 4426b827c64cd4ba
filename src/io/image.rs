//! PNG export of region grids with one color per shape id

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::geometry::ShapeId;
use crate::io::configuration::{
    CELL_PIXELS, EMPTY_CELL_COLOR, GOLDEN_ANGLE_DEGREES, SHAPE_LIGHTNESS, SHAPE_SATURATION,
};
use crate::io::error::{PackError, Result, WithPath, invalid_parameter};
use crate::spatial::Grid;

/// Stable display color for a shape id
///
/// Hues advance by the golden angle so neighbouring ids stay distinguishable.
pub fn shape_color(id: ShapeId) -> [u8; 4] {
    let hue = (id as f32 * GOLDEN_ANGLE_DEGREES) % 360.0;
    let [r, g, b] = hsl_to_rgb(hue, SHAPE_SATURATION, SHAPE_LIGHTNESS);
    [r, g, b, 255]
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let chroma = (1.0 - lightness.mul_add(2.0, -1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let offset = lightness - chroma / 2.0;
    let channel = |value: f32| ((value + offset) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

/// Rasterize a cell matrix, `CELL_PIXELS` pixels per cell
///
/// `owner` reports the shape occupying column `x`, row `y`.
pub fn render_cells<F>(width: usize, height: usize, owner: F) -> RgbaImage
where
    F: Fn(usize, usize) -> Option<ShapeId>,
{
    ImageBuffer::from_fn(
        width as u32 * CELL_PIXELS,
        height as u32 * CELL_PIXELS,
        |px, py| {
            let x = (px / CELL_PIXELS) as usize;
            let y = (py / CELL_PIXELS) as usize;
            Rgba(owner(x, y).map_or(EMPTY_CELL_COLOR, shape_color))
        },
    )
}

/// Rasterize the current occupancy of a grid
pub fn render_grid_image(grid: &Grid) -> RgbaImage {
    render_cells(grid.width(), grid.height(), |x, y| grid.cell(x, y))
}

/// Export a grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"cannot render a grid without cells",
        ));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    render_grid_image(grid)
        .save(output_path)
        .map_err(|source| PackError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
