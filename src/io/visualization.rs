//! Event capture and GIF generation for search visualization

use std::path::Path;

use image::{Delay, Frame};
use ndarray::Array2;

use crate::geometry::ShapeId;
use crate::io::configuration::{
    FINAL_FRAME_HOLD, MAX_CAPTURE_CELLS, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{PackError, Result, WithPath, invalid_parameter};
use crate::io::image::render_cells;

/// Captures the search as a bounded series of grid snapshots
///
/// Every place and remove event updates a running copy of the grid. A
/// snapshot of that copy is kept every `sample_interval` events. When the
/// snapshots reach the frame limit every other one is dropped and the
/// interval doubles, so memory stays bounded however long the search runs.
#[derive(Debug, Clone)]
pub struct VisualizationCapture {
    width: usize,
    height: usize,
    current: Array2<Option<ShapeId>>,
    snapshots: Vec<Array2<Option<ShapeId>>>,
    frame_limit: usize,
    sample_interval: usize,
    event_count: usize,
}

impl VisualizationCapture {
    /// Start an empty capture for a `width` x `height` region
    ///
    /// The frame limit is `MAX_GIF_FRAMES`, lowered for large grids so the
    /// snapshots hold at most `MAX_CAPTURE_CELLS` cells in total.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width.saturating_mul(height).max(1);
        Self {
            width,
            height,
            current: Array2::from_elem((height, width), None),
            snapshots: Vec::new(),
            frame_limit: (MAX_CAPTURE_CELLS / cells).clamp(1, MAX_GIF_FRAMES),
            sample_interval: 1,
            event_count: 0,
        }
    }

    /// Records a placement covering the given cells
    pub fn record_placement<I>(&mut self, shape_id: ShapeId, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.apply(Some(shape_id), cells);
    }

    /// Records the removal of a placement
    pub fn record_removal<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.apply(None, cells);
    }

    fn apply<I>(&mut self, owner: Option<ShapeId>, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (x, y) in cells {
            if let Some(cell) = self.current.get_mut([y, x]) {
                *cell = owner;
            }
        }
        self.event_count += 1;

        if self.event_count.is_multiple_of(self.sample_interval) {
            self.snapshots.push(self.current.clone());
            if self.snapshots.len() > self.frame_limit {
                self.thin_snapshots();
            }
        }
    }

    // Keeps the snapshots taken at multiples of twice the current interval
    fn thin_snapshots(&mut self) {
        let mut position = 0_usize;
        self.snapshots.retain(|_| {
            position += 1;
            position.is_multiple_of(2)
        });
        self.sample_interval *= 2;
    }

    /// Stored snapshots, oldest first
    pub fn snapshots(&self) -> &[Array2<Option<ShapeId>>] {
        &self.snapshots
    }

    /// Number of stored snapshots, never above [`Self::frame_limit`]
    pub const fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Most snapshots this capture keeps at once
    pub const fn frame_limit(&self) -> usize {
        self.frame_limit
    }

    /// Events between consecutive snapshots
    pub const fn sample_interval(&self) -> usize {
        self.sample_interval
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.event_count
    }

    /// Occupancy after the last recorded event
    pub fn final_cells(&self) -> Array2<Option<ShapeId>> {
        self.current.clone()
    }

    /// Export the captured events as a GIF with automatic frame skipping
    ///
    /// Frames faster than viewers can show are merged. The final state is
    /// always the last frame and is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured or the frame delay is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.event_count == 0 {
            return Err(invalid_parameter(
                "events",
                &0,
                &"no search events captured for visualization",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"frame delay must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = (VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize).max(1);

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| PackError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let empty = Array2::from_elem((self.height, self.width), None);
        let mut frames = vec![self.render_frame(&empty, delay_ms)];

        frames.extend(
            self.snapshots
                .iter()
                .skip(skip_factor - 1)
                .step_by(skip_factor)
                .map(|snapshot| self.render_frame(snapshot, delay_ms)),
        );

        frames.push(self.render_frame(&self.current, delay_ms * FINAL_FRAME_HOLD));
        frames
    }

    fn render_frame(&self, cells: &Array2<Option<ShapeId>>, delay_ms: u32) -> Frame {
        let image = render_cells(self.width, self.height, |x, y| {
            cells.get([y, x]).copied().flatten()
        });
        Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
