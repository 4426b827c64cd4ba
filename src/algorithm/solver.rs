//! Step-driven backtracking solver
//!
//! The search is an explicit state machine over a stack of [`Frame`]s rather
//! than a recursive function, so a caller can stop it after any single unit of
//! progress and resume it later. A unit is either one placement (a new frame is
//! pushed) or one backtrack (an exhausted frame is popped).
//!
//! Undo is lazy: a frame's placement is only removed when the search returns
//! to that frame, right before its scan resumes one variant past the recorded
//! candidate. Cell order, variant order and item order are all fixed, so two
//! runs over the same input always reach the same placements.

use std::fmt;

use log::{debug, trace};

use crate::algorithm::frame::{Frame, Placement, scan_for_placement};
use crate::algorithm::items::{Item, build_items, exceeds_capacity, total_area};
use crate::geometry::ShapeLibrary;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{Grid, Region};

/// Terminal flag of a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Search still in progress
    Running,
    /// Every item has been placed
    Solved,
    /// No arrangement of the items fits
    Failed,
}

impl SolverStatus {
    /// Whether the search has finished
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Running => "running",
            Self::Solved => "solved",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Counters describing the work a solver has performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Units of progress performed (placements plus backtracks)
    pub steps: usize,
    /// Placement events
    pub placements: usize,
    /// Frames popped after exhausting their scan
    ///
    /// Abandoning the search over a shape with no variants counts as one
    /// backtrack, so `steps == placements + backtracks` always holds.
    pub backtracks: usize,
}

/// Resumable backtracking search for one region
pub struct Solver<'a> {
    library: &'a ShapeLibrary,
    region: Region,
    items: Vec<Item>,
    grid: Grid,
    stack: Vec<Frame>,
    status: SolverStatus,
    stats: SolverStats,
    visualization: Option<VisualizationCapture>,
}

impl<'a> Solver<'a> {
    /// Prepare a search for one region
    ///
    /// If the demanded area exceeds the region's capacity the solver starts
    /// out `Failed` with an empty stack and never performs a step.
    pub fn new(region: Region, library: &'a ShapeLibrary) -> Self {
        let items = build_items(&region, library);
        let grid = Grid::new(region.width, region.height);

        let (stack, status) = if exceeds_capacity(&region, &items) {
            debug!(
                "{}x{} region rejected: {} cells demanded, {} available",
                region.width,
                region.height,
                total_area(&items),
                region.capacity()
            );
            (Vec::new(), SolverStatus::Failed)
        } else {
            (vec![Frame::new(0)], SolverStatus::Running)
        };

        Self {
            library,
            region,
            items,
            grid,
            stack,
            status,
            stats: SolverStats::default(),
            visualization: None,
        }
    }

    /// Perform up to `budget` units of progress and return the resulting status
    ///
    /// Returns early once the search is solved or failed. Detecting that the
    /// last item is already placed costs no unit.
    pub fn advance(&mut self, budget: usize) -> SolverStatus {
        let mut performed = 0;
        while performed < budget && self.status == SolverStatus::Running {
            if self.step() {
                performed += 1;
                self.stats.steps += 1;
            }
        }
        self.status
    }

    /// Run the search to completion
    pub fn solve(&mut self) -> SolverStatus {
        self.advance(usize::MAX)
    }

    /// One iteration of the search loop; returns whether a unit was performed
    fn step(&mut self) -> bool {
        let library = self.library;
        let item_count = self.items.len();

        let Some(frame) = self.stack.last_mut() else {
            self.status = SolverStatus::Failed;
            return false;
        };

        let Some(item) = self.items.get(frame.item_index).copied() else {
            debug!(
                "{}x{} region solved after {} steps",
                self.region.width, self.region.height, self.stats.steps
            );
            self.status = SolverStatus::Solved;
            return false;
        };
        let variants = library.variants(item.shape_id);

        // Returning to this frame: undo its placement and move past that candidate
        if let Some(previous) = frame.placed.take() {
            if let Some(variant) = variants.get(previous.variant_index) {
                self.grid
                    .remove(variant, previous.origin_x, previous.origin_y);
                if let Some(viz) = &mut self.visualization {
                    viz.record_removal(variant.cells_at(previous.origin_x, previous.origin_y));
                }
            }
            frame.cursor.variant += 1;
        }

        if variants.is_empty() {
            debug!(
                "shape {} has no variants; item {} can never be placed",
                item.shape_id, frame.item_index
            );
            self.abandon();
            return true;
        }

        let Some(variant) = scan_for_placement(&self.grid, variants, &mut frame.cursor) else {
            trace!("item {} exhausted, backtracking", frame.item_index);
            self.stack.pop();
            self.stats.backtracks += 1;
            if self.stack.is_empty() {
                debug!(
                    "{}x{} region failed after {} steps",
                    self.region.width,
                    self.region.height,
                    self.stats.steps + 1
                );
                self.status = SolverStatus::Failed;
            }
            return true;
        };

        let cursor = frame.cursor;
        self.grid.place(variant, cursor.col, cursor.row);
        if let Some(viz) = &mut self.visualization {
            viz.record_placement(item.shape_id, variant.cells_at(cursor.col, cursor.row));
        }

        let placement = Placement {
            item_index: frame.item_index,
            shape_id: item.shape_id,
            variant_index: cursor.variant,
            origin_x: cursor.col,
            origin_y: cursor.row,
        };
        frame.placed = Some(placement);
        trace!(
            "item {} placed: shape {} variant {} at ({}, {})",
            placement.item_index,
            placement.shape_id,
            placement.variant_index,
            placement.origin_x,
            placement.origin_y
        );

        let next_index = placement.item_index + 1;
        self.stack.push(Frame::new(next_index));
        self.stats.placements += 1;

        if next_index >= item_count {
            debug!(
                "{}x{} region solved after {} steps",
                self.region.width,
                self.region.height,
                self.stats.steps + 1
            );
            self.status = SolverStatus::Solved;
        }
        true
    }

    /// Unwind every recorded placement and mark the search failed
    fn abandon(&mut self) {
        let library = self.library;
        while let Some(frame) = self.stack.pop() {
            let Some(placement) = frame.placed else {
                continue;
            };
            if let Some(variant) = library
                .variants(placement.shape_id)
                .get(placement.variant_index)
            {
                self.grid
                    .remove(variant, placement.origin_x, placement.origin_y);
                if let Some(viz) = &mut self.visualization {
                    viz.record_removal(variant.cells_at(placement.origin_x, placement.origin_y));
                }
            }
        }
        self.stats.backtracks += 1;
        self.status = SolverStatus::Failed;
    }

    /// Start recording place/remove events for GIF export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(
            self.region.width,
            self.region.height,
        ));
    }

    /// Recorded events, if visualization is enabled
    pub const fn visualization(&self) -> Option<&VisualizationCapture> {
        self.visualization.as_ref()
    }

    /// Take ownership of the recorded events
    pub const fn take_visualization(&mut self) -> Option<VisualizationCapture> {
        self.visualization.take()
    }

    /// Current status
    pub const fn status(&self) -> SolverStatus {
        self.status
    }

    /// Work performed so far
    pub const fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Current grid occupancy
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Region being solved
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Sorted item queue
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of frames on the stack
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Placements on the current search path, in item order
    ///
    /// Once solved this is the permanent placement trace.
    pub fn placements(&self) -> Vec<Placement> {
        self.stack.iter().filter_map(|frame| frame.placed).collect()
    }

    /// Consume the solver, keeping only the final grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
