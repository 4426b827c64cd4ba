//! Sequential region driver
//!
//! Builds one solver per region, advances it in fixed-size batches and
//! collects the result. Regions are processed strictly one after another and
//! nothing carries over from one solver to the next.

use log::{debug, info};

use crate::algorithm::frame::Placement;
use crate::algorithm::solver::{Solver, SolverStats, SolverStatus};
use crate::geometry::ShapeLibrary;
use crate::io::configuration::{DEFAULT_STEPS_PER_ADVANCE, MAX_REGION_CELLS};
use crate::io::error::{Result, invalid_parameter};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{Grid, Region};

/// Pacing parameters for the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverSettings {
    /// Units of progress requested per `advance` call
    pub steps_per_advance: usize,
    /// Stop a region that is still running after this many steps
    pub step_limit: Option<usize>,
    /// Record place/remove events for GIF export
    pub record_visualization: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            steps_per_advance: DEFAULT_STEPS_PER_ADVANCE,
            step_limit: None,
            record_visualization: false,
        }
    }
}

/// Final verdict for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    /// All required shapes were placed
    Solved,
    /// The shapes cannot be packed into the region
    Failed,
    /// The step limit stopped the search before it finished
    Undecided,
}

impl From<SolverStatus> for RegionStatus {
    fn from(status: SolverStatus) -> Self {
        match status {
            SolverStatus::Solved => Self::Solved,
            SolverStatus::Failed => Self::Failed,
            SolverStatus::Running => Self::Undecided,
        }
    }
}

/// Everything the driver learned about one region
#[derive(Debug)]
pub struct RegionOutcome {
    /// Position of the region in the input sequence
    pub index: usize,
    /// The region that was solved
    pub region: Region,
    /// Verdict
    pub status: RegionStatus,
    /// Grid occupancy when the search stopped
    pub grid: Grid,
    /// Placements on the search path when it stopped, in item order
    pub placements: Vec<Placement>,
    /// Work performed
    pub stats: SolverStats,
    /// Recorded search events when visualization was requested
    pub visualization: Option<VisualizationCapture>,
}

/// Solve a single region according to the driver settings
///
/// # Errors
///
/// Returns an error if `steps_per_advance` is zero or the region's grid
/// would exceed `MAX_REGION_CELLS`
pub fn solve_region(
    index: usize,
    region: &Region,
    library: &ShapeLibrary,
    settings: &DriverSettings,
) -> Result<RegionOutcome> {
    if settings.steps_per_advance == 0 {
        return Err(invalid_parameter(
            "steps_per_advance",
            &settings.steps_per_advance,
            &"at least one step per advance is required",
        ));
    }

    if !region.within_cell_limit() {
        return Err(invalid_parameter(
            "region",
            &format!("{}x{}", region.width, region.height),
            &format!("grid would exceed {MAX_REGION_CELLS} cells"),
        ));
    }

    let mut solver = Solver::new(region.clone(), library);
    if settings.record_visualization {
        solver.enable_visualization();
    }

    while !solver.status().is_terminal() {
        let budget = match settings.step_limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(solver.stats().steps);
                if remaining == 0 {
                    debug!("region {index} stopped at the step limit of {limit}");
                    break;
                }
                remaining.min(settings.steps_per_advance)
            }
            None => settings.steps_per_advance,
        };
        solver.advance(budget);
    }

    let status = RegionStatus::from(solver.status());
    let stats = solver.stats();
    info!(
        "region {index} ({}x{}, {} items): {status:?} after {} steps, {} backtracks",
        region.width,
        region.height,
        region.required.len(),
        stats.steps,
        stats.backtracks
    );

    let placements = solver.placements();
    let visualization = solver.take_visualization();

    Ok(RegionOutcome {
        index,
        region: region.clone(),
        status,
        grid: solver.into_grid(),
        placements,
        stats,
        visualization,
    })
}

/// Solve regions one at a time, reporting each outcome as it completes
///
/// # Errors
///
/// Returns an error if the driver settings are invalid or a region is too large
pub fn solve_regions<F>(
    regions: &[Region],
    library: &ShapeLibrary,
    settings: &DriverSettings,
    mut on_outcome: F,
) -> Result<Vec<RegionOutcome>>
where
    F: FnMut(&RegionOutcome),
{
    let mut outcomes = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let outcome = solve_region(index, region, library, settings)?;
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Number of outcomes with the given status
pub fn count_status(outcomes: &[RegionOutcome], status: RegionStatus) -> usize {
    outcomes.iter().filter(|o| o.status == status).count()
}
