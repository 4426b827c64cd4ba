//! Command-line interface for solving every region of a puzzle file

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, info, warn};

use crate::algorithm::driver::{
    DriverSettings, RegionOutcome, RegionStatus, count_status, solve_regions,
};
use crate::algorithm::verification::verify_packing;
use crate::geometry::ShapeLibrary;
use crate::io::configuration::{DEFAULT_STEPS_PER_ADVANCE, GIF_FRAME_DELAY_MS};
use crate::io::error::{Result, WithPath};
use crate::io::image::export_grid_as_png;
use crate::io::parser::parse_puzzle;
use crate::io::progress::ProgressManager;

#[derive(Parser, Debug)]
#[command(name = "polypack")]
#[command(
    author,
    version,
    about = "Pack polyomino shapes into rectangular regions by backtracking search"
)]
/// Command-line arguments for the packing solver
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file with shape blocks and region lines
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Units of search progress performed per advance call
    #[arg(short, long, default_value_t = DEFAULT_STEPS_PER_ADVANCE)]
    pub steps: usize,

    /// Give up on a region after this many steps and report it undecided
    #[arg(short = 'l', long)]
    pub step_limit: Option<usize>,

    /// Print each solved grid to stdout
    #[arg(short, long)]
    pub render: bool,

    /// Write a PNG of every solved region into this directory
    #[arg(short, long, value_name = "DIR")]
    pub png_dir: Option<PathBuf>,

    /// Write an animated GIF of each region's search
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity written to stderr
    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Driver pacing derived from the arguments
    pub const fn driver_settings(&self) -> DriverSettings {
        DriverSettings {
            steps_per_advance: self.steps,
            step_limit: self.step_limit,
            record_visualization: self.visualize,
        }
    }

    /// Directory receiving PNG and GIF output; the working directory by default
    pub fn output_dir(&self) -> &Path {
        self.png_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

/// Region counts by final status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleSummary {
    /// Regions where every shape was placed
    pub solved: usize,
    /// Regions proven infeasible
    pub failed: usize,
    /// Regions stopped by the step limit
    pub undecided: usize,
}

/// Reads a puzzle file, solves its regions and writes the requested output
pub struct PuzzleProcessor {
    cli: Cli,
}

impl PuzzleProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve every region of the puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be read or parsed, the step
    /// settings are invalid, a solved grid fails verification, or an image
    /// cannot be written
    pub fn process(&self) -> Result<PuzzleSummary> {
        let text = std::fs::read_to_string(&self.cli.puzzle)
            .with_path(&self.cli.puzzle, "read puzzle")?;
        let puzzle = parse_puzzle(&text)?;
        let library = ShapeLibrary::new(&puzzle.shapes);
        info!(
            "{}: {} shapes, {} regions",
            self.cli.puzzle.display(),
            puzzle.shapes.len(),
            puzzle.regions.len()
        );

        let mut progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(puzzle.regions.len()));

        let outcomes = solve_regions(
            &puzzle.regions,
            &library,
            &self.cli.driver_settings(),
            |outcome| {
                if let Some(pm) = progress.as_mut() {
                    pm.complete_region(outcome.status);
                }
            },
        )?;

        if let Some(pm) = &progress {
            pm.finish();
        }

        for outcome in &outcomes {
            self.write_outcome(outcome, &library)?;
        }

        Ok(PuzzleSummary {
            solved: count_status(&outcomes, RegionStatus::Solved),
            failed: count_status(&outcomes, RegionStatus::Failed),
            undecided: count_status(&outcomes, RegionStatus::Undecided),
        })
    }

    // Allow print for the rendered grids requested with --render
    #[allow(clippy::print_stdout)]
    fn write_outcome(&self, outcome: &RegionOutcome, library: &ShapeLibrary) -> Result<()> {
        if outcome.status == RegionStatus::Solved {
            verify_packing(&outcome.grid, &outcome.placements, library)?;
        }
        if outcome.status == RegionStatus::Undecided {
            warn!(
                "region {} undecided after {} steps",
                outcome.index, outcome.stats.steps
            );
        }

        if self.cli.render {
            println!(
                "Region {} ({}x{}): {:?}",
                outcome.index, outcome.region.width, outcome.region.height, outcome.status
            );
            if outcome.status == RegionStatus::Solved {
                print!("{}", outcome.grid);
            }
        }

        if self.cli.png_dir.is_some() && outcome.status == RegionStatus::Solved {
            if outcome.grid.width() == 0 || outcome.grid.height() == 0 {
                warn!(
                    "region {} has no cells ({}x{}), skipping PNG",
                    outcome.index,
                    outcome.grid.width(),
                    outcome.grid.height()
                );
            } else {
                let path = self.output_path(outcome.index, "png");
                export_grid_as_png(&outcome.grid, &path)?;
                info!("wrote {}", path.display());
            }
        }

        if let Some(viz) = &outcome.visualization
            && viz.event_count() > 0
        {
            let path = self.output_path(outcome.index, "gif");
            viz.export_gif(&path, GIF_FRAME_DELAY_MS)?;
            info!("wrote {} ({} events)", path.display(), viz.event_count());
        }

        Ok(())
    }

    fn output_path(&self, index: usize, extension: &str) -> PathBuf {
        self.cli
            .output_dir()
            .join(format!("region_{index:03}.{extension}"))
    }
}
