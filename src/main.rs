//! CLI entry point for the polyomino packer

use clap::Parser;
use polypack::io::cli::{Cli, PuzzleProcessor};
use polypack::io::logging::init_logger;

// Allow print for the final region count
#[allow(clippy::print_stdout)]
fn main() -> polypack::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    let summary = PuzzleProcessor::new(cli).process()?;
    if summary.undecided > 0 {
        log::warn!("{} regions left undecided", summary.undecided);
    }
    println!("{}", summary.solved);
    Ok(())
}
