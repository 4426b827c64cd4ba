//! Input/output for the packer
//!
//! This module contains:
//! - The puzzle text parser
//! - Error types, logging setup and configuration constants
//! - PNG and GIF export, progress display and the command-line front end

/// Command-line arguments and the puzzle processor
pub mod cli;
/// Pacing constants and output defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// PNG rendering of region grids
pub mod image;
/// `fern` log dispatcher setup
pub mod logging;
/// Puzzle text format
pub mod parser;
/// Region progress bar
pub mod progress;
/// Search event capture and GIF export
pub mod visualization;
