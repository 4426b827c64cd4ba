//! Log dispatcher for the command-line binary

use std::sync::LazyLock;
use std::time::Instant;

use log::{LevelFilter, info};

use crate::io::error::Result;

/// Reference point for the elapsed time shown in every log line
///
/// Initialized lazily by the first formatted log line.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Install a `fern` dispatcher writing to stderr
///
/// Lines are prefixed with the level and the time elapsed since [`EPOCH`].
/// Stdout stays reserved for solver output.
///
/// # Errors
///
/// Returns an error if a global logger has already been installed
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let secs = elapsed.as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}.{:0>3}]",
                record.level(),
                secs / 3600,
                (secs / 60) % 60,
                secs % 60,
                elapsed.subsec_millis()
            );
            out.finish(format_args!("{prefix:<24}{message}"));
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;

    info!("logger initialized at level {level_filter}");
    Ok(())
}
