//! Progress display across the regions of one puzzle

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::driver::RegionStatus;
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static REGION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Regions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks per-status region counts while a puzzle is processed
pub struct ProgressManager {
    bar: ProgressBar,
    solved: usize,
    failed: usize,
    undecided: usize,
}

impl ProgressManager {
    /// Create a bar for `region_count` regions
    pub fn new(region_count: usize) -> Self {
        let bar = ProgressBar::new(region_count as u64);
        bar.set_style(REGION_STYLE.clone());
        Self {
            bar,
            solved: 0,
            failed: 0,
            undecided: 0,
        }
    }

    /// Count one finished region
    pub fn complete_region(&mut self, status: RegionStatus) {
        match status {
            RegionStatus::Solved => self.solved += 1,
            RegionStatus::Failed => self.failed += 1,
            RegionStatus::Undecided => self.undecided += 1,
        }
        self.bar.set_message(self.summary());
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn summary(&self) -> String {
        if self.undecided == 0 {
            format!("{} solved, {} failed", self.solved, self.failed)
        } else {
            format!(
                "{} solved, {} failed, {} undecided",
                self.solved, self.failed, self.undecided
            )
        }
    }
}
