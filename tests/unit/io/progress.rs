//! Tests for the region progress bar

#[cfg(test)]
mod tests {
    use polypack::algorithm::driver::RegionStatus;
    use polypack::io::progress::ProgressManager;

    // Tests ProgressManager runs through a full puzzle without panicking
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new(3);

        pm.complete_region(RegionStatus::Solved);
        pm.complete_region(RegionStatus::Failed);
        pm.complete_region(RegionStatus::Undecided);
        pm.finish();
    }

    #[test]
    fn test_progress_manager_without_regions() {
        let pm = ProgressManager::new(0);
        pm.finish();
    }
}
