//! Tests for the step-driven backtracking solver

#[cfg(test)]
mod tests {
    use polypack::algorithm::frame::Placement;
    use polypack::algorithm::solver::{Solver, SolverStatus};
    use polypack::geometry::{Shape, ShapeLibrary};
    use polypack::spatial::Region;

    fn puzzle_library() -> ShapeLibrary {
        ShapeLibrary::new(&[
            Shape::from_pattern(0, ["###", "##.", "##."]),
            Shape::from_pattern(1, ["###", "##.", ".##"]),
            Shape::from_pattern(2, [".##", "###", "##."]),
            Shape::from_pattern(3, ["##.", "###", "##."]),
            Shape::from_pattern(4, ["###", "#..", "###"]),
            Shape::from_pattern(5, ["###", ".#.", "###"]),
        ])
    }

    fn trace(placements: &[Placement]) -> Vec<(usize, usize, usize, usize)> {
        placements
            .iter()
            .map(|p| (p.shape_id, p.variant_index, p.origin_x, p.origin_y))
            .collect()
    }

    // Tests two interlocking copies fill a 4x4 region in two placements
    // Verified by trying occupied cells as anchors
    #[test]
    fn test_solves_small_region() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(4, 4, &[0, 0, 0, 0, 2]), &library);

        assert_eq!(solver.solve(), SolverStatus::Solved);
        assert_eq!(solver.stats().steps, 2);
        assert_eq!(solver.stats().placements, 2);
        assert_eq!(solver.stats().backtracks, 0);
        assert_eq!(trace(&solver.placements()), vec![(4, 0, 0, 0), (4, 1, 1, 1)]);
        assert_eq!(solver.grid().to_string(), "EEE.\nEEEE\nEEEE\n.EEE\n");
    }

    // Tests the area pre-check fails without performing a step
    // Verified by removing the pre-check
    #[test]
    fn test_area_precheck_fails_immediately() {
        let library = ShapeLibrary::new(&[Shape::from_pattern(0, ["###", "###"])]);
        let mut solver = Solver::new(Region::from_counts(4, 4, &[4]), &library);

        assert_eq!(solver.status(), SolverStatus::Failed);
        assert_eq!(solver.depth(), 0);
        assert_eq!(solver.advance(100), SolverStatus::Failed);
        assert_eq!(solver.stats().steps, 0);
        assert_eq!(solver.grid().occupied_count(), 0);
    }

    #[test]
    fn test_unplaceable_shape_fails_after_one_backtrack() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(5, 2, &[0, 0, 0, 0, 1]), &library);

        assert_eq!(solver.solve(), SolverStatus::Failed);
        assert_eq!(solver.stats().steps, 1);
        assert_eq!(solver.stats().backtracks, 1);
        assert_eq!(solver.depth(), 0);
    }

    #[test]
    fn test_empty_region_solves_without_steps() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::new(3, 3, Vec::new()), &library);

        assert_eq!(solver.status(), SolverStatus::Running);
        assert_eq!(solver.advance(5), SolverStatus::Solved);
        assert_eq!(solver.stats().steps, 0);
    }

    // Tests an id missing from the library fails the region and unwinds the grid
    #[test]
    fn test_unknown_shape_fails_and_unwinds() {
        let library = ShapeLibrary::new(&[Shape::from_pattern(0, ["##"])]);
        let mut solver = Solver::new(Region::new(4, 4, vec![0, 0, 7]), &library);

        assert_eq!(solver.solve(), SolverStatus::Failed);
        let stats = solver.stats();
        assert_eq!(stats.steps, 3);
        assert_eq!(stats.placements, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.steps, stats.placements + stats.backtracks);
        assert_eq!(solver.grid().occupied_count(), 0);
        assert!(solver.placements().is_empty());
    }

    // Tests advance performs exactly the requested units while running
    // Verified by counting the terminal detection as a unit
    #[test]
    fn test_advance_respects_budget() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(12, 5, &[1, 0, 1, 0, 2, 2]), &library);

        assert_eq!(solver.advance(0), SolverStatus::Running);
        assert_eq!(solver.stats().steps, 0);

        assert_eq!(solver.advance(10), SolverStatus::Running);
        assert_eq!(solver.stats().steps, 10);

        assert_eq!(solver.advance(25), SolverStatus::Running);
        assert_eq!(solver.stats().steps, 35);
    }

    // Tests pausing and resuming reaches the same placements as one long run
    #[test]
    fn test_resumed_search_matches_uninterrupted_search() {
        let library = puzzle_library();
        let region = Region::from_counts(12, 5, &[1, 0, 1, 0, 2, 2]);

        let mut whole = Solver::new(region.clone(), &library);
        assert_eq!(whole.solve(), SolverStatus::Solved);

        for budget in [1, 7, 333] {
            let mut paced = Solver::new(region.clone(), &library);
            while !paced.advance(budget).is_terminal() {}

            assert_eq!(paced.status(), SolverStatus::Solved);
            assert_eq!(paced.stats(), whole.stats());
            assert_eq!(paced.placements(), whole.placements());
            assert_eq!(paced.grid(), whole.grid());
        }
    }

    #[test]
    fn test_steps_split_into_placements_and_backtracks() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(12, 5, &[1, 0, 1, 0, 2, 2]), &library);

        solver.solve();
        let stats = solver.stats();

        assert_eq!(stats.steps, 5858);
        assert_eq!(stats.steps, stats.placements + stats.backtracks);
        assert_eq!(stats.placements - stats.backtracks, 6);
    }

    // Tests grid occupancy always equals the area of placed items
    #[test]
    fn test_occupancy_tracks_stack_between_steps() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(12, 5, &[1, 0, 1, 0, 2, 2]), &library);

        for _ in 0..500 {
            solver.advance(1);
            let placed_area: usize = solver
                .placements()
                .iter()
                .filter_map(|p| library.area(p.shape_id))
                .sum();
            assert_eq!(solver.grid().occupied_count(), placed_area);
        }
    }

    #[test]
    fn test_terminal_solver_ignores_further_advances() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(4, 4, &[0, 0, 0, 0, 2]), &library);
        solver.solve();
        let stats = solver.stats();

        assert_eq!(solver.advance(50), SolverStatus::Solved);
        assert_eq!(solver.stats(), stats);
    }

    #[test]
    fn test_visualization_records_events() {
        let library = puzzle_library();
        let mut solver = Solver::new(Region::from_counts(4, 4, &[0, 0, 0, 0, 2]), &library);
        assert!(solver.visualization().is_none());

        solver.enable_visualization();
        solver.solve();

        assert_eq!(solver.visualization().map(|v| v.event_count()), Some(2));
        let capture = solver.take_visualization();
        assert!(capture.is_some());
        assert!(solver.visualization().is_none());
    }

    #[test]
    fn test_items_and_status_display() {
        let library = puzzle_library();
        let solver = Solver::new(Region::from_counts(12, 5, &[1, 0, 1, 0, 2, 2]), &library);

        let ids: Vec<usize> = solver.items().iter().map(|i| i.shape_id).collect();
        assert_eq!(ids, vec![0, 2, 4, 4, 5, 5]);
        assert_eq!(solver.region().capacity(), 60);
        assert_eq!(SolverStatus::Running.to_string(), "running");
        assert_eq!(SolverStatus::Solved.to_string(), "solved");
        assert_eq!(SolverStatus::Failed.to_string(), "failed");
    }
}
