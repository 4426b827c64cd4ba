//! Tests for the occupancy grid's placement queries and mutations

#[cfg(test)]
mod tests {
    use polypack::geometry::Shape;
    use polypack::spatial::Grid;
    use polypack::spatial::grid::shape_symbol;

    fn l_tromino(id: usize) -> Shape {
        Shape::from_pattern(id, ["#.", "##"])
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(5, 3);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.empty_count(), 15);
        assert!(grid.is_empty_at(4, 2));
        assert!(!grid.is_empty_at(5, 0), "out of bounds is never empty");
    }

    // Tests the bounding box must fit entirely inside the grid
    // Verified by checking only the origin cell
    #[test]
    fn test_can_place_respects_bounds() {
        let grid = Grid::new(3, 3);
        let shape = l_tromino(0);

        assert!(grid.can_place(&shape, 0, 0));
        assert!(grid.can_place(&shape, 1, 1));
        assert!(!grid.can_place(&shape, 2, 1));
        assert!(!grid.can_place(&shape, 1, 2));
    }

    #[test]
    fn test_can_place_rejects_overlap() {
        let mut grid = Grid::new(4, 4);
        let first = l_tromino(0);
        grid.place(&first, 0, 0);

        let second = Shape::from_pattern(1, ["##"]);
        assert!(!grid.can_place(&second, 0, 1));
        assert!(grid.can_place(&second, 2, 1));
        // The empty corner of the first bounding box can be reused
        assert!(grid.can_place(&Shape::from_pattern(1, ["#"]), 1, 0));
    }

    // Tests place and remove are exact inverses
    // Verified by clearing the whole bounding box on removal
    #[test]
    fn test_place_then_remove_restores_grid() {
        let mut grid = Grid::new(4, 4);
        let base = Shape::from_pattern(2, ["#"]);
        grid.place(&base, 1, 0);
        let before = grid.clone();

        let shape = l_tromino(0);
        grid.place(&shape, 0, 0);
        assert_eq!(grid.occupied_count(), 4);
        assert_eq!(grid.cell(0, 0), Some(0));
        assert_eq!(grid.cell(1, 1), Some(0));
        assert_eq!(grid.cell(1, 0), Some(2));

        grid.remove(&shape, 0, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let grid = Grid::new(2, 2);

        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 2), None);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid = Grid::new(3, 2);
        grid.place(&l_tromino(1), 0, 0);

        assert_eq!(grid.to_string(), "B..\nBB.\n");
    }

    #[test]
    fn test_shape_symbol_wraps() {
        assert_eq!(shape_symbol(0), 'A');
        assert_eq!(shape_symbol(4), 'E');
        assert_eq!(shape_symbol(25), 'Z');
        assert_eq!(shape_symbol(26), 'A');
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 0);

        assert_eq!(grid.empty_count(), 0);
        assert!(!grid.can_place(&Shape::from_pattern(0, ["#"]), 0, 0));
        assert_eq!(grid.to_string(), "");
    }
}
