use crate::defaults::GRID_SIZE;
use super::types::Point;

/// The fixed `GRID_SIZE` x `GRID_SIZE` board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid;

impl Grid {
    pub const SIZE: i32 = GRID_SIZE;

    pub fn in_bounds(point: Point) -> bool {
        (0..Self::SIZE).contains(&point.x) && (0..Self::SIZE).contains(&point.y)
    }

    pub fn cell_count() -> usize {
        (Self::SIZE * Self::SIZE) as usize
    }

    /// Every cell, row by row.
    pub fn cells() -> impl Iterator<Item = Point> {
        (0..Self::SIZE).flat_map(|y| (0..Self::SIZE).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_corners() {
        assert!(Grid::in_bounds(Point::new(0, 0)));
        assert!(Grid::in_bounds(Point::new(15, 15)));
        assert!(Grid::in_bounds(Point::new(0, 15)));
        assert!(Grid::in_bounds(Point::new(15, 0)));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        assert!(!Grid::in_bounds(Point::new(-1, 5)));
        assert!(!Grid::in_bounds(Point::new(5, -1)));
        assert!(!Grid::in_bounds(Point::new(16, 5)));
        assert!(!Grid::in_bounds(Point::new(5, 16)));
    }

    #[test]
    fn test_cells_cover_board_once() {
        let cells: Vec<Point> = Grid::cells().collect();
        assert_eq!(cells.len(), Grid::cell_count());
        assert_eq!(cells.first(), Some(&Point::new(0, 0)));
        assert_eq!(cells.get(1), Some(&Point::new(1, 0)));
        assert_eq!(cells.last(), Some(&Point::new(15, 15)));
        assert!(cells.iter().all(|&p| Grid::in_bounds(p)));
    }
}
