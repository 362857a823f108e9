use crate::tile::Cell;
use std::fmt::{self, Display};

/// Fixed-size floor/wall grid, stored row-major.
///
/// Dimensions are set at construction and never change. Every write is
/// bounds-checked, so out-of-range coordinates are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl DungeonGrid {
    /// Create an all-wall grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.get_index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.get_index(x, y).map(|idx| self.cells[idx])
    }

    /// Returns false (and writes nothing) when (x, y) is outside the grid
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.get_index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_floor())
    }

    /// Overwrite every cell
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            ((idx % self.width) as i32, (idx / self.width) as i32, cell)
        })
    }
}

impl Display for DungeonGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = DungeonGrid::new(8, 5);
        assert_eq!(grid.count(Cell::Wall), 40);
        assert_eq!(grid.count(Cell::Floor), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = DungeonGrid::new(4, 4);
        assert!(grid.set(2, 3, Cell::Floor));
        assert_eq!(grid.get(2, 3), Some(Cell::Floor));
        assert!(grid.is_floor(2, 3));
        assert!(!grid.is_floor(3, 2));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = DungeonGrid::new(4, 4);
        assert!(!grid.set(-1, 0, Cell::Floor));
        assert!(!grid.set(4, 0, Cell::Floor));
        assert!(!grid.set(0, 4, Cell::Floor));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.count(Cell::Floor), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut grid = DungeonGrid::new(3, 2);
        grid.set(0, 1, Cell::Floor);
        let floors: Vec<_> = grid.iter().filter(|(_, _, c)| c.is_floor()).collect();
        assert_eq!(floors, vec![(0, 1, Cell::Floor)]);
        assert_eq!(grid.to_string(), "###\n.##\n");
    }

    #[test]
    fn test_fill_resets() {
        let mut grid = DungeonGrid::new(3, 3);
        grid.fill(Cell::Floor);
        assert_eq!(grid.count(Cell::Floor), 9);
        grid.fill(Cell::Wall);
        assert_eq!(grid.count(Cell::Wall), 9);
    }
}
