use serde::{Deserialize, Serialize};

/// State of a single dungeon grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Wall,
    Floor,
}

impl Cell {
    pub fn is_floor(&self) -> bool {
        matches!(self, Cell::Floor)
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Character used by the ASCII dump of a grid
    pub const fn to_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
        }
    }
}

/// Which atlas tile represents a cell state.
/// Format: (sheet index, tile index within that sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSelection {
    pub sheet: usize,
    pub tile: usize,
}

impl TileSelection {
    pub const fn new(sheet: usize, tile: usize) -> Self {
        Self { sheet, tile }
    }

    /// Default floor tile: first tile of the first sheet
    pub const FLOOR: Self = Self::new(0, 0);
    /// Default wall tile: second tile of the first sheet
    pub const WALL: Self = Self::new(0, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
        assert!(Cell::default().is_wall());
        assert!(!Cell::default().is_floor());
    }

    #[test]
    fn test_default_selections() {
        assert_eq!(TileSelection::FLOOR, TileSelection::new(0, 0));
        assert_eq!(TileSelection::WALL, TileSelection::new(0, 1));
    }

    #[test]
    fn test_selection_deserializes_from_json() {
        let sel: TileSelection = serde_json::from_str(r#"{"sheet": 1, "tile": 7}"#).unwrap();
        assert_eq!(sel, TileSelection::new(1, 7));
    }
}
