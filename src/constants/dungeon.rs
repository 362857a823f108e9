//! Dungeon generation constants.

/// Default dungeon width in cells
pub const DUNGEON_DEFAULT_WIDTH: usize = 50;
/// Default dungeon height in cells
pub const DUNGEON_DEFAULT_HEIGHT: usize = 50;
/// Rooms carved per `generate()` call
pub const DUNGEON_ROOM_COUNT: u32 = 5;
/// Smallest room edge (inclusive)
pub const DUNGEON_MIN_ROOM_SIZE: i32 = 6;
/// Largest room edge (inclusive)
pub const DUNGEON_MAX_ROOM_SIZE: i32 = 15;
/// Cells kept clear of room interiors along every grid edge
pub const DUNGEON_BORDER: i32 = 1;
