//! Rendering constants.

/// Default edge length of a tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 48;

/// Flat color drawn when the floor tile cannot be resolved
pub const FLOOR_FALLBACK_COLOR: [u8; 4] = [200, 200, 200, 255];
/// Flat color drawn when the wall tile cannot be resolved
pub const WALL_FALLBACK_COLOR: [u8; 4] = [80, 60, 40, 255];

