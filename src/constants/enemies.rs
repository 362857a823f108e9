//! Enemy constants.

/// Enemy starting health
pub const ENEMY_DEFAULT_HEALTH: i32 = 10;
/// Enemy speed multiplier (1.0 = baseline)
pub const ENEMY_DEFAULT_SPEED: f32 = 1.0;
/// Enemy sprite edge in pixels
pub const ENEMY_TILE_SIZE: u32 = 16;
/// Flat color drawn when an enemy has no sprite
pub const ENEMY_FALLBACK_COLOR: [u8; 4] = [200, 50, 50, 255];
