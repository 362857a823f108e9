//! Map layer of a tile-based dungeon game: procedural room-and-corridor
//! generation, sprite-sheet slicing, and camera-relative tile drawing.

pub mod assets;
pub mod constants;
pub mod dungeon_gen;
pub mod enemy;
pub mod grid;
pub mod logging;
pub mod render;
pub mod rng;
pub mod tile;
pub mod tile_atlas;

pub use assets::AssetSearch;
pub use dungeon_gen::{DungeonConfig, DungeonGenerator, Rect};
pub use enemy::Enemy;
pub use grid::DungeonGrid;
pub use render::{DrawCommand, DrawRecorder, ImageSurface, RenderSurface};
pub use rng::UniformInts;
pub use tile::{Cell, TileSelection};
pub use tile_atlas::TileAtlas;
