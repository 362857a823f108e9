//! Constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod assets;
mod dungeon;
mod enemies;
mod render;

pub use assets::*;
pub use dungeon::*;
pub use enemies::*;
pub use render::*;
