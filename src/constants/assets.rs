//! Asset lookup constants.

/// Directories probed for tilesets, in priority order
pub const TILESET_SEARCH_ROOTS: &[&str] = &["assets", "Assets", "."];
/// Tileset file names; the first one decides which root wins
pub const TILESET_FILENAMES: &[&str] = &["tileset1.png", "tileset2.png"];
