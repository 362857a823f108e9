//! Tileset path resolution over an explicit list of search roots.

use crate::constants::{TILESET_FILENAMES, TILESET_SEARCH_ROOTS};
use std::path::PathBuf;
use tracing::debug;

/// Where to look for tileset images.
///
/// Roots are tried in order. The first root that contains the first file name
/// wins, and every file from `filenames` that exists in that root is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSearch {
    pub roots: Vec<PathBuf>,
    pub filenames: Vec<String>,
}

impl Default for AssetSearch {
    fn default() -> Self {
        Self {
            roots: TILESET_SEARCH_ROOTS.iter().map(PathBuf::from).collect(),
            filenames: TILESET_FILENAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AssetSearch {
    pub fn new(roots: Vec<PathBuf>, filenames: Vec<String>) -> Self {
        Self { roots, filenames }
    }

    /// Same file names, different roots
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    /// Resolve the tileset paths to load
    pub fn resolve(&self) -> Result<Vec<PathBuf>, Error> {
        let Some(primary) = self.filenames.first() else {
            return Err(self.not_found());
        };

        for root in &self.roots {
            if !root.join(primary).exists() {
                continue;
            }

            let paths: Vec<PathBuf> = self
                .filenames
                .iter()
                .map(|name| root.join(name))
                .filter(|path| path.exists())
                .collect();
            debug!(root = %root.display(), count = paths.len(), "resolved tilesets");
            return Ok(paths);
        }

        Err(self.not_found())
    }

    fn not_found(&self) -> Error {
        Error::NoTilesetFound {
            searched: self
                .roots
                .iter()
                .map(|root| root.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No tileset image found in any of: {searched}")]
    NoTilesetFound { searched: String },
}
