//! Sprite-sheet slicer: cuts each sheet into fixed-size tiles indexed by
//! (sheet, tile).

use image::{imageops, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Data for a single sprite sheet
struct SheetData {
    name: String,
    columns: u32,
    rows: u32,
    tiles: Vec<RgbaImage>,
}

/// Read-only set of sliced sprite sheets.
///
/// Sheets keep the order of the paths they were loaded from, minus any that
/// were missing on disk. Tiles inside a sheet are ordered row-major starting
/// from the top-left corner.
pub struct TileAtlas {
    sheets: Vec<SheetData>,
    tile_size: u32,
}

impl TileAtlas {
    /// Load and slice every existing sheet in `paths`.
    ///
    /// Missing files are skipped with a warning. A file that exists but cannot
    /// be decoded aborts the whole load.
    pub fn load<P: AsRef<Path>>(paths: &[P], tile_size: u32) -> Result<Self, Error> {
        if tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }

        let mut sheets = Vec::new();
        for (idx, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            if !path.exists() {
                warn!(path = %path.display(), "tileset file not found, skipping");
                continue;
            }

            let img = image::open(path)
                .map_err(|source| Error::UnableToDecode {
                    path: path.to_path_buf(),
                    source,
                })?
                .into_rgba8();

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let sheet = Self::slice_sheet(name, &img, tile_size);
            info!(
                index = idx,
                path = %path.display(),
                tiles = sheet.tiles.len(),
                "loaded tileset"
            );
            sheets.push(sheet);
        }

        Ok(Self { sheets, tile_size })
    }

    /// Build an atlas from already decoded sheets
    pub fn from_images(images: Vec<(String, RgbaImage)>, tile_size: u32) -> Result<Self, Error> {
        if tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }

        let sheets = images
            .into_iter()
            .map(|(name, img)| Self::slice_sheet(name, &img, tile_size))
            .collect();

        Ok(Self { sheets, tile_size })
    }

    /// An atlas with no sheets; every lookup misses
    pub fn empty(tile_size: u32) -> Self {
        Self {
            sheets: Vec::new(),
            tile_size,
        }
    }

    /// Cut a sheet into `tile_size` squares. Partial tiles on the right and
    /// bottom edges are dropped.
    fn slice_sheet(name: String, img: &RgbaImage, tile_size: u32) -> SheetData {
        let (width, height) = img.dimensions();
        let columns = width / tile_size;
        let rows = height / tile_size;

        let mut tiles = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                let tile = imageops::crop_imm(img, col * tile_size, row * tile_size, tile_size, tile_size)
                    .to_image();
                tiles.push(tile);
            }
        }

        SheetData {
            name,
            columns,
            rows,
            tiles,
        }
    }

    /// Get a tile, or None if either index is out of range
    pub fn get_tile(&self, sheet: usize, tile: usize) -> Option<&RgbaImage> {
        self.sheets.get(sheet)?.tiles.get(tile)
    }

    /// Number of sheets that were actually loaded
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn tile_count(&self, sheet: usize) -> Option<usize> {
        self.sheets.get(sheet).map(|s| s.tiles.len())
    }

    /// Column and row count for a sheet
    pub fn dimensions(&self, sheet: usize) -> Option<(u32, u32)> {
        self.sheets.get(sheet).map(|s| (s.columns, s.rows))
    }

    /// File name the sheet was loaded from
    pub fn sheet_name(&self, sheet: usize) -> Option<&str> {
        self.sheets.get(sheet).map(|s| s.name.as_str())
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Tile size must be at least one pixel")]
    InvalidTileSize,
    #[error("Unable to decode tileset {path}: {source}")]
    UnableToDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::Rgba;

    /// A sheet where every tile is filled with `[col, row, 0, 255]`
    pub(crate) fn coded_sheet(columns: u32, rows: u32, tile_size: u32) -> RgbaImage {
        RgbaImage::from_fn(columns * tile_size, rows * tile_size, |x, y| {
            Rgba([(x / tile_size) as u8, (y / tile_size) as u8, 0, 255])
        })
    }

    pub(crate) fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dungeon-tiles-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_slices_96x48_sheet_into_18_tiles() {
        let atlas = TileAtlas::from_images(vec![("sheet".into(), coded_sheet(6, 3, 16))], 16).unwrap();
        assert_eq!(atlas.sheet_count(), 1);
        assert_eq!(atlas.tile_count(0), Some(18));
        assert_eq!(atlas.dimensions(0), Some((6, 3)));

        // Row-major: tile 6 is row 1, column 0
        let tile = atlas.get_tile(0, 6).unwrap();
        assert_eq!(tile.dimensions(), (16, 16));
        assert_eq!(*tile.get_pixel(0, 0), Rgba([0, 1, 0, 255]));
        assert_eq!(*tile.get_pixel(15, 15), Rgba([0, 1, 0, 255]));

        let last = atlas.get_tile(0, 17).unwrap();
        assert_eq!(*last.get_pixel(8, 8), Rgba([5, 2, 0, 255]));
    }

    #[test]
    fn test_partial_tiles_are_truncated() {
        let img = RgbaImage::new(50, 40);
        let atlas = TileAtlas::from_images(vec![("odd".into(), img)], 16).unwrap();
        assert_eq!(atlas.dimensions(0), Some((3, 2)));
        assert_eq!(atlas.tile_count(0), Some(6));
    }

    #[test]
    fn test_out_of_range_lookup_returns_none() {
        let atlas = TileAtlas::from_images(vec![("sheet".into(), coded_sheet(2, 2, 8))], 8).unwrap();
        assert!(atlas.get_tile(0, 3).is_some());
        assert!(atlas.get_tile(0, 4).is_none());
        assert!(atlas.get_tile(1, 0).is_none());
        assert!(atlas.get_tile(usize::MAX, usize::MAX).is_none());
    }

    #[test]
    fn test_zero_tile_size_is_rejected() {
        let result = TileAtlas::from_images(vec![], 0);
        assert!(matches!(result, Err(Error::InvalidTileSize)));
        let result = TileAtlas::load::<&str>(&[], 0);
        assert!(matches!(result, Err(Error::InvalidTileSize)));
    }

    #[test]
    fn test_missing_sheet_is_skipped() {
        let dir = temp_dir("missing-sheet");
        let valid = dir.join("tileset1.png");
        coded_sheet(4, 2, 16).save(&valid).unwrap();
        let missing = dir.join("does-not-exist.png");

        let atlas = TileAtlas::load(&[missing, valid], 16).unwrap();
        assert_eq!(atlas.sheet_count(), 1);
        assert_eq!(atlas.sheet_name(0), Some("tileset1.png"));
        assert_eq!(*atlas.get_tile(0, 5).unwrap().get_pixel(0, 0), Rgba([1, 1, 0, 255]));
    }

    #[test]
    fn test_undecodable_sheet_is_fatal() {
        let dir = temp_dir("bad-sheet");
        let valid = dir.join("tileset1.png");
        coded_sheet(2, 2, 16).save(&valid).unwrap();
        let garbage = dir.join("tileset2.png");
        std::fs::write(&garbage, b"definitely not a png").unwrap();

        let result = TileAtlas::load(&[valid, garbage.clone()], 16);
        match result {
            Err(Error::UnableToDecode { path, .. }) => assert_eq!(path, garbage),
            other => panic!("expected decode error, got {:?}", other.map(|a| a.sheet_count())),
        }
    }
}
