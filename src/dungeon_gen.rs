use crate::assets::{self, AssetSearch};
use crate::constants::*;
use crate::grid::DungeonGrid;
use crate::render::RenderSurface;
use crate::rng::UniformInts;
use crate::tile::{Cell, TileSelection};
use crate::tile_atlas::{self, TileAtlas};
use glam::IVec2;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A rectangle representing a room or region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// One past the last column
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the last row
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Generator settings. Missing fields in a config file fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Edge of one cell in pixels
    pub tile_size: u32,
    pub room_count: u32,
    /// Smallest room edge (inclusive)
    pub room_min_size: i32,
    /// Largest room edge (inclusive)
    pub room_max_size: i32,
    pub floor: TileSelection,
    pub wall: TileSelection,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            room_count: DUNGEON_ROOM_COUNT,
            room_min_size: DUNGEON_MIN_ROOM_SIZE,
            room_max_size: DUNGEON_MAX_ROOM_SIZE,
            floor: TileSelection::FLOOR,
            wall: TileSelection::WALL,
        }
    }
}

impl DungeonConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json_str = std::fs::read_to_string(path).map_err(|source| Error::UnableToReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json_str).map_err(|source| Error::UnableToParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject settings that would make room placement sample an empty range.
    ///
    /// The largest room plus the border on both sides must fit in the grid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig("grid dimensions must be non-zero".into()));
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(Error::InvalidConfig("grid dimensions overflow cell coordinates".into()));
        }
        if self.tile_size == 0 {
            return Err(Error::InvalidConfig("tile size must be non-zero".into()));
        }
        if self.tile_size > i32::MAX as u32 {
            return Err(Error::InvalidConfig(format!(
                "tile size {} overflows pixel coordinates",
                self.tile_size
            )));
        }
        if self.room_min_size < 1 {
            return Err(Error::InvalidConfig(format!(
                "room_min_size must be at least 1, got {}",
                self.room_min_size
            )));
        }
        if self.room_min_size > self.room_max_size {
            return Err(Error::InvalidConfig(format!(
                "room_min_size ({}) exceeds room_max_size ({})",
                self.room_min_size, self.room_max_size
            )));
        }

        let needed = self.room_max_size as i64 + 2 * DUNGEON_BORDER as i64;
        if (self.width as i64) < needed || (self.height as i64) < needed {
            return Err(Error::InvalidConfig(format!(
                "a {}x{} grid cannot hold a room of size {} plus a {}-cell border",
                self.width, self.height, self.room_max_size, DUNGEON_BORDER
            )));
        }

        Ok(())
    }
}

/// Random rooms joined by L-shaped corridors, drawn floor-first then walls.
///
/// `generate()` may be called any number of times; each call starts from an
/// all-wall grid. Not meant to be shared across threads while drawing.
pub struct DungeonGenerator {
    config: DungeonConfig,
    grid: DungeonGrid,
    rooms: Vec<Rect>,
    atlas: TileAtlas,
    floor: TileSelection,
    wall: TileSelection,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig, atlas: TileAtlas) -> Result<Self, Error> {
        config.validate()?;
        if atlas.tile_size() != config.tile_size {
            return Err(Error::InvalidConfig(format!(
                "atlas tile size {} does not match configured tile size {}",
                atlas.tile_size(),
                config.tile_size
            )));
        }

        Ok(Self {
            grid: DungeonGrid::new(config.width, config.height),
            rooms: Vec::new(),
            floor: config.floor,
            wall: config.wall,
            atlas,
            config,
        })
    }

    /// Locate the tilesets, load them, and build a generator around them
    pub fn bootstrap(config: DungeonConfig, search: &AssetSearch) -> Result<Self, Error> {
        config.validate()?;
        let paths = search.resolve()?;
        let atlas = TileAtlas::load(&paths, config.tile_size)?;
        if atlas.sheet_count() == 0 {
            return Err(assets::Error::NoTilesetFound {
                searched: paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
            .into());
        }
        Self::new(config, atlas)
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn grid(&self) -> &DungeonGrid {
        &self.grid
    }

    /// Rooms from the last generation, in carving order
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    pub fn atlas(&self) -> &TileAtlas {
        &self.atlas
    }

    pub fn floor_tiles(&self) -> TileSelection {
        self.floor
    }

    pub fn wall_tiles(&self) -> TileSelection {
        self.wall
    }

    /// Choose which atlas tiles draw floors and walls. Applies on the next draw.
    pub fn set_tiles(&mut self, floor_sheet: usize, floor_tile: usize, wall_sheet: usize, wall_tile: usize) {
        self.floor = TileSelection::new(floor_sheet, floor_tile);
        self.wall = TileSelection::new(wall_sheet, wall_tile);
    }

    /// Generate a new level using the thread-local RNG
    pub fn generate(&mut self) {
        self.generate_with(&mut rand::thread_rng());
    }

    /// Generate a new level, drawing every random choice from `rng`.
    ///
    /// Rooms may overlap. Each room after the first is joined to the one
    /// before it, so the rooms form a chain in generation order.
    pub fn generate_with(&mut self, rng: &mut impl UniformInts) {
        puffin::profile_function!();

        self.reset();

        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;

        for _ in 0..self.config.room_count {
            let room_width = rng.uniform(self.config.room_min_size, self.config.room_max_size);
            let room_height = rng.uniform(self.config.room_min_size, self.config.room_max_size);

            // Keep a border of wall around the grid edge
            let room_x = rng.uniform(DUNGEON_BORDER, width - room_width - DUNGEON_BORDER);
            let room_y = rng.uniform(DUNGEON_BORDER, height - room_height - DUNGEON_BORDER);

            let room = Rect::new(room_x, room_y, room_width, room_height);
            self.carve_room(&room);

            if let Some(prev) = self.rooms.last() {
                let prev_center = prev.center();
                self.carve_corridor(prev_center, room.center());
            }
            self.rooms.push(room);
        }

        debug!(
            rooms = self.rooms.len(),
            floor_cells = self.grid.count(Cell::Floor),
            "generated dungeon"
        );
    }

    /// Turn the whole grid back to wall and forget the rooms
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Wall);
        self.rooms.clear();
    }

    /// Carve a room as floor; cells outside the grid are skipped
    pub fn carve_room(&mut self, room: &Rect) {
        for y in room.y..room.bottom() {
            for x in room.x..room.right() {
                self.grid.set(x, y, Cell::Floor);
            }
        }
    }

    /// Connect two points with an L-shaped corridor: horizontal along the
    /// start row, then vertical along the end column. Both endpoints are
    /// carved.
    pub fn carve_corridor(&mut self, start: (i32, i32), end: (i32, i32)) {
        let (x1, y1) = start;
        let (x2, y2) = end;

        self.create_h_corridor(x1, x2, y1);
        self.create_v_corridor(y1, y2, x2);
    }

    fn create_h_corridor(&mut self, x1: i32, x2: i32, y: i32) {
        let start = x1.min(x2);
        let end = x1.max(x2);

        for x in start..=end {
            self.grid.set(x, y, Cell::Floor);
        }
    }

    fn create_v_corridor(&mut self, y1: i32, y2: i32, x: i32) {
        let start = y1.min(y2);
        let end = y1.max(y2);

        for y in start..=end {
            self.grid.set(x, y, Cell::Floor);
        }
    }

    /// Cells overlapping a viewport of `viewport` pixels whose top-left is at
    /// `camera`, clamped to the grid. Uses floor division so negative camera
    /// offsets round towards the grid origin.
    pub fn visible_range(&self, camera: IVec2, viewport: (u32, u32)) -> (Range<i32>, Range<i32>) {
        let tile_size = self.config.tile_size as i64;
        let width = self.grid.width() as i64;
        let height = self.grid.height() as i64;

        // i64 so far-away cameras and huge viewports cannot overflow
        let axis = |camera: i32, viewport: u32, cells: i64| {
            let start = (camera as i64).div_euclid(tile_size).clamp(0, cells);
            let end = ((camera as i64 + viewport as i64).div_euclid(tile_size) + 1).clamp(0, cells);
            start as i32..end as i32
        };

        (axis(camera.x, viewport.0, width), axis(camera.y, viewport.1, height))
    }

    /// Draw the visible part of the map.
    ///
    /// All floors are drawn before any wall. A wall is only drawn when the
    /// cell directly below it is floor; walls with no floor in front of them
    /// stay invisible.
    pub fn draw(&self, surface: &mut impl RenderSurface, camera: IVec2) {
        puffin::profile_function!();

        let (xs, ys) = self.visible_range(camera, surface.viewport_size());
        let floor_tile = self.atlas.get_tile(self.floor.sheet, self.floor.tile);
        let wall_tile = self.atlas.get_tile(self.wall.sheet, self.wall.tile);

        {
            puffin::profile_scope!("draw_floors");
            for x in xs.clone() {
                for y in ys.clone() {
                    if self.grid.is_floor(x, y) {
                        self.draw_cell(surface, x, y, camera, floor_tile, FLOOR_FALLBACK_COLOR);
                    }
                }
            }
        }
        {
            puffin::profile_scope!("draw_walls");
            for x in xs.clone() {
                for y in ys.clone() {
                    if self.is_front_wall(x, y) {
                        self.draw_cell(surface, x, y, camera, wall_tile, WALL_FALLBACK_COLOR);
                    }
                }
            }
        }
    }

    /// Wall with floor directly below it
    fn is_front_wall(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y) == Some(Cell::Wall) && self.grid.is_floor(x, y + 1)
    }

    fn draw_cell(
        &self,
        surface: &mut impl RenderSurface,
        x: i32,
        y: i32,
        camera: IVec2,
        tile: Option<&RgbaImage>,
        fallback: [u8; 4],
    ) {
        let tile_size = self.config.tile_size as i64;
        let to_screen = |cell: i32, camera: i32| {
            (cell as i64 * tile_size - camera as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        let screen_x = to_screen(x, camera.x);
        let screen_y = to_screen(y, camera.y);

        match tile {
            Some(image) => surface.draw_image(image, screen_x, screen_y),
            None => surface.fill_rect(
                screen_x,
                screen_y,
                self.config.tile_size,
                self.config.tile_size,
                Rgba(fallback),
            ),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid dungeon configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to load the tile atlas: {0}")]
    Atlas(#[from] tile_atlas::Error),
    #[error("Failed to locate tilesets: {0}")]
    Assets(#[from] assets::Error),
    #[error("Unable to read config {path}: {source}")]
    UnableToReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to parse config {path}: {source}")]
    UnableToParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
