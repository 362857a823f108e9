use clap::Parser;
use dungeon_tiles::logging::init_logger;
use dungeon_tiles::{AssetSearch, DungeonConfig, DungeonGenerator, Enemy, ImageSurface, TileAtlas};
use glam::IVec2;
use image::Rgba;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "dungeon-tiles")]
#[command(about = "Generate a room-and-corridor dungeon and render it with a tileset")]
struct Args {
    /// JSON generator config (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Tile edge in pixels
    #[arg(short, long)]
    tile_size: Option<u32>,

    /// Number of rooms to carve
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory to search for tileset1.png / tileset2.png (repeatable, tried in order)
    #[arg(long = "asset-root")]
    asset_roots: Vec<PathBuf>,

    /// Render with flat colors instead of loading a tileset
    #[arg(long)]
    no_tileset: bool,

    /// Render the visible map to this PNG
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Camera offset in pixels
    #[arg(long, default_value = "0")]
    camera_x: i32,

    #[arg(long, default_value = "0")]
    camera_y: i32,

    /// Viewport width in pixels (whole map if not specified)
    #[arg(long)]
    viewport_w: Option<u32>,

    /// Viewport height in pixels (whole map if not specified)
    #[arg(long)]
    viewport_h: Option<u32>,

    /// Place an enemy at the center of every room but the first
    #[arg(long)]
    enemies: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        _ => Some(LevelFilter::DEBUG),
    };
    init_logger(level).map_err(|e| e.to_string())?;

    let mut config = match &args.config {
        Some(path) => DungeonConfig::load(path)?,
        None => DungeonConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(tile_size) = args.tile_size {
        config.tile_size = tile_size;
    }
    if let Some(rooms) = args.rooms {
        config.room_count = rooms;
    }

    let mut generator = if args.no_tileset {
        let atlas = TileAtlas::empty(config.tile_size);
        DungeonGenerator::new(config, atlas)?
    } else {
        let search = if args.asset_roots.is_empty() {
            AssetSearch::default()
        } else {
            AssetSearch::with_roots(args.asset_roots.clone())
        };
        DungeonGenerator::bootstrap(config, &search)?
    };

    match args.seed {
        Some(seed) => {
            info!(seed, "generating with fixed seed");
            generator.generate_with(&mut ChaCha8Rng::seed_from_u64(seed));
        }
        None => generator.generate(),
    }

    print!("{}", generator.grid());

    if let Some(out) = &args.out {
        let tile_size = generator.config().tile_size;
        let viewport_w = match args.viewport_w {
            Some(w) => w,
            None => map_pixels(generator.grid().width(), tile_size)?,
        };
        let viewport_h = match args.viewport_h {
            Some(h) => h,
            None => map_pixels(generator.grid().height(), tile_size)?,
        };

        let camera = IVec2::new(args.camera_x, args.camera_y);
        let mut surface = ImageSurface::new(viewport_w, viewport_h);
        surface.clear(Rgba([0, 0, 0, 255]));
        generator.draw(&mut surface, camera);

        if args.enemies {
            for room in generator.rooms().iter().skip(1) {
                let (cx, cy) = room.center();
                let enemy = Enemy::new(cx as f32 * tile_size as f32, cy as f32 * tile_size as f32)
                    .with_tile_size(tile_size);
                enemy.draw(&mut surface, camera);
            }
        }

        surface.save(out)?;
        info!(path = %out.display(), width = viewport_w, height = viewport_h, "saved render");
    }

    Ok(())
}

/// Pixel extent of `cells` tiles, or an error if it does not fit an image dimension
fn map_pixels(cells: usize, tile_size: u32) -> Result<u32, String> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(tile_size))
        .ok_or_else(|| format!("{cells} cells of {tile_size}px overflow the render size; pass --viewport-w/--viewport-h"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_pixels() {
        assert_eq!(map_pixels(50, 48), Ok(2400));
        assert!(map_pixels(100_000, 100_000).is_err());
        assert!(map_pixels(usize::MAX, 1).is_err());
    }
}
