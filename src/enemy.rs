//! Enemy entity: position, health and draw state. No behaviour lives here.

use crate::constants::*;
use crate::dungeon_gen::Rect;
use crate::render::RenderSurface;
use glam::{IVec2, Vec2};
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;
use tracing::warn;

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn percentage(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }

    pub fn damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

pub struct Enemy {
    /// Top-left corner in world pixels
    pub position: Vec2,
    pub health: Health,
    pub speed: f32,
    pub velocity: Vec2,
    tile_size: u32,
    sprite: Option<RgbaImage>,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            health: Health::new(ENEMY_DEFAULT_HEALTH),
            speed: ENEMY_DEFAULT_SPEED,
            velocity: Vec2::ZERO,
            tile_size: ENEMY_TILE_SIZE,
            sprite: None,
        }
    }

    pub fn with_health(mut self, hp: i32) -> Self {
        self.health = Health::new(hp);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the sprite edge; an already loaded sprite is rescaled
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        if let Some(sprite) = self.sprite.take() {
            self.sprite = Some(Self::scale(&sprite, tile_size));
        }
        self
    }

    /// Load a sprite and scale it to the tile size.
    ///
    /// A sprite that fails to load is logged and the enemy keeps drawing as
    /// a flat rectangle.
    pub fn with_sprite(mut self, path: &Path) -> Self {
        match image::open(path) {
            Ok(img) => self.sprite = Some(Self::scale(&img.into_rgba8(), self.tile_size)),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to load enemy sprite"),
        }
        self
    }

    /// Use an already decoded image, e.g. a tile from an atlas
    pub fn with_sprite_image(mut self, sprite: &RgbaImage) -> Self {
        self.sprite = Some(Self::scale(sprite, self.tile_size));
        self
    }

    fn scale(img: &RgbaImage, tile_size: u32) -> RgbaImage {
        if img.dimensions() == (tile_size, tile_size) {
            return img.clone();
        }
        imageops::resize(img, tile_size, tile_size, imageops::FilterType::Nearest)
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn sprite(&self) -> Option<&RgbaImage> {
        self.sprite.as_ref()
    }

    /// Pixel-space bounds, truncated to whole pixels
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            self.tile_size as i32,
            self.tile_size as i32,
        )
    }

    /// Draw relative to a camera offset
    pub fn draw(&self, surface: &mut impl RenderSurface, camera: IVec2) {
        let screen_x = (self.position.x as i32).saturating_sub(camera.x);
        let screen_y = (self.position.y as i32).saturating_sub(camera.y);

        match &self.sprite {
            Some(sprite) => surface.draw_image(sprite, screen_x, screen_y),
            None => surface.fill_rect(
                screen_x,
                screen_y,
                self.tile_size,
                self.tile_size,
                Rgba(ENEMY_FALLBACK_COLOR),
            ),
        }
    }
}
