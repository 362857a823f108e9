//! Render surface abstraction - what map and enemy drawing paint onto.

mod image_surface;
mod recorder;

pub use image_surface::ImageSurface;
pub use recorder::{DrawCommand, DrawRecorder};

use image::{Rgba, RgbaImage};

/// Anything that can receive tile blits and flat rectangles.
///
/// Coordinates are screen pixels with the origin at the top-left of the
/// viewport; they may be negative or past the viewport edge, in which case
/// the surface clips.
pub trait RenderSurface {
    /// Viewport size in pixels (width, height)
    fn viewport_size(&self) -> (u32, u32);

    /// Blit an image with its top-left corner at (x, y), keeping alpha
    fn draw_image(&mut self, image: &RgbaImage, x: i32, y: i32);

    /// Fill a solid rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba<u8>);
}
