use super::RenderSurface;
use image::{imageops, ImageResult, Rgba, RgbaImage};
use std::path::Path;

/// Software surface backed by an RGBA canvas the size of the viewport.
pub struct ImageSurface {
    canvas: RgbaImage,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
        }
    }

    pub fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.canvas.pixels_mut() {
            *pixel = color;
        }
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Save the canvas; the format follows the file extension
    pub fn save(&self, path: &Path) -> ImageResult<()> {
        self.canvas.save(path)
    }
}

impl RenderSurface for ImageSurface {
    fn viewport_size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn draw_image(&mut self, image: &RgbaImage, x: i32, y: i32) {
        imageops::overlay(&mut self.canvas, image, x as i64, y as i64);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba<u8>) {
        let (canvas_w, canvas_h) = self.canvas.dimensions();
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(canvas_w as i64);
        let y1 = (y as i64 + height as i64).min(canvas_h as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                self.canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
