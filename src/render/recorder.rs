use super::RenderSurface;
use image::{Rgba, RgbaImage};

/// One call made against a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Image { x: i32, y: i32, width: u32, height: u32 },
    Rect { x: i32, y: i32, width: u32, height: u32, color: Rgba<u8> },
}

impl DrawCommand {
    /// Top-left screen position of the command
    pub fn position(&self) -> (i32, i32) {
        match *self {
            DrawCommand::Image { x, y, .. } | DrawCommand::Rect { x, y, .. } => (x, y),
        }
    }
}

/// Surface that paints nothing and logs every call in issue order.
pub struct DrawRecorder {
    viewport: (u32, u32),
    pub commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            commands: Vec::new(),
        }
    }

    /// Index of the first command issued at the given screen position
    pub fn first_at(&self, x: i32, y: i32) -> Option<usize> {
        self.commands.iter().position(|cmd| cmd.position() == (x, y))
    }

    /// Every command issued at the given screen position, in order
    pub fn all_at(&self, x: i32, y: i32) -> Vec<DrawCommand> {
        self.commands
            .iter()
            .copied()
            .filter(|cmd| cmd.position() == (x, y))
            .collect()
    }
}

impl RenderSurface for DrawRecorder {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn draw_image(&mut self, image: &RgbaImage, x: i32, y: i32) {
        let (width, height) = image.dimensions();
        self.commands.push(DrawCommand::Image { x, y, width, height });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba<u8>) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color });
    }
}
