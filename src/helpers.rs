use glam::Vec2;

/// An axis-aligned destination rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawRect {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

impl DrawRect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

pub fn centered_with_size(pixel_pos: Vec2, size: Vec2) -> DrawRect {
    DrawRect::new(pixel_pos - size / 2.0, size)
}
