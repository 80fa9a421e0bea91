//! Draw targets for sprites.
//!
//! A [`SpriteBatch`] is borrowed for the duration of one render call and never
//! retained by entities or components.

use crate::constants::DEFAULT_SPRITE_COLOR;
use crate::error::TextureError;
use crate::helpers::DrawRect;
use crate::texture::sprite::AtlasTile;
use crate::texture::Color;

pub trait SpriteBatch {
    /// Queues or performs a copy of `tile` from the atlas into `dest`.
    fn draw_tile(&mut self, tile: &AtlasTile, dest: DrawRect) -> Result<(), TextureError>;
}

/// A single draw recorded by [`RecordingBatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub tile: AtlasTile,
    pub dest: DrawRect,
    /// The color the tile was drawn with, after falling back to the batch default
    pub color: Color,
}

/// A headless batch that keeps every draw call in submission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingBatch {
    calls: Vec<DrawCall>,
    default_color: Option<Color>,
}

impl RecordingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_color(color: Color) -> Self {
        Self {
            calls: Vec::new(),
            default_color: Some(color),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Drains the recorded calls, leaving the batch ready for the next frame.
    pub fn flush(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl SpriteBatch for RecordingBatch {
    fn draw_tile(&mut self, tile: &AtlasTile, dest: DrawRect) -> Result<(), TextureError> {
        let color = tile.color.unwrap_or(self.default_color.unwrap_or(DEFAULT_SPRITE_COLOR));
        self.calls.push(DrawCall { tile: *tile, dest, color });
        Ok(())
    }
}
