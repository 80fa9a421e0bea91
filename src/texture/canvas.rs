//! SDL2-backed sprite batch.

use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture};

use crate::constants::DEFAULT_SPRITE_COLOR;
use crate::error::TextureError;
use crate::helpers::DrawRect;
use crate::texture::batch::SpriteBatch;
use crate::texture::sprite::AtlasTile;
use crate::texture::Color;

/// Draws atlas tiles by copying from one atlas texture onto a canvas.
///
/// Caches color modulation state to avoid redundant SDL2 calls.
pub struct CanvasBatch<'a, 'r, T: RenderTarget> {
    canvas: &'a mut Canvas<T>,
    texture: &'a mut Texture<'r>,
    default_color: Color,
    last_modulation: Option<Color>,
}

impl<'a, 'r, T: RenderTarget> CanvasBatch<'a, 'r, T> {
    pub fn new(canvas: &'a mut Canvas<T>, texture: &'a mut Texture<'r>) -> Self {
        Self {
            canvas,
            texture,
            default_color: DEFAULT_SPRITE_COLOR,
            last_modulation: None,
        }
    }

    pub fn set_default_color(&mut self, color: Color) {
        self.default_color = color;
    }
}

impl<T: RenderTarget> SpriteBatch for CanvasBatch<'_, '_, T> {
    fn draw_tile(&mut self, tile: &AtlasTile, dest: DrawRect) -> Result<(), TextureError> {
        let color = tile.color.unwrap_or(self.default_color);
        if self.last_modulation != Some(color) {
            self.texture.set_color_mod(color.r, color.g, color.b);
            self.texture.set_alpha_mod(color.a);
            self.last_modulation = Some(color);
        }

        let src = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x as u32, tile.size.y as u32);
        self.canvas
            .copy(&*self.texture, src, dest_rect(&dest))
            .map_err(TextureError::RenderFailed)
    }
}

/// Snaps a destination rectangle to whole pixels. Negative sizes collapse to zero.
fn dest_rect(dest: &DrawRect) -> Rect {
    Rect::new(
        dest.origin.x.round() as i32,
        dest.origin.y.round() as i32,
        dest.size.x.round().max(0.0) as u32,
        dest.size.y.round().max(0.0) as u32,
    )
}
