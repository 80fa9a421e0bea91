use glam::{U16Vec2, Vec2};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::error::TextureError;
use crate::helpers::{centered_with_size, DrawRect};
use crate::texture::batch::SpriteBatch;
use crate::texture::Color;

/// Atlas frame mapping data, usually loaded from atlas metadata.
#[derive(Clone, Debug, Default)]
pub struct AtlasMapper {
    /// Mapping from sprite name to frame bounds within the atlas texture
    pub frames: HashMap<String, MapperFrame>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MapperFrame {
    pub pos: U16Vec2,
    pub size: U16Vec2,
}

/// A single tile within a sprite atlas, defined by its position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasTile {
    pub pos: U16Vec2,
    pub size: U16Vec2,
    pub color: Option<Color>,
}

impl AtlasTile {
    /// Draws this tile into `batch` at the given destination rectangle.
    pub fn render(&self, batch: &mut dyn SpriteBatch, dest: DrawRect) -> Result<(), TextureError> {
        batch.draw_tile(self, dest)
    }
}

/// Named regions of a single texture atlas.
///
/// The atlas only knows where frames live; the pixels belong to whichever
/// [`SpriteBatch`] ends up drawing the tiles.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    /// Mapping from sprite names to their pixel coordinates within the texture
    tiles: HashMap<String, MapperFrame>,
    default_color: Option<Color>,
}

impl SpriteAtlas {
    pub fn new(mapper: AtlasMapper) -> Self {
        let tile_count = mapper.frames.len();
        let tiles = mapper.frames.into_iter().collect();

        debug!(tile_count, "Created sprite atlas");
        Self {
            tiles,
            default_color: None,
        }
    }

    /// Retrieves a sprite tile by name from the atlas.
    ///
    /// The returned tile carries the atlas default color, if one is set.
    pub fn get_tile(&self, name: &str) -> Result<AtlasTile, TextureError> {
        let frame = self.tiles.get(name).ok_or_else(|| {
            debug!(tile_name = name, "Atlas tile not found");
            TextureError::AtlasTileNotFound(name.to_string())
        })?;
        Ok(AtlasTile {
            pos: frame.pos,
            size: frame.size,
            color: self.default_color,
        })
    }

    /// Builds an owned sprite for the named tile.
    pub fn sprite(&self, name: &str) -> Result<AtlasSprite, TextureError> {
        Ok(AtlasSprite::new(name, self.get_tile(name)?))
    }

    pub fn tiles_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn has_tile(&self, name: &str) -> bool {
        self.tiles.contains_key(name)
    }

    pub fn set_color(&mut self, color: Color) {
        self.default_color = Some(color);
    }

    pub fn default_color(&self) -> Option<Color> {
        self.default_color
    }
}

/// A drawable resource exclusively owned by one entity.
///
/// `dispose` releases whatever the sprite holds. Implementations must tolerate
/// being disposed more than once, though entities only ever do it once.
pub trait Sprite {
    /// The drawn size of the sprite, in pixels.
    fn size(&self) -> Vec2;

    /// Draws the sprite centered on `position`.
    fn draw(&self, batch: &mut dyn SpriteBatch, position: Vec2) -> Result<(), TextureError>;

    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// A sprite backed by one tile of a [`SpriteAtlas`].
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasSprite {
    name: String,
    tile: Option<AtlasTile>,
    scale: f32,
}

impl AtlasSprite {
    pub fn new(name: impl Into<String>, tile: AtlasTile) -> Self {
        Self {
            name: name.into(),
            tile: Some(tile),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// The backing tile, or `None` once released.
    pub fn tile(&self) -> Option<&AtlasTile> {
        self.tile.as_ref()
    }
}

impl Sprite for AtlasSprite {
    fn size(&self) -> Vec2 {
        self.tile
            .map(|tile| tile.size.as_vec2() * self.scale)
            .unwrap_or(Vec2::ZERO)
    }

    fn draw(&self, batch: &mut dyn SpriteBatch, position: Vec2) -> Result<(), TextureError> {
        let tile = self.tile.as_ref().ok_or_else(|| TextureError::Disposed(self.name.clone()))?;
        tile.render(batch, centered_with_size(position, self.size()))
    }

    fn dispose(&mut self) {
        if self.tile.take().is_some() {
            trace!(sprite = %self.name, "Released sprite");
        }
    }

    fn is_disposed(&self) -> bool {
        self.tile.is_none()
    }
}
