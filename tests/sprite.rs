use std::collections::HashMap;

use glam::{U16Vec2, Vec2};
use pretty_assertions::assert_eq;
use rogue::error::TextureError;
use rogue::helpers::DrawRect;
use rogue::texture::batch::RecordingBatch;
use rogue::texture::sprite::{AtlasMapper, MapperFrame, Sprite, SpriteAtlas};
use rogue::texture::Color;
use speculoos::prelude::*;

fn frame(x: u16, y: u16, width: u16, height: u16) -> MapperFrame {
    MapperFrame {
        pos: U16Vec2::new(x, y),
        size: U16Vec2::new(width, height),
    }
}

fn atlas() -> SpriteAtlas {
    let frames = HashMap::from([
        ("tile1".to_string(), frame(0, 0, 32, 32)),
        ("tile2".to_string(), frame(32, 0, 64, 64)),
    ]);
    SpriteAtlas::new(AtlasMapper { frames })
}

#[test]
fn test_sprite_atlas_basic() {
    let mut frames = HashMap::new();
    frames.insert("test".to_string(), frame(10, 20, 32, 64));

    let atlas = SpriteAtlas::new(AtlasMapper { frames });

    let tile = atlas.get_tile("test").unwrap();
    assert_eq!(tile.pos, U16Vec2::new(10, 20));
    assert_eq!(tile.size, U16Vec2::new(32, 64));
    assert_eq!(tile.color, None);
}

#[test]
fn test_sprite_atlas_multiple_tiles() {
    let atlas = atlas();

    assert_eq!(atlas.tiles_count(), 2);
    assert_that(&atlas.has_tile("tile1")).is_true();
    assert_that(&atlas.has_tile("tile2")).is_true();
    assert_that(&atlas.has_tile("tile3")).is_false();
    assert_eq!(
        atlas.get_tile("nonexistent"),
        Err(TextureError::AtlasTileNotFound("nonexistent".to_string()))
    );
}

#[test]
fn test_sprite_atlas_color() {
    let mut atlas = atlas();
    assert_eq!(atlas.default_color(), None);

    let color = Color::RGB(255, 0, 0);
    atlas.set_color(color);
    assert_eq!(atlas.default_color(), Some(color));
    assert_eq!(atlas.get_tile("tile1").unwrap().color, Some(color));
}

#[test]
fn test_atlas_sprite_size_and_scale() {
    let sprite = atlas().sprite("tile1").unwrap();
    assert_eq!(sprite.name(), "tile1");
    assert_eq!(sprite.size(), Vec2::new(32.0, 32.0));

    let sprite = sprite.with_scale(0.5);
    assert_eq!(sprite.size(), Vec2::new(16.0, 16.0));
}

#[test]
fn test_atlas_sprite_dispose() {
    let mut sprite = atlas().sprite("tile2").unwrap();
    let mut batch = RecordingBatch::new();
    sprite.draw(&mut batch, Vec2::ZERO).unwrap();

    sprite.dispose();
    sprite.dispose();

    assert_that(&sprite.is_disposed()).is_true();
    assert_that(&sprite.tile().is_none()).is_true();
    assert_eq!(sprite.size(), Vec2::ZERO);
    assert_eq!(
        sprite.draw(&mut batch, Vec2::ZERO),
        Err(TextureError::Disposed("tile2".to_string()))
    );
    assert_eq!(batch.len(), 1);
}

#[test]
fn test_recording_batch_color_fallback() {
    let mut atlas = atlas();
    let mut batch = RecordingBatch::with_default_color(Color::RGB(0, 0, 255));

    atlas.sprite("tile1").unwrap().draw(&mut batch, Vec2::ZERO).unwrap();
    atlas.set_color(Color::RGB(0, 255, 0));
    atlas.sprite("tile1").unwrap().draw(&mut batch, Vec2::ZERO).unwrap();

    let colors: Vec<Color> = batch.calls().iter().map(|call| call.color).collect();
    assert_eq!(colors, vec![Color::RGB(0, 0, 255), Color::RGB(0, 255, 0)]);

    let mut plain = RecordingBatch::new();
    let mut tile = atlas.get_tile("tile2").unwrap();
    tile.color = None;
    tile.render(&mut plain, DrawRect::default()).unwrap();
    assert_eq!(plain.calls()[0].color, Color::WHITE);
}

#[test]
fn test_recording_batch_flush() {
    let mut batch = RecordingBatch::new();
    let sprite = atlas().sprite("tile1").unwrap();
    sprite.draw(&mut batch, Vec2::ZERO).unwrap();
    sprite.draw(&mut batch, Vec2::ONE).unwrap();

    let drained = batch.flush();
    assert_eq!(drained.len(), 2);
    assert_that(&batch.is_empty()).is_true();
}
