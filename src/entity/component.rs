//! Update and render strategies.
//!
//! Components are shared between entities, so they take `&self`. A component
//! that needs per-entity state should keep it on the entity instead, or use
//! interior mutability.

use glam::Vec2;

use crate::entity::Entity;
use crate::error::GameResult;
use crate::texture::batch::SpriteBatch;

/// Per-tick logic for an entity.
pub trait UpdateComponent {
    fn update(&self, entity: &mut dyn Entity);
}

/// Per-frame drawing for an entity.
pub trait RenderComponent {
    fn render(&self, entity: &dyn Entity, batch: &mut dyn SpriteBatch) -> GameResult<()>;
}

impl<F> UpdateComponent for F
where
    F: Fn(&mut dyn Entity),
{
    fn update(&self, entity: &mut dyn Entity) {
        self(entity)
    }
}

impl<F> RenderComponent for F
where
    F: Fn(&dyn Entity, &mut dyn SpriteBatch) -> GameResult<()>,
{
    fn render(&self, entity: &dyn Entity, batch: &mut dyn SpriteBatch) -> GameResult<()> {
        self(entity, batch)
    }
}

/// Draws the entity's sprite centered on its position.
///
/// Entities without a sprite draw nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteRenderer;

impl RenderComponent for SpriteRenderer {
    fn render(&self, entity: &dyn Entity, batch: &mut dyn SpriteBatch) -> GameResult<()> {
        if let Some(sprite) = entity.sprite() {
            sprite.draw(batch, entity.position())?;
        }
        Ok(())
    }
}

/// Moves the entity by a fixed offset every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantVelocity {
    pub velocity: Vec2,
}

impl ConstantVelocity {
    pub fn new(velocity: Vec2) -> Self {
        Self { velocity }
    }
}

impl UpdateComponent for ConstantVelocity {
    fn update(&self, entity: &mut dyn Entity) {
        let position = entity.position() + self.velocity;
        entity.set_position_vec(position);
    }
}
