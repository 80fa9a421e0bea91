//! Entities and the strategies they delegate to.
//!
//! An [`Entity`] carries identity, position and a sprite, and forwards its
//! per-tick logic and per-frame drawing to an [`UpdateComponent`] and a
//! [`RenderComponent`]. Everything here is single-threaded: handles are
//! `Rc<RefCell<_>>` and components are shared through `Rc`.

pub mod array;
pub mod component;
pub mod game_entity;

use glam::Vec2;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{EntityError, GameResult};
use crate::texture::batch::SpriteBatch;
use crate::texture::sprite::Sprite;

pub use array::EntityArray;
pub use component::{ConstantVelocity, RenderComponent, SpriteRenderer, UpdateComponent};
pub use game_entity::GameEntity;

/// A shared handle to an entity, as stored by [`EntityArray`].
pub type EntityRef = Rc<RefCell<dyn Entity>>;

/// Wraps a concrete entity into a shared handle.
pub fn entity_ref<E: Entity + 'static>(entity: E) -> EntityRef {
    Rc::new(RefCell::new(entity))
}

/// A game object that composes one update and one render strategy.
pub trait Entity {
    /// Sets the main update component, replacing any previous one.
    fn set_update_component(&mut self, update_component: Rc<dyn UpdateComponent>);

    fn update_component(&self) -> Option<Rc<dyn UpdateComponent>>;

    /// Runs the update component against this entity.
    ///
    /// Fails with [`EntityError::MissingComponent`] if none has been assigned.
    fn update(&mut self) -> Result<(), EntityError>;

    /// Sets the main render component, replacing any previous one.
    fn set_render_component(&mut self, render_component: Rc<dyn RenderComponent>);

    fn render_component(&self) -> Option<Rc<dyn RenderComponent>>;

    /// Runs the render component against this entity and `batch`.
    ///
    /// Fails with [`EntityError::MissingComponent`] if none has been assigned.
    fn render(&self, batch: &mut dyn SpriteBatch) -> GameResult<()>;

    fn id(&self) -> &str;

    /// Sets the id of this entity.
    ///
    /// Uniqueness is not checked here. Use [`EntityArray::set_entity_id`] to keep
    /// a collection's index in step with the new id.
    fn set_id(&mut self, id: String);

    fn set_position(&mut self, x: f32, y: f32) {
        self.set_position_vec(Vec2::new(x, y));
    }

    fn set_position_vec(&mut self, position: Vec2);

    fn position(&self) -> Vec2;

    /// Sets the sprite for this entity. A previously owned sprite is released.
    fn set_sprite(&mut self, sprite: Box<dyn Sprite>);

    fn sprite(&self) -> Option<&dyn Sprite>;

    /// Releases the sprite and any other owned resources.
    ///
    /// Calling this more than once has no further effect.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

impl fmt::Debug for dyn Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id())
            .field("position", &self.position())
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}
