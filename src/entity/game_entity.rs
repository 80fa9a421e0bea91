use glam::Vec2;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

use crate::entity::{Entity, RenderComponent, UpdateComponent};
use crate::error::{ComponentKind, EntityError, GameResult};
use crate::texture::batch::SpriteBatch;
use crate::texture::sprite::Sprite;

/// The stock [`Entity`] implementation.
///
/// Holds its components by shared reference and its sprite by ownership.
#[derive(Default)]
pub struct GameEntity {
    id: String,
    position: Vec2,
    sprite: Option<Box<dyn Sprite>>,
    update_component: Option<Rc<dyn UpdateComponent>>,
    render_component: Option<Rc<dyn RenderComponent>>,
    disposed: bool,
}

impl GameEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_sprite(mut self, sprite: impl Sprite + 'static) -> Self {
        self.sprite = Some(Box::new(sprite));
        self
    }

    pub fn with_update_component(mut self, update_component: Rc<dyn UpdateComponent>) -> Self {
        self.update_component = Some(update_component);
        self
    }

    pub fn with_render_component(mut self, render_component: Rc<dyn RenderComponent>) -> Self {
        self.render_component = Some(render_component);
        self
    }

    fn missing(&self, kind: ComponentKind) -> EntityError {
        EntityError::MissingComponent {
            id: self.id.clone(),
            kind,
        }
    }
}

impl Entity for GameEntity {
    fn set_update_component(&mut self, update_component: Rc<dyn UpdateComponent>) {
        self.update_component = Some(update_component);
    }

    fn update_component(&self) -> Option<Rc<dyn UpdateComponent>> {
        self.update_component.clone()
    }

    fn update(&mut self) -> Result<(), EntityError> {
        // The component may replace itself on this entity, so hold our own handle.
        let component = self.update_component.clone().ok_or_else(|| self.missing(ComponentKind::Update))?;
        component.update(self);
        Ok(())
    }

    fn set_render_component(&mut self, render_component: Rc<dyn RenderComponent>) {
        self.render_component = Some(render_component);
    }

    fn render_component(&self) -> Option<Rc<dyn RenderComponent>> {
        self.render_component.clone()
    }

    fn render(&self, batch: &mut dyn SpriteBatch) -> GameResult<()> {
        let component = self.render_component.as_ref().ok_or_else(|| self.missing(ComponentKind::Render))?;
        component.render(self, batch)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_position_vec(&mut self, position: Vec2) {
        self.position = position;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_sprite(&mut self, sprite: Box<dyn Sprite>) {
        if let Some(mut previous) = self.sprite.replace(sprite) {
            previous.dispose();
        }
        self.disposed = false;
    }

    fn sprite(&self) -> Option<&dyn Sprite> {
        self.sprite.as_deref()
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(mut sprite) = self.sprite.take() {
            sprite.dispose();
        }
        self.disposed = true;
        trace!(id = %self.id, "Disposed entity");
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl fmt::Debug for GameEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEntity")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("has_sprite", &self.sprite.is_some())
            .field("has_update_component", &self.update_component.is_some())
            .field("has_render_component", &self.render_component.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}
