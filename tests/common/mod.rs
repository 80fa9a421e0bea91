#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::{U16Vec2, Vec2};
use rogue::entity::{entity_ref, Entity, EntityRef, GameEntity, RenderComponent, UpdateComponent};
use rogue::error::{GameResult, TextureError};
use rogue::helpers::DrawRect;
use rogue::texture::batch::SpriteBatch;
use rogue::texture::sprite::{AtlasTile, Sprite};

/// Shared, ordered record of component invocations.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Records the id of every entity it updates.
pub struct LoggingUpdate {
    pub log: CallLog,
}

impl UpdateComponent for LoggingUpdate {
    fn update(&self, entity: &mut dyn Entity) {
        self.log.borrow_mut().push(entity.id().to_owned());
    }
}

/// Records the id of every entity it renders and the address of the batch it was given.
pub struct LoggingRender {
    pub log: CallLog,
    pub batches: Rc<RefCell<Vec<usize>>>,
}

impl RenderComponent for LoggingRender {
    fn render(&self, entity: &dyn Entity, batch: &mut dyn SpriteBatch) -> GameResult<()> {
        self.log.borrow_mut().push(entity.id().to_owned());
        self.batches.borrow_mut().push(std::ptr::from_mut(batch).cast::<()>() as usize);
        Ok(())
    }
}

/// A sprite that counts how often it was released.
pub struct CountingSprite {
    pub disposals: Rc<Cell<u32>>,
    pub size: Vec2,
}

impl CountingSprite {
    pub fn new(disposals: Rc<Cell<u32>>) -> Self {
        Self {
            disposals,
            size: Vec2::new(8.0, 8.0),
        }
    }
}

impl Sprite for CountingSprite {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&self, batch: &mut dyn SpriteBatch, position: Vec2) -> Result<(), TextureError> {
        let tile = AtlasTile {
            pos: U16Vec2::ZERO,
            size: U16Vec2::new(self.size.x as u16, self.size.y as u16),
            color: None,
        };
        batch.draw_tile(&tile, DrawRect::new(position, self.size))
    }

    fn dispose(&mut self) {
        self.disposals.set(self.disposals.get() + 1);
    }

    fn is_disposed(&self) -> bool {
        self.disposals.get() > 0
    }
}

/// A batch that rejects every draw.
pub struct FailingBatch;

impl SpriteBatch for FailingBatch {
    fn draw_tile(&mut self, _tile: &AtlasTile, _dest: DrawRect) -> Result<(), TextureError> {
        Err(TextureError::RenderFailed("device lost".to_string()))
    }
}

pub fn entity(id: &str) -> EntityRef {
    entity_ref(GameEntity::new(id))
}

pub fn ids(entities: &rogue::entity::EntityArray) -> Vec<String> {
    entities.iter().map(|e| e.borrow().id().to_owned()).collect()
}
