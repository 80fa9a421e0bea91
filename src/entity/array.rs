//! An ordered entity collection with an id index.
//!
//! The sequence keeps insertion order and may hold the same handle more than
//! once. The index maps an id to the entity most recently added (or re-keyed)
//! under it. Every mutating method updates both together.

use std::collections::HashMap;
use std::rc::Rc;
use std::slice;
use tracing::{debug, trace};

use crate::constants::DEFAULT_ENTITY_CAPACITY;
use crate::entity::EntityRef;
use crate::error::{EntityError, GameResult};
use crate::texture::batch::SpriteBatch;

#[derive(Clone)]
pub struct EntityArray {
    entities: Vec<EntityRef>,
    index: HashMap<String, EntityRef>,
}

impl EntityArray {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ENTITY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Appends `entity` and indexes it under its current id.
    ///
    /// An entity already indexed under the same id is shadowed, not removed.
    pub fn add(&mut self, entity: EntityRef) {
        let id = entity.borrow().id().to_owned();
        if let Some(shadowed) = self.index.insert(id.clone(), Rc::clone(&entity)) {
            if !Rc::ptr_eq(&shadowed, &entity) {
                debug!(id = %id, "Entity id already indexed, later entity shadows earlier one");
            }
        }
        self.entities.push(entity);
        trace!(id = %id, len = self.entities.len(), "Added entity");
    }

    /// Updates every entity in insertion order.
    ///
    /// Stops at the first entity that fails to update.
    pub fn update_all(&self) -> Result<(), EntityError> {
        for entity in &self.entities {
            entity.borrow_mut().update()?;
        }
        Ok(())
    }

    /// Renders every entity in insertion order into the same batch.
    ///
    /// Stops at the first entity that fails to render. Entities are only
    /// borrowed shared, so render components may read other handles.
    pub fn render_all(&self, batch: &mut dyn SpriteBatch) -> GameResult<()> {
        for entity in &self.entities {
            entity.borrow().render(batch)?;
        }
        Ok(())
    }

    /// Removes every entity and clears the index.
    pub fn remove_all(&mut self) {
        debug!(count = self.entities.len(), "Removing all entities");
        self.entities.clear();
        self.index.clear();
    }

    /// Removes the first occurrence of `entity`, compared by handle identity.
    ///
    /// Returns `false` if the entity was not present.
    pub fn remove_entity(&mut self, entity: &EntityRef) -> bool {
        let Some(position) = self.entities.iter().position(|e| Rc::ptr_eq(e, entity)) else {
            return false;
        };
        self.entities.remove(position);

        // Another occurrence of the same handle keeps its index entry.
        if !self.contains(entity) {
            // The key goes even if a later entity shadows this one under it.
            self.index.remove(entity.borrow().id());
            self.index.retain(|_, indexed| !Rc::ptr_eq(indexed, entity));
        }
        trace!(id = %entity.borrow().id(), len = self.entities.len(), "Removed entity");
        true
    }

    /// Disposes every entity in insertion order. The collection is left intact.
    pub fn dispose_all(&self) {
        debug!(count = self.entities.len(), "Disposing all entities");
        for entity in &self.entities {
            entity.borrow_mut().dispose();
        }
    }

    /// Returns the entity indexed under `id`.
    pub fn get_entity_by_id(&self, id: &str) -> Option<EntityRef> {
        self.index.get(id).cloned()
    }

    /// Returns the first entity, in insertion order, whose id contains `partial_id`.
    pub fn find_first_instance_of(&self, partial_id: &str) -> Option<EntityRef> {
        self.entities
            .iter()
            .find(|entity| entity.borrow().id().contains(partial_id))
            .cloned()
    }

    /// Changes the id of `entity` and moves its index entry to the new key.
    ///
    /// If the entity is not in this collection only its id changes.
    pub fn set_entity_id(&mut self, entity: &EntityRef, id: impl Into<String>) {
        let id = id.into();
        if !self.contains(entity) {
            entity.borrow_mut().set_id(id);
            return;
        }

        self.index.retain(|_, indexed| !Rc::ptr_eq(indexed, entity));
        entity.borrow_mut().set_id(id.clone());
        self.index.insert(id, Rc::clone(entity));
    }

    /// Rebuilds the index from the current ids, in insertion order.
    ///
    /// Needed after ids were changed through [`Entity::set_id`](crate::entity::Entity::set_id).
    pub fn reindex(&mut self) {
        self.index.clear();
        for entity in &self.entities {
            let id = entity.borrow().id().to_owned();
            self.index.insert(id, Rc::clone(entity));
        }
        debug!(indexed = self.index.len(), len = self.entities.len(), "Rebuilt entity index");
    }

    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.entities.iter().any(|e| Rc::ptr_eq(e, entity))
    }

    pub fn get(&self, index: usize) -> Option<&EntityRef> {
        self.entities.get(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of distinct ids in the index.
    pub fn indexed_len(&self) -> usize {
        self.index.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, EntityRef> {
        self.entities.iter()
    }
}

impl Default for EntityArray {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntityArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entities.iter().map(|e| e.borrow().id().to_owned()))
            .finish()
    }
}

impl<'a> IntoIterator for &'a EntityArray {
    type Item = &'a EntityRef;
    type IntoIter = slice::Iter<'a, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl Extend<EntityRef> for EntityArray {
    fn extend<I: IntoIterator<Item = EntityRef>>(&mut self, iter: I) {
        for entity in iter {
            self.add(entity);
        }
    }
}

impl FromIterator<EntityRef> for EntityArray {
    fn from_iter<I: IntoIterator<Item = EntityRef>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
