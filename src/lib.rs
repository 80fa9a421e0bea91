//! Entity/component scaffolding for a 2D game.
//!
//! [`entity::EntityArray`] holds entities in insertion order with an id index,
//! and drives their [`entity::UpdateComponent`] and [`entity::RenderComponent`]
//! strategies once per tick and frame. Rendering goes through the
//! [`texture::batch::SpriteBatch`] seam, so the core never touches a graphics
//! backend directly.

pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod helpers;
pub mod logging;
pub mod texture;
