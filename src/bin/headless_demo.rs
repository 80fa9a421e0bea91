//! Runs a handful of entities through update/render passes without a window.
//!
//! Usage: `headless_demo [ticks]` (defaults to two seconds of ticks).

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::{U16Vec2, Vec2};
use rogue::constants::{LOOP_TIME, TICKS_PER_SECOND};
use rogue::entity::{entity_ref, ConstantVelocity, Entity, EntityArray, GameEntity, SpriteRenderer, UpdateComponent};
use rogue::formatter::increment_tick;
use rogue::logging::setup_tracing;
use rogue::texture::batch::RecordingBatch;
use rogue::texture::sprite::{AtlasMapper, MapperFrame, SpriteAtlas};
use tracing::{debug, info, info_span, warn};

const ARENA_WIDTH: f32 = 224.0;

fn demo_atlas() -> SpriteAtlas {
    let frame = |x: u16| MapperFrame {
        pos: U16Vec2::new(x, 0),
        size: U16Vec2::new(16, 16),
    };
    let frames = HashMap::from([
        ("hero".to_string(), frame(0)),
        ("slime".to_string(), frame(16)),
        ("torch".to_string(), frame(32)),
    ]);
    SpriteAtlas::new(AtlasMapper { frames })
}

fn populate(atlas: &SpriteAtlas) -> Result<EntityArray> {
    let renderer: Rc<SpriteRenderer> = Rc::new(SpriteRenderer);
    let drift: Rc<dyn UpdateComponent> = Rc::new(ConstantVelocity::new(Vec2::new(0.5, 0.0)));
    let wrap: Rc<dyn UpdateComponent> = Rc::new(|entity: &mut dyn Entity| {
        let mut position = entity.position() + Vec2::new(2.0, 0.0);
        if position.x > ARENA_WIDTH {
            position.x -= ARENA_WIDTH;
        }
        entity.set_position_vec(position);
    });

    let mut entities = EntityArray::new();
    entities.add(entity_ref(
        GameEntity::new("player")
            .with_position(Vec2::new(16.0, 16.0))
            .with_sprite(atlas.sprite("hero").context("player sprite")?)
            .with_update_component(wrap)
            .with_render_component(renderer.clone()),
    ));
    for (i, y) in [48.0, 80.0].into_iter().enumerate() {
        entities.add(entity_ref(
            GameEntity::new(format!("enemy-slime-{}", i + 1))
                .with_position(Vec2::new(0.0, y))
                .with_sprite(atlas.sprite("slime").context("slime sprite")?)
                .with_update_component(drift.clone())
                .with_render_component(renderer.clone()),
        ));
    }
    entities.add(entity_ref(
        GameEntity::new("torch")
            .with_position(Vec2::new(112.0, 8.0))
            .with_sprite(atlas.sprite("torch").context("torch sprite")?.with_scale(2.0))
            .with_update_component(Rc::new(ConstantVelocity::default()))
            .with_render_component(renderer),
    ));

    Ok(entities)
}

fn main() -> Result<()> {
    setup_tracing().context("failed to install tracing subscriber")?;

    let ticks = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u32>().with_context(|| format!("invalid tick count: {arg}"))?,
        None => TICKS_PER_SECOND * 2,
    };

    let atlas = demo_atlas();
    let mut entities = populate(&atlas)?;
    info!(entities = entities.len(), ticks, "Starting headless loop");

    let mut batch = RecordingBatch::new();
    let mut draws = 0usize;
    for tick in 0..ticks {
        let _span = info_span!("tick", tick).entered();
        let start = Instant::now();

        entities.update_all()?;
        entities.render_all(&mut batch)?;
        draws += batch.flush().len();
        increment_tick();

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        } else {
            warn!("Tick behind schedule by: {:?}", elapsed - LOOP_TIME);
        }
    }

    if let Some(player) = entities.get_entity_by_id("player") {
        info!(position = ?player.borrow().position(), "Player finished");
    }
    if let Some(slime) = entities.find_first_instance_of("slime") {
        debug!(id = slime.borrow().id(), "First slime");
    }

    entities.dispose_all();
    entities.remove_all();
    info!(draws, "Done");
    Ok(())
}
