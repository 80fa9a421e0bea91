//! This module contains all the constants used by the crate and its demo.

use std::time::Duration;

use crate::texture::Color;

/// Logic ticks per second expected from the game loop.
pub const TICKS_PER_SECOND: u32 = 60;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / TICKS_PER_SECOND as f64) as u64);

/// Initial capacity of an [`EntityArray`](crate::entity::EntityArray) made with `new`.
pub const DEFAULT_ENTITY_CAPACITY: usize = 16;

/// Color used when neither a tile nor its batch specify one.
pub const DEFAULT_SPRITE_COLOR: Color = Color::WHITE;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos(), expected_nanos as u128);
    }
}
