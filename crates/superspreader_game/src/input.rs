use superspreader_common::key::Key;

use crate::grid::Direction;

/// Translate a logical key into a movement direction. Keys the game
/// does not react to map to `None`.
pub fn map_key(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::None => None,
    }
}

/// Buffer for the most recent directional key-down event.
///
/// Key events arrive asynchronously from the host event loop; the game
/// loop reads the latch once per tick via `take`, so one keypress moves
/// the player exactly one tile. A later keypress before the next tick
/// replaces the latched direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputLatch {
    latched: Option<Direction>,
}

impl InputLatch {
    pub fn key_down(&mut self, key: Key) {
        if let Some(dir) = map_key(key) {
            self.latched = Some(dir);
        }
    }

    /// Consume the latched direction, leaving the latch empty.
    pub fn take(&mut self) -> Option<Direction> {
        self.latched.take()
    }
}
