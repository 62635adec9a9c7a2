/// Logical keys the game reacts to. Frontends translate their own
/// keycodes into these; anything the game does not care about maps
/// to `Key::None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    None,
}
