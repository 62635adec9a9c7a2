use crate::color::Color;

/// Axis-aligned rectangle in window pixel coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }
}

/// Identifiers for the bitmap sprites the game can ask a frontend to draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sprite {
    Player,
    Virus,
}

/// A 2D drawing surface provided by the host for one frame.
///
/// Drawing is a pure projection of game state: implementations must not
/// feed anything back into the game. `text_size` reports the pixel
/// dimensions `draw_text` would produce for `text`, so callers can lay
/// text out from measured metrics.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, color: Color, x: i32, y: i32);
    fn text_size(&mut self, text: &str) -> (u32, u32);
}
