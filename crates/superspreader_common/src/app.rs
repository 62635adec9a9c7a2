use crate::key::Key;
use crate::surface::Surface;

/// Contract between the game and its host frontend.
///
/// The host owns the window and the event loop; it promises to call
/// `handle_key_event` for each key event, `tick` once per fixed
/// interval, and `draw` once per frame after `tick`. Calls are
/// serialized; the game never assumes anything else about the host's
/// threading.
pub trait App {
    fn init(&mut self);
    fn tick(&mut self);
    fn draw(&mut self, surface: &mut dyn Surface);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
