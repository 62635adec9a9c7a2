use superspreader_common::app::App;
use superspreader_common::key::Key;
use superspreader_common::surface::Surface;

use crate::game::Game;
use crate::render;
use crate::sound::{Sound, SoundManager};
use crate::{COLUMNS, ROWS, TILE_SIZE};

/// Frontend-facing application wrapper for one game session.
///
/// This type implements the shared `App` trait so the SDL2 frontend
/// can drive the game loop: key events are forwarded into the input
/// latch, each tick advances the game and triggers pickup sounds, and
/// each frame is drawn from a state snapshot.
#[derive(Default)]
pub struct GameApp {
    should_exit: bool,
    game: Game,
    sound: Option<SoundManager>,
}

impl GameApp {
    fn play(&self, sound: Sound) {
        if let Some(manager) = &self.sound {
            if let Err(e) = manager.play(sound) {
                log::warn!("Failed to queue sound {sound:?}: {e}");
            }
        }
    }
}

impl App for GameApp {
    fn init(&mut self) {
        log::info!("Super Spreader init");
        // Try to bring up audio. If this fails, the game still runs
        // but without music or sound effects.
        if self.sound.is_none() {
            self.sound = SoundManager::new();
        }
        self.play(Sound::Music);
    }

    fn tick(&mut self) {
        let outcome = self.game.tick();
        // one cough per collected virus, like the original
        for _ in 0..outcome.collected {
            self.play(Sound::Cough);
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        render::draw(&self.game.view(), surface);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        // key-up events are no-ops; key repeats from the host each
        // count as their own press
        if is_down {
            self.game.key_down(key);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Super Spreader exit, final score {}", self.game.score());
    }

    fn width(&self) -> u32 {
        COLUMNS * TILE_SIZE
    }

    fn height(&self) -> u32 {
        ROWS * TILE_SIZE
    }

    fn title(&self) -> String {
        "Supertartuttaja - Super Spreader".to_string()
    }
}
