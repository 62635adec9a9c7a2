use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};
use log::warn;
use sdl2::event::Event;
use sdl2::image::{InitFlag, LoadTexture};
use sdl2::keyboard::Keycode;
use sdl2::render::{Texture, TextureCreator, TextureQuery, WindowCanvas};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;
use typed_builder::TypedBuilder;

pub use sdl2;
pub use superspreader_common::app::App;
use superspreader_common::color::Color;
use superspreader_common::key::Key;
use superspreader_common::surface::{Rect, Sprite, Surface};

/// Point size of the score font, matching the original 25pt Lato Bold.
const FONT_POINT_SIZE: u16 = 25;

/// File locations for the optional visual assets. Every one of them
/// may be missing; the frontend degrades instead of failing.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub font: PathBuf,
    pub player_sprite: PathBuf,
    pub virus_sprite: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            font: PathBuf::from("assets/fonts/Lato-Bold.ttf"),
            player_sprite: PathBuf::from("assets/images/player.png"),
            virus_sprite: PathBuf::from("assets/images/virus.png"),
        }
    }
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub title: String,
    #[builder(default = Duration::from_millis(25))]
    pub tick_interval: Duration,
    #[builder(default)]
    pub assets: AssetPaths,
}

pub struct SdlContext;

impl SdlContext {
    /// Open a window and drive `app` with a fixed-interval tick loop
    /// until the window is closed or Escape is pressed.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            title,
            tick_interval,
            assets,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(Error::msg)?;
        let window = video_subsystem
            .window(&title, width, height)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        let creator = canvas.texture_creator();
        let ttf_context = sdl2::ttf::init()?;
        let _image_context = sdl2::image::init(InitFlag::PNG).map_err(Error::msg)?;

        let font = match ttf_context.load_font(&assets.font, FONT_POINT_SIZE) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Failed to load font {}: {e}", assets.font.display());
                None
            }
        };
        let sprites = load_sprites(&creator, &assets);

        let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;
        app.init();
        loop {
            let tick_start = Instant::now();
            if app.should_exit() {
                app.exit();
                break;
            }

            while let Some(event) = event_pump.poll_event() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            app.tick();

            {
                let mut surface = CanvasSurface {
                    canvas: &mut canvas,
                    creator: &creator,
                    font: font.as_ref(),
                    sprites: &sprites,
                };
                app.draw(&mut surface);
            }
            canvas.present();

            // sleep out the remainder of the fixed tick period
            let elapsed = tick_start.elapsed();
            if elapsed < tick_interval {
                std::thread::sleep(tick_interval - elapsed);
            }
        }

        Ok(())
    }
}

fn load_sprites<'t>(
    creator: &'t TextureCreator<WindowContext>,
    assets: &AssetPaths,
) -> HashMap<Sprite, Texture<'t>> {
    let mut sprites = HashMap::new();
    let paths = [
        (Sprite::Player, &assets.player_sprite),
        (Sprite::Virus, &assets.virus_sprite),
    ];
    for (sprite, path) in paths {
        match creator.load_texture(path) {
            Ok(texture) => {
                sprites.insert(sprite, texture);
            }
            Err(e) => {
                warn!(
                    "Failed to load sprite {sprite:?} from {}: {e}, using a solid tile",
                    path.display()
                );
            }
        }
    }
    sprites
}

/// `Surface` implementation over the SDL2 window canvas for one frame.
/// Draw-call failures are logged and the frame carries on.
struct CanvasSurface<'a, 'f, 't> {
    canvas: &'a mut WindowCanvas,
    creator: &'a TextureCreator<WindowContext>,
    font: Option<&'a Font<'f, 'static>>,
    sprites: &'a HashMap<Sprite, Texture<'t>>,
}

impl Surface for CanvasSurface<'_, '_, '_> {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(map_color(color));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.set_draw_color(map_color(color));
        if let Err(e) = self.canvas.fill_rect(Some(map_rect(rect))) {
            warn!("Failed to fill rect: {e}");
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        match self.sprites.get(&sprite) {
            Some(texture) => {
                if let Err(e) = self.canvas.copy(texture, None, Some(map_rect(rect))) {
                    warn!("Failed to draw sprite {sprite:?}: {e}");
                }
            }
            None => self.fill_rect(rect, fallback_color(sprite)),
        }
    }

    fn draw_text(&mut self, text: &str, color: Color, x: i32, y: i32) {
        let Some(font) = self.font else {
            return;
        };
        let rendered = match font.render(text).blended(map_color(color)) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!("Failed to render text: {e}");
                return;
            }
        };
        let texture = match self.creator.create_texture_from_surface(&rendered) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("Failed to upload text: {e}");
                return;
            }
        };
        let TextureQuery { width, height, .. } = texture.query();
        let dst = sdl2::rect::Rect::new(x, y, width, height);
        if let Err(e) = self.canvas.copy(&texture, None, Some(dst)) {
            warn!("Failed to draw text: {e}");
        }
    }

    fn text_size(&mut self, text: &str) -> (u32, u32) {
        if let Some(font) = self.font {
            match font.size_of(text) {
                Ok(size) => return size,
                Err(e) => warn!("Failed to measure text: {e}"),
            }
        }
        // rough estimate so layout still works without a font
        (
            text.chars().count() as u32 * (FONT_POINT_SIZE as u32 / 2),
            FONT_POINT_SIZE as u32,
        )
    }
}

/// Tile color used when a sprite texture failed to load.
fn fallback_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Player => Color::BLUE,
        Sprite::Virus => Color::RED,
    }
}

fn map_color(color: Color) -> sdl2::pixels::Color {
    let (r, g, b, a) = color.rgba();
    sdl2::pixels::Color::RGBA(r, g, b, a)
}

fn map_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.w, rect.h)
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        _ => Key::None,
    }
}
