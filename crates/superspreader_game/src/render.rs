use superspreader_common::color::Color;
use superspreader_common::surface::{Rect, Sprite, Surface};

use crate::game::GameView;
use crate::grid::Position;
use crate::{COLUMNS, ROWS, TILE_SIZE};

const BACKGROUND: Color = Color::WHITE;
const CHECKER: Color = Color::new_rgb(214, 214, 214);
const SCORE_COLOR: Color = Color::new_rgb(128, 0, 0);

/// Paint one frame from a state snapshot. Pure projection: nothing
/// here feeds back into the game.
pub fn draw(view: &GameView, surface: &mut dyn Surface) {
    surface.clear(BACKGROUND);
    draw_background(surface);
    draw_score(view.score, surface);
    for &pos in &view.viruses {
        surface.draw_sprite(Sprite::Virus, tile_rect(pos));
    }
    surface.draw_sprite(Sprite::Player, tile_rect(view.player));
}

/// Pixel rectangle covering one board tile.
pub fn tile_rect(pos: Position) -> Rect {
    Rect::new(
        (pos.col * TILE_SIZE) as i32,
        (pos.row * TILE_SIZE) as i32,
        TILE_SIZE,
        TILE_SIZE,
    )
}

/// The score banner occupies the bottom row of board tiles.
pub fn score_rect() -> Rect {
    Rect::new(
        0,
        (TILE_SIZE * (ROWS - 1)) as i32,
        TILE_SIZE * COLUMNS,
        TILE_SIZE,
    )
}

fn draw_background(surface: &mut dyn Surface) {
    // checkered pattern: color every other tile
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            if (row + col) % 2 == 1 {
                surface.fill_rect(tile_rect(Position::new(col, row)), CHECKER);
            }
        }
    }
}

fn draw_score(score: u32, surface: &mut dyn Surface) {
    let text = format!("POINTS: {score}");
    let (text_w, text_h) = surface.text_size(&text);
    let rect = score_rect();
    // center the text in the banner using the measured metrics
    let x = rect.x + (rect.w as i32 - text_w as i32) / 2;
    let y = rect.y + (rect.h as i32 - text_h as i32) / 2;
    surface.draw_text(&text, SCORE_COLOR, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Color),
        FillRect(Rect, Color),
        DrawSprite(Sprite, Rect),
        DrawText(String, Color, i32, i32),
    }

    /// Records draw calls and reports fixed text metrics so layout
    /// math is checkable without a real font.
    struct RecordingSurface {
        calls: Vec<Call>,
        text_size: (u32, u32),
    }

    impl RecordingSurface {
        fn new(text_size: (u32, u32)) -> RecordingSurface {
            RecordingSurface {
                calls: Vec::new(),
                text_size,
            }
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Call::FillRect(rect, color));
        }
        fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
            self.calls.push(Call::DrawSprite(sprite, rect));
        }
        fn draw_text(&mut self, text: &str, color: Color, x: i32, y: i32) {
            self.calls.push(Call::DrawText(text.to_string(), color, x, y));
        }
        fn text_size(&mut self, _text: &str) -> (u32, u32) {
            self.text_size
        }
    }

    fn view(score: u32, player: (u32, u32), viruses: &[(u32, u32)]) -> GameView {
        GameView {
            score,
            player: Position::new(player.0, player.1),
            viruses: viruses
                .iter()
                .map(|&(col, row)| Position::new(col, row))
                .collect(),
        }
    }

    #[test]
    fn score_text_is_centered_in_the_bottom_row() {
        let mut surface = RecordingSurface::new((100, 30));
        draw(&view(3, (0, 0), &[]), &mut surface);

        let banner = score_rect();
        let expected_x = banner.x + (banner.w as i32 - 100) / 2;
        let expected_y = banner.y + (banner.h as i32 - 30) / 2;
        assert!(surface.calls.contains(&Call::DrawText(
            "POINTS: 3".to_string(),
            SCORE_COLOR,
            expected_x,
            expected_y,
        )));
    }

    #[test]
    fn one_sprite_per_virus_and_the_player_drawn_last() {
        let mut surface = RecordingSurface::new((10, 10));
        draw(&view(0, (1, 1), &[(2, 3), (4, 5)]), &mut surface);

        let sprites: Vec<&Call> = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::DrawSprite(..)))
            .collect();
        assert_eq!(
            sprites,
            vec![
                &Call::DrawSprite(Sprite::Virus, tile_rect(Position::new(2, 3))),
                &Call::DrawSprite(Sprite::Virus, tile_rect(Position::new(4, 5))),
                &Call::DrawSprite(Sprite::Player, tile_rect(Position::new(1, 1))),
            ]
        );
    }

    #[test]
    fn frame_starts_with_a_clear_and_a_checkered_background() {
        let mut surface = RecordingSurface::new((10, 10));
        draw(&view(0, (0, 0), &[]), &mut surface);

        assert_eq!(surface.calls[0], Call::Clear(BACKGROUND));
        let checkers = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Call::FillRect(_, color) if *color == CHECKER))
            .count();
        // every other tile of a 15x10 board
        assert_eq!(checkers, (COLUMNS * ROWS / 2) as usize);
    }

    #[test]
    fn tiles_map_to_pixel_rects_by_tile_size() {
        assert_eq!(
            tile_rect(Position::new(2, 3)),
            Rect::new(
                (2 * TILE_SIZE) as i32,
                (3 * TILE_SIZE) as i32,
                TILE_SIZE,
                TILE_SIZE
            )
        );
    }
}
