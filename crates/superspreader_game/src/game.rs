use rand::Rng;

use superspreader_common::key::Key;

use crate::entities::{Player, Virus};
use crate::grid::{Board, Position};
use crate::input::InputLatch;
use crate::scoring;
use crate::{COLUMNS, NUM_VIRUSES, ROWS};

/// Complete state of one game session.
pub struct Game {
    board: Board,
    player: Player,
    viruses: Vec<Virus>,
    input: InputLatch,
}

/// What happened during one tick; lets the app layer trigger sounds
/// without the core knowing about audio.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub collected: u32,
}

/// Immutable snapshot of everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct GameView {
    pub score: u32,
    pub player: Position,
    pub viruses: Vec<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Game {
        Game::with_rng(
            Board::new(COLUMNS, ROWS),
            NUM_VIRUSES,
            &mut rand::thread_rng(),
        )
    }

    /// Build a session with an explicit RNG so spawns are reproducible
    /// in tests.
    ///
    /// Spawn positions are independent uniform draws: two viruses may
    /// land on the same tile, and nothing excludes the player's start
    /// tile. Both are observable behavior, kept on purpose.
    pub fn with_rng(board: Board, num_viruses: usize, rng: &mut impl Rng) -> Game {
        let viruses = (0..num_viruses)
            .map(|_| {
                Virus::new(Position::new(
                    rng.gen_range(0..board.columns()),
                    rng.gen_range(0..board.rows()),
                ))
            })
            .collect();
        Game {
            board,
            player: Player::new(Position::new(0, 0)),
            viruses,
            input: InputLatch::default(),
        }
    }

    /// Latch a key-down event for the next tick. Key-up events never
    /// reach this point.
    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    /// Advance the game by one fixed-interval tick: apply the latched
    /// move, then collect and score any viruses under the player.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some(dir) = self.input.take() {
            self.player.set_pos(self.board.step(self.player.pos(), dir));
        }
        let collected = scoring::collect(self.player.pos(), &mut self.viruses);
        self.player.add_score(collected);
        TickOutcome { collected }
    }

    pub fn view(&self) -> GameView {
        GameView {
            score: self.player.score(),
            player: self.player.pos(),
            viruses: self.viruses.iter().map(|v| v.pos()).collect(),
        }
    }

    pub fn score(&self) -> u32 {
        self.player.score()
    }

    pub fn player_pos(&self) -> Position {
        self.player.pos()
    }

    pub fn virus_count(&self) -> usize {
        self.viruses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_game() -> Game {
        let mut rng = StdRng::seed_from_u64(0);
        Game::with_rng(Board::new(COLUMNS, ROWS), 0, &mut rng)
    }

    fn place_virus(game: &mut Game, col: u32, row: u32) {
        game.viruses.push(Virus::new(Position::new(col, row)));
    }

    #[test]
    fn seeded_spawn_places_all_viruses_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = Game::with_rng(Board::new(COLUMNS, ROWS), NUM_VIRUSES, &mut rng);
        assert_eq!(game.virus_count(), NUM_VIRUSES);
        for pos in game.view().viruses {
            assert!(pos.col < COLUMNS && pos.row < ROWS);
        }
    }

    #[test]
    fn virus_on_the_start_tile_scores_without_any_movement() {
        let mut game = empty_game();
        place_virus(&mut game, 0, 0);

        let outcome = game.tick();
        assert_eq!(outcome.collected, 1);
        assert_eq!(game.score(), 1);
        assert_eq!(game.virus_count(), 0);
        assert_eq!(game.player_pos(), Position::new(0, 0));
    }

    #[test]
    fn three_right_moves_then_collect() {
        let mut game = empty_game();
        game.player.set_pos(Position::new(3, 4));
        place_virus(&mut game, 6, 4);

        for _ in 0..3 {
            game.key_down(Key::Right);
            game.tick();
        }
        assert_eq!(game.player_pos(), Position::new(6, 4));
        assert_eq!(game.score(), 1);
        assert_eq!(game.virus_count(), 0);
    }

    #[test]
    fn stacked_viruses_score_together_in_one_tick() {
        let mut game = empty_game();
        game.player.set_pos(Position::new(2, 1));
        place_virus(&mut game, 2, 2);
        place_virus(&mut game, 2, 2);

        game.key_down(Key::Down);
        let outcome = game.tick();
        assert_eq!(outcome.collected, 2);
        assert_eq!(game.score(), 2);
        assert_eq!(game.virus_count(), 0);
    }

    #[test]
    fn one_keypress_moves_exactly_one_tile() {
        let mut game = empty_game();
        game.key_down(Key::Right);
        game.tick();
        assert_eq!(game.player_pos(), Position::new(1, 0));

        // no new input: the latch was consumed, the player stays put
        game.tick();
        assert_eq!(game.player_pos(), Position::new(1, 0));
    }

    #[test]
    fn moving_off_the_board_leaves_the_player_in_place() {
        let mut game = empty_game();
        game.key_down(Key::Up);
        game.tick();
        assert_eq!(game.player_pos(), Position::new(0, 0));
        game.key_down(Key::Left);
        game.tick();
        assert_eq!(game.player_pos(), Position::new(0, 0));
    }

    #[test]
    fn view_is_a_snapshot_of_the_current_state() {
        let mut game = empty_game();
        place_virus(&mut game, 5, 5);
        place_virus(&mut game, 1, 2);

        let view = game.view();
        assert_eq!(view.score, 0);
        assert_eq!(view.player, Position::new(0, 0));
        assert_eq!(
            view.viruses,
            vec![Position::new(5, 5), Position::new(1, 2)]
        );
    }
}
