pub mod app;
pub mod entities;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod scoring;
pub mod sound;

pub use app::GameApp;
pub use game::{Game, GameView, TickOutcome};

/// Delay between game loop ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 25;
/// Board width in tiles.
pub const COLUMNS: u32 = 15;
/// Board height in tiles.
pub const ROWS: u32 = 10;
/// Edge length of one board tile in pixels (rendering only).
pub const TILE_SIZE: u32 = 70;
/// Number of viruses placed on the board at session start.
pub const NUM_VIRUSES: usize = 5;
