use crate::grid::Position;

/// The player-controlled sprite. Position and score are only mutated
/// by the game tick.
#[derive(Clone, Debug)]
pub struct Player {
    pos: Position,
    score: u32,
}

impl Player {
    pub fn new(pos: Position) -> Player {
        Player { pos, score: 0 }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

/// A point-scoring token sitting on one tile. Immutable after spawn;
/// removed from the board when the player lands on its tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Virus {
    pos: Position,
}

impl Virus {
    pub fn new(pos: Position) -> Virus {
        Virus { pos }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }
}
