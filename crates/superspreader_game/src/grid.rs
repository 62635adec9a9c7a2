/// One tile on the board, addressed by 0-indexed column and row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub col: u32,
    pub row: u32,
}

impl Position {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Position {
        Position { col, row }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta in (column, row) terms. Row 0 is the top of the board.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Board dimensions in tiles. Positions outside the board never exist;
/// stepping against an edge leaves the position unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    columns: u32,
    rows: u32,
}

impl Board {
    pub const fn new(columns: u32, rows: u32) -> Board {
        Board { columns, rows }
    }

    pub const fn columns(&self) -> u32 {
        self.columns
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as u32) < self.columns && row >= 0 && (row as u32) < self.rows
    }

    /// Move `from` one tile in `dir`, clamped at the board edges.
    pub fn step(&self, from: Position, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        let col = from.col as i32 + dx;
        let row = from.row as i32 + dy;
        if self.contains(col, row) {
            Position::new(col as u32, row as u32)
        } else {
            from
        }
    }
}
