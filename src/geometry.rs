use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step (dx, dy) for one move. Rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// A cell on the board, column first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }

    /// Brings each axis back into `[0, width-1] x [0, height-1]`, treating the
    /// board as a torus.
    pub fn wrapped(self, width: i32, height: i32) -> Self {
        Position { x: wrap_axis(self.x, width), y: wrap_axis(self.y, height) }
    }
}

fn wrap_axis(value: i32, size: i32) -> i32 {
    value.rem_euclid(size)
}
