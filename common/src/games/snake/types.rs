use std::fmt;

/// A board coordinate. Signed so a head proposed one step past an edge can
/// be represented and then rejected by the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Continue,
    OutOfBounds,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Continue)
    }

    pub fn end_reason(self) -> Option<GameEndReason> {
        match self {
            GameOutcome::Continue => None,
            GameOutcome::OutOfBounds => Some(GameEndReason::OutOfBounds),
            GameOutcome::SelfCollision => Some(GameEndReason::SelfCollision),
            GameOutcome::BoardFull => Some(GameEndReason::BoardFull),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    OutOfBounds,
    SelfCollision,
    BoardFull,
    Shutdown,
}

impl fmt::Display for GameEndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameEndReason::OutOfBounds => "left the board",
            GameEndReason::SelfCollision => "ran into itself",
            GameEndReason::BoardFull => "filled the board",
            GameEndReason::Shutdown => "shut down",
        };
        f.write_str(text)
    }
}

/// What the renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameSnapshot {
    pub tick: u64,
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub heading: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub reason: GameEndReason,
    pub score: u32,
    pub final_state: SnakeGameSnapshot,
}
