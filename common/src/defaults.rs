use std::time::Duration;

/// Width and height of the square board.
pub const GRID_SIZE: i32 = 16;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Random draws the food spawner makes before scanning the whole board.
pub const MAX_RANDOM_FOOD_ATTEMPTS: usize = 100;
