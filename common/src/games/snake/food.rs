use std::fmt;

use crate::defaults::MAX_RANDOM_FOOD_ATTEMPTS;
use crate::games::SessionRng;
use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

/// No free cell is left for food.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardFull;

impl fmt::Display for BoardFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no free cell left for food")
    }
}

impl std::error::Error for BoardFull {}

/// Places food on a uniformly chosen free cell. Random probing first, then a
/// scan of the whole board, so a crowded board still terminates.
#[derive(Clone, Copy, Debug)]
pub struct FoodSpawner {
    max_random_attempts: usize,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new(MAX_RANDOM_FOOD_ATTEMPTS)
    }
}

impl FoodSpawner {
    pub fn new(max_random_attempts: usize) -> Self {
        Self { max_random_attempts }
    }

    pub fn spawn(&self, snake: &Snake, rng: &mut SessionRng) -> Result<Point, BoardFull> {
        if snake.len() >= Grid::cell_count() {
            return Err(BoardFull);
        }

        for _ in 0..self.max_random_attempts {
            let pos = Point::new(rng.random_range(0..Grid::SIZE), rng.random_range(0..Grid::SIZE));
            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }

        let free: Vec<Point> = Grid::cells().filter(|&p| !snake.occupies(p)).collect();
        rng.choose(&free).copied().ok_or(BoardFull)
    }
}
