use crate::defaults::INITIAL_SNAKE_LENGTH;
use crate::games::SessionRng;
use crate::log;
use super::food::{BoardFull, FoodSpawner};
use super::grid::Grid;
use super::snake::Snake;
use super::types::{Direction, GameOutcome, Point, SnakeGameSnapshot};

const START_HEAD: Point = Point::new(3, Grid::SIZE / 2);
const START_HEADING: Direction = Direction::Right;

/// One game: the snake, its food and score. Mutated only through
/// [`redirect`](Self::redirect) and [`tick`](Self::tick).
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    food: Option<Point>,
    score: u32,
    pending_direction: Direction,
    outcome: GameOutcome,
    tick: u64,
    spawner: FoodSpawner,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(rng: SessionRng) -> Self {
        let snake = Snake::new(START_HEAD, START_HEADING, INITIAL_SNAKE_LENGTH);
        Self::start(snake, FoodSpawner::default(), rng)
    }

    /// Starts from a given snake and food cell.
    pub fn with_layout(snake: Snake, food: Point, rng: SessionRng) -> Result<Self, String> {
        if let Some(cell) = snake.cells().find(|&p| !Grid::in_bounds(p)) {
            return Err(format!("Snake cell {} is outside the board", cell));
        }
        if !Grid::in_bounds(food) {
            return Err(format!("Food {} is outside the board", food));
        }
        if snake.occupies(food) {
            return Err(format!("Food {} overlaps the snake", food));
        }

        Ok(Self {
            pending_direction: snake.heading(),
            snake,
            food: Some(food),
            score: 0,
            outcome: GameOutcome::Continue,
            tick: 0,
            spawner: FoodSpawner::default(),
            rng,
        })
    }

    fn start(snake: Snake, spawner: FoodSpawner, mut rng: SessionRng) -> Self {
        let food = spawner.spawn(&snake, &mut rng).ok();
        Self {
            pending_direction: snake.heading(),
            snake,
            food,
            score: 0,
            outcome: GameOutcome::Continue,
            tick: 0,
            spawner,
            rng,
        }
    }

    /// Throws the current game away and starts a fresh one on the same RNG
    /// stream.
    pub fn reset(&mut self) {
        let snake = Snake::new(START_HEAD, START_HEADING, INITIAL_SNAKE_LENGTH);
        let rng = self.rng.clone();
        *self = Self::start(snake, self.spawner, rng);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Direction the next tick will move in.
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Sets the direction for the next tick. Returns false when ignored:
    /// the game is over, or the turn would fold the snake onto its neck.
    /// Between two ticks the last accepted turn wins.
    pub fn redirect(&mut self, direction: Direction) -> bool {
        if self.is_over() || self.snake.would_reverse(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Advances the snake one cell. Once a terminal outcome is returned the
    /// state is frozen and every further call returns that outcome.
    pub fn tick(&mut self) -> GameOutcome {
        if self.is_over() {
            return self.outcome;
        }

        let direction = self.pending_direction;
        let new_head = self.snake.propose_move(direction);

        if !Grid::in_bounds(new_head) {
            return self.finish(GameOutcome::OutOfBounds);
        }

        let grow = self.food == Some(new_head);
        if self.snake.would_collide(new_head, grow) {
            return self.finish(GameOutcome::SelfCollision);
        }

        self.snake.advance(new_head, grow);
        self.snake.set_heading(direction);
        self.tick += 1;

        if grow {
            self.score += 1;
            log!("Ate food at {}. Score: {}", new_head, self.score);

            match self.spawner.spawn(&self.snake, &mut self.rng) {
                Ok(food) => {
                    log!("Food spawned at {}", food);
                    self.food = Some(food);
                }
                Err(BoardFull) => {
                    self.food = None;
                    return self.finish(GameOutcome::BoardFull);
                }
            }
        }

        GameOutcome::Continue
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        self.outcome = outcome;
        log!(
            "Game over after {} ticks: {:?}, score {}",
            self.tick,
            outcome,
            self.score
        );
        outcome
    }

    pub fn snapshot(&self) -> SnakeGameSnapshot {
        SnakeGameSnapshot {
            tick: self.tick,
            snake: self.snake.cells().collect(),
            food: self.food,
            score: self.score,
            heading: self.snake.heading(),
        }
    }
}
