use rand::Rng;
use grid_snake_common::games::snake::{Direction, Grid, Point, SnakeCommand, SnakeGameSnapshot};
use tokio::sync::mpsc;

/// Input source that steers greedily toward the food while avoiding walls
/// and its own body.
pub struct Autopilot;

impl Autopilot {
    /// Answers each new tick with a turn. Refresh frames repeat the tick
    /// number and are skipped, otherwise every accepted turn would trigger
    /// another one.
    pub async fn run(
        mut snapshot_rx: mpsc::UnboundedReceiver<SnakeGameSnapshot>,
        command_tx: mpsc::UnboundedSender<SnakeCommand>,
    ) {
        let mut last_tick = None;
        while let Some(snapshot) = snapshot_rx.recv().await {
            if last_tick == Some(snapshot.tick) {
                continue;
            }
            last_tick = Some(snapshot.tick);

            if let Some(direction) = Self::calculate_move(&snapshot)
                && direction != snapshot.heading
                && command_tx.send(SnakeCommand::Turn(direction)).is_err()
            {
                return;
            }
        }
    }

    pub fn calculate_move(snapshot: &SnakeGameSnapshot) -> Option<Direction> {
        let head = *snapshot.snake.first()?;
        let safe_directions: Vec<Direction> = Self::get_valid_directions(snapshot)
            .into_iter()
            .filter(|&dir| Self::is_safe_position(head.step(dir), snapshot))
            .collect();

        if let Some(food) = snapshot.food
            && let Some(best) = safe_directions
                .iter()
                .copied()
                .min_by_key(|&dir| Self::manhattan_distance(head.step(dir), food))
        {
            return Some(best);
        }

        if safe_directions.is_empty() {
            Some(snapshot.heading)
        } else {
            let idx = rand::rng().random_range(0..safe_directions.len());
            Some(safe_directions[idx])
        }
    }

    fn get_valid_directions(snapshot: &SnakeGameSnapshot) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| snapshot.snake.len() == 1 || !d.is_opposite(snapshot.heading))
            .collect()
    }

    fn is_safe_position(pos: Point, snapshot: &SnakeGameSnapshot) -> bool {
        if !Grid::in_bounds(pos) {
            return false;
        }
        let grows = snapshot.food == Some(pos);
        let tail = snapshot.snake.last().copied();
        !snapshot
            .snake
            .iter()
            .any(|&cell| cell == pos && (grows || Some(cell) != tail))
    }

    fn manhattan_distance(a: Point, b: Point) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }
}
