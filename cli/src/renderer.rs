use std::io::Write;

use grid_snake_common::games::GameBroadcaster;
use grid_snake_common::games::snake::{GameOverNotification, Grid, Point, SnakeGameSnapshot};
use grid_snake_common::log;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const HEAD_CHAR: char = '@';
const BODY_CHAR: char = 'o';
const FOOD_CHAR: char = '*';
const EMPTY_CHAR: char = '.';

/// Draws the board as text on stdout.
#[derive(Clone)]
pub struct TerminalRenderer {
    clear_screen: bool,
}

impl TerminalRenderer {
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }

    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let result = if self.clear_screen {
            write!(stdout, "{}{}", CLEAR_SCREEN, text)
        } else {
            write!(stdout, "{}", text)
        };
        if let Err(e) = result.and_then(|_| stdout.flush()) {
            log!("Failed to draw frame: {}", e);
        }
    }
}

pub fn render_frame(snapshot: &SnakeGameSnapshot) -> String {
    let size = Grid::SIZE as usize;
    let mut rows = vec![vec![EMPTY_CHAR; size]; size];
    let mut put = |point: Point, ch: char| {
        if Grid::in_bounds(point) {
            rows[point.y as usize][point.x as usize] = ch;
        }
    };

    if let Some(food) = snapshot.food {
        put(food, FOOD_CHAR);
    }
    for (i, &cell) in snapshot.snake.iter().enumerate() {
        put(cell, if i == 0 { HEAD_CHAR } else { BODY_CHAR });
    }

    let border = format!("+{}+\n", "-".repeat(size));
    let mut frame = format!("Score: {}\n", snapshot.score);
    frame.push_str(&border);
    for row in rows {
        frame.push('|');
        frame.extend(row);
        frame.push_str("|\n");
    }
    frame.push_str(&border);
    frame
}

pub fn render_game_over(notification: &GameOverNotification) -> String {
    format!(
        "{}Game over\nscore: {}\n(the snake {})\n",
        render_frame(&notification.final_state),
        notification.score,
        notification.reason
    )
}

impl GameBroadcaster for TerminalRenderer {
    async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
        self.write(&render_frame(&snapshot));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.write(&render_game_over(&notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_snake_common::games::snake::{Direction, GameEndReason};

    fn snapshot() -> SnakeGameSnapshot {
        SnakeGameSnapshot {
            tick: 1,
            snake: vec![Point::new(4, 8), Point::new(3, 8), Point::new(2, 8)],
            food: Some(Point::new(15, 0)),
            score: 2,
            heading: Direction::Right,
        }
    }

    #[test]
    fn test_frame_layout() {
        let frame = render_frame(&snapshot());
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 1 + 2 + Grid::SIZE as usize);
        assert_eq!(lines[0], "Score: 2");
        assert_eq!(lines[1], "+----------------+");
        assert_eq!(lines[2], "|...............*|");
        assert_eq!(lines[2 + 8], "|..oo@...........|");
        assert_eq!(lines[lines.len() - 1], "+----------------+");
    }

    #[test]
    fn test_game_over_shows_score() {
        let notification = GameOverNotification {
            reason: GameEndReason::OutOfBounds,
            score: 2,
            final_state: snapshot(),
        };
        let text = render_game_over(&notification);
        assert!(text.contains("Game over\nscore: 2\n"));
        assert!(text.contains("left the board"));
    }
}
