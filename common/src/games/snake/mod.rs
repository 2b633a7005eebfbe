mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod types;

pub use food::{BoardFull, FoodSpawner};
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use session::{SessionCanceller, SnakeCommand, SnakeSession, SnakeSessionHandle};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{
    Direction, GameEndReason, GameOutcome, GameOverNotification, Point, SnakeGameSnapshot,
};
