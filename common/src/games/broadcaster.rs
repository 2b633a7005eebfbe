use std::future::Future;

use super::snake::{GameOverNotification, SnakeGameSnapshot};

/// Renderer side of a running session. The session calls it after every
/// applied tick or accepted turn, and once more when the game ends.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SnakeGameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
