use grid_snake_common::games::GameBroadcaster;
use grid_snake_common::games::snake::{GameOverNotification, SnakeGameSnapshot};
use tokio::sync::mpsc;

/// Sends every update to two broadcasters, `first` before `second`.
#[derive(Clone)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> GameBroadcaster for Tee<A, B>
where
    A: GameBroadcaster,
    B: GameBroadcaster,
{
    async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
        self.first.broadcast_state(snapshot.clone()).await;
        self.second.broadcast_state(snapshot).await;
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.first.broadcast_game_over(notification.clone()).await;
        self.second.broadcast_game_over(notification).await;
    }
}

/// Hands snapshots to another task. The channel closes with the session.
#[derive(Clone)]
pub struct SnapshotForwarder {
    snapshot_tx: mpsc::UnboundedSender<SnakeGameSnapshot>,
}

impl SnapshotForwarder {
    pub fn new(snapshot_tx: mpsc::UnboundedSender<SnakeGameSnapshot>) -> Self {
        Self { snapshot_tx }
    }
}

impl GameBroadcaster for SnapshotForwarder {
    async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
        let _ = self.snapshot_tx.send(snapshot);
    }

    async fn broadcast_game_over(&self, _notification: GameOverNotification) {}
}
