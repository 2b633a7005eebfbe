use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::games::GameBroadcaster;
use crate::log;
use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::types::{Direction, GameEndReason, GameOverNotification};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
}

/// Stops a running session. Cloneable so a signal handler can hold one;
/// stopping twice is a no-op.
#[derive(Clone, Debug)]
pub struct SessionCanceller {
    shutdown_tx: Arc<watch::Sender<bool>>,
}

impl SessionCanceller {
    /// Returns true only for the call that actually requested the stop.
    pub fn cancel(&self) -> bool {
        self.shutdown_tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        })
    }
}

/// Owner's view of a running session. Dropping it stops the session.
pub struct SnakeSessionHandle {
    command_tx: mpsc::UnboundedSender<SnakeCommand>,
    canceller: SessionCanceller,
    join_handle: JoinHandle<GameOverNotification>,
}

impl SnakeSessionHandle {
    /// Queues a turn. False once the session has ended; whether the turn is
    /// accepted is decided by the game at the time it is processed.
    pub fn turn(&self, direction: Direction) -> bool {
        self.command_tx.send(SnakeCommand::Turn(direction)).is_ok()
    }

    pub fn command_sender(&self) -> mpsc::UnboundedSender<SnakeCommand> {
        self.command_tx.clone()
    }

    pub fn canceller(&self) -> SessionCanceller {
        self.canceller.clone()
    }

    pub fn cancel(&self) -> bool {
        self.canceller.cancel()
    }

    pub fn is_finished(&self) -> bool {
        self.join_handle.is_finished()
    }

    /// Waits for the game to end on its own or through `cancel`. The
    /// handle's senders stay alive meanwhile, so waiting does not stop it.
    pub async fn wait(mut self) -> Result<GameOverNotification, String> {
        (&mut self.join_handle)
            .await
            .map_err(|e| format!("Session task failed: {}", e))
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Spawns the game loop. The loop owns `state`; ticks, turns and the
    /// stop request are handled one at a time on that task.
    pub fn start(
        state: SnakeGameState,
        settings: &SnakeSessionSettings,
        broadcaster: impl GameBroadcaster,
    ) -> SnakeSessionHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let tick_interval = settings.effective_tick_interval();

        let join_handle = tokio::spawn(async move {
            Self::run(state, tick_interval, command_rx, shutdown_rx, broadcaster).await
        });

        SnakeSessionHandle {
            command_tx,
            canceller: SessionCanceller {
                shutdown_tx: Arc::new(shutdown_tx),
            },
            join_handle,
        }
    }

    pub async fn run(
        mut state: SnakeGameState,
        tick_interval: std::time::Duration,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        mut shutdown_rx: watch::Receiver<bool>,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        let mut tick_interval_timer = interval(tick_interval);

        broadcaster.broadcast_state(state.snapshot()).await;

        let reason = loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break GameEndReason::Shutdown;
                    }
                }
                _ = tick_interval_timer.tick() => {
                    let outcome = state.tick();
                    if let Some(reason) = outcome.end_reason() {
                        break reason;
                    }
                    broadcaster.broadcast_state(state.snapshot()).await;
                }
                Some(command) = command_rx.recv() => match command {
                    SnakeCommand::Turn(direction) => {
                        if state.redirect(direction) {
                            broadcaster.broadcast_state(state.snapshot()).await;
                        }
                    }
                },
            }
        };

        log!(
            "Session over: snake {} with score {}",
            reason,
            state.score()
        );

        let notification = GameOverNotification {
            reason,
            score: state.score(),
            final_state: state.snapshot(),
        };
        broadcaster.broadcast_game_over(notification.clone()).await;
        notification
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{Grid, Point, Snake, SnakeGameSnapshot};

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        State(SnakeGameSnapshot),
        GameOver(GameOverNotification),
    }

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingBroadcaster {
        fn states(&self) -> Vec<SnakeGameSnapshot> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter_map(|e| match e {
                    Event::State(s) => Some(s.clone()),
                    Event::GameOver(_) => None,
                })
                .collect()
        }

        fn game_overs(&self) -> Vec<GameOverNotification> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter_map(|e| match e {
                    Event::GameOver(n) => Some(n.clone()),
                    Event::State(_) => None,
                })
                .collect()
        }
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
            self.events.lock().unwrap().push(Event::State(snapshot));
        }

        async fn broadcast_game_over(&self, notification: GameOverNotification) {
            self.events.lock().unwrap().push(Event::GameOver(notification));
        }
    }

    fn state_with_head(head: Point) -> SnakeGameState {
        let snake = Snake::new(head, Direction::Right, 3);
        SnakeGameState::with_layout(snake, Point::new(0, 0), SessionRng::new(1)).unwrap()
    }

    fn start(state: SnakeGameState) -> (SnakeSessionHandle, RecordingBroadcaster) {
        let broadcaster = RecordingBroadcaster::default();
        let handle = SnakeSession::start(state, &SnakeSessionSettings::default(), broadcaster.clone());
        (handle, broadcaster)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_interval_starting_immediately() {
        let (handle, broadcaster) = start(state_with_head(Point::new(3, 8)));

        tokio::time::sleep(Duration::from_millis(1500)).await;

        let heads: Vec<Point> = broadcaster.states().iter().map(|s| s.snake[0]).collect();
        assert_eq!(heads, vec![Point::new(3, 8), Point::new(4, 8), Point::new(5, 8)]);
        assert!(!handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_turn_refreshes_without_moving() {
        let (handle, broadcaster) = start(state_with_head(Point::new(3, 8)));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.turn(Direction::Up));
        tokio::time::sleep(Duration::from_millis(100)).await;

        let states = broadcaster.states();
        assert_eq!(states.len(), 3);
        let refresh = &states[2];
        assert_eq!(refresh.tick, 1);
        assert_eq!(refresh.snake[0], Point::new(4, 8));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let states = broadcaster.states();
        assert_eq!(states.last().map(|s| s.snake[0]), Some(Point::new(4, 7)));
        assert_eq!(states.last().map(|s| s.heading), Some(Direction::Up));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_turn_is_not_broadcast() {
        let (handle, broadcaster) = start(state_with_head(Point::new(3, 8)));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.turn(Direction::Left));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(broadcaster.states().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_ends_session() {
        let (handle, broadcaster) = start(state_with_head(Point::new(13, 8)));

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(handle.is_finished());
        assert!(!handle.turn(Direction::Up));

        let notification = handle.wait().await.unwrap();
        assert_eq!(notification.reason, GameEndReason::OutOfBounds);
        assert_eq!(notification.score, 0);
        assert_eq!(notification.final_state.snake[0], Point::new(15, 8));

        assert_eq!(broadcaster.game_overs(), vec![notification]);
        // Initial frame plus the moves to x = 14 and x = 15.
        assert_eq!(broadcaster.states().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let (handle, broadcaster) = start(state_with_head(Point::new(3, 8)));
        tokio::time::sleep(Duration::from_millis(10)).await;

        let canceller = handle.canceller();
        assert!(canceller.cancel());
        assert!(!canceller.cancel());
        assert!(!handle.cancel());

        let notification = handle.wait().await.unwrap();
        assert_eq!(notification.reason, GameEndReason::Shutdown);
        assert_eq!(broadcaster.game_overs().len(), 1);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(broadcaster.states().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_session() {
        let (handle, broadcaster) = start(state_with_head(Point::new(3, 8)));
        drop(handle);

        tokio::time::sleep(Duration::from_secs(3)).await;

        let game_overs = broadcaster.game_overs();
        assert_eq!(game_overs.len(), 1);
        assert_eq!(game_overs[0].reason, GameEndReason::Shutdown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filling_the_board_reports_board_full() {
        // Serpentine over every cell but (0,0); the head at (1,0) moves
        // left onto the food in the last free cell.
        let mut path = Vec::new();
        for y in 0..Grid::SIZE {
            if y % 2 == 0 {
                path.extend((0..Grid::SIZE).map(|x| Point::new(x, y)));
            } else {
                path.extend((0..Grid::SIZE).rev().map(|x| Point::new(x, y)));
            }
        }
        let snake = Snake::from_cells(&path[1..], Direction::Left).unwrap();
        let state = SnakeGameState::with_layout(snake, Point::new(0, 0), SessionRng::new(1)).unwrap();
        let (handle, broadcaster) = start(state);

        let notification = handle.wait().await.unwrap();
        assert_eq!(notification.reason, GameEndReason::BoardFull);
        assert_eq!(notification.score, 1);
        assert_eq!(notification.final_state.food, None);
        assert_eq!(notification.final_state.snake.len(), Grid::cell_count());
        assert_eq!(notification.final_state.snake[0], Point::new(0, 0));

        assert_eq!(broadcaster.game_overs(), vec![notification]);
        assert_eq!(broadcaster.states().len(), 1);
    }
}
