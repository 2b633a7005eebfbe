use std::time::Duration;

use crate::defaults::DEFAULT_TICK_INTERVAL;
use crate::games::SessionRng;
use crate::log;
use super::game_state::SnakeGameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub tick_interval: Duration,
    /// Fixed seed for a reproducible game; random when absent.
    pub seed: Option<u64>,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl SnakeSessionSettings {
    pub fn create_rng(&self) -> SessionRng {
        let rng = match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!("Session seed: {}", rng.seed());
        rng
    }

    pub fn create_state(&self) -> SnakeGameState {
        SnakeGameState::new(self.create_rng())
    }

    /// The timer cannot run with a zero period.
    pub(crate) fn effective_tick_interval(&self) -> Duration {
        self.tick_interval.max(Duration::from_millis(1))
    }
}
