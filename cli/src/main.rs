mod autopilot;
mod broadcast;
mod config;
mod input;
mod renderer;

use std::path::PathBuf;

use clap::Parser;
use grid_snake_common::games::snake::SnakeSession;
use grid_snake_common::{log, logger};
use tokio::sync::mpsc;

use autopilot::Autopilot;
use broadcast::{SnapshotForwarder, Tee};
use config::{GameConfig, get_config_manager};
use renderer::TerminalRenderer;

#[derive(Parser)]
#[command(name = "grid_snake", about = "Snake on a 16x16 grid. Type up/down/left/right (or w/a/s/d) and Enter to turn, q to quit.")]
struct Args {
    /// YAML config file; defaults to grid_snake_config.yaml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer steer instead of reading stdin.
    #[arg(long)]
    autopilot: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Keep old frames on screen instead of redrawing in place.
    #[arg(long)]
    no_clear: bool,
}

impl Args {
    fn apply_to(&self, config: &mut GameConfig) {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.autopilot |= self.autopilot;
        config.use_log_prefix |= self.use_log_prefix;
        if self.no_clear {
            config.clear_screen = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    args.apply_to(&mut config);

    let prefix = if config.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);
    log!("Starting with {:?}", config);

    let settings = config.session_settings();
    let state = settings.create_state();
    let renderer = TerminalRenderer::new(config.clear_screen);

    let handle = if config.autopilot {
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
        let broadcaster = Tee::new(renderer, SnapshotForwarder::new(snapshot_tx));
        let handle = SnakeSession::start(state, &settings, broadcaster);
        tokio::spawn(Autopilot::run(snapshot_rx, handle.command_sender()));
        handle
    } else {
        let handle = SnakeSession::start(state, &settings, renderer);
        input::spawn_stdin_reader(handle.command_sender(), handle.canceller());
        handle
    };

    let canceller = handle.canceller();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log!("Shutdown signal received");
            canceller.cancel();
        }
    });

    let notification = handle.wait().await?;
    log!(
        "Final score {} after {} ticks ({})",
        notification.score,
        notification.final_state.tick,
        notification.reason
    );

    Ok(())
}
