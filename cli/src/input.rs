use std::io::BufRead;

use grid_snake_common::games::snake::{Direction, SessionCanceller, SnakeCommand};
use grid_snake_common::log;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
}

/// Maps one key name to an event. Accepts the browser key names as well as
/// words and WASD; anything else is `None`.
pub fn parse_token(token: &str) -> Option<InputEvent> {
    let event = match token {
        "ArrowUp" => InputEvent::Turn(Direction::Up),
        "ArrowDown" => InputEvent::Turn(Direction::Down),
        "ArrowLeft" => InputEvent::Turn(Direction::Left),
        "ArrowRight" => InputEvent::Turn(Direction::Right),
        _ => match token.to_ascii_lowercase().as_str() {
            "up" | "w" => InputEvent::Turn(Direction::Up),
            "down" | "s" => InputEvent::Turn(Direction::Down),
            "left" | "a" => InputEvent::Turn(Direction::Left),
            "right" | "d" => InputEvent::Turn(Direction::Right),
            "q" | "quit" => InputEvent::Quit,
            _ => return None,
        },
    };
    Some(event)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEnd {
    Quit,
    Closed,
    SessionGone,
}

/// Feeds whitespace-separated key names from `reader` into the session
/// until input ends, `quit` is read, or the session stops listening.
pub fn forward_commands(
    reader: impl BufRead,
    command_tx: &mpsc::UnboundedSender<SnakeCommand>,
) -> InputEnd {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                return InputEnd::Closed;
            }
        };

        for token in line.split_whitespace() {
            match parse_token(token) {
                Some(InputEvent::Turn(direction)) => {
                    if command_tx.send(SnakeCommand::Turn(direction)).is_err() {
                        return InputEnd::SessionGone;
                    }
                }
                Some(InputEvent::Quit) => return InputEnd::Quit,
                None => log!("Ignoring unknown key {:?}", token),
            }
        }
    }
    InputEnd::Closed
}

/// Reads stdin on a plain thread so a pending read never holds up runtime
/// shutdown once the game is over.
pub fn spawn_stdin_reader(
    command_tx: mpsc::UnboundedSender<SnakeCommand>,
    canceller: SessionCanceller,
) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        if forward_commands(stdin.lock(), &command_tx) == InputEnd::Quit {
            log!("Quit requested");
            canceller.cancel();
        }
    });
}
