use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error};

use crate::geometry::Direction;
use crate::session::{Command, SessionHandle};

/// Maps a key press to a session command.
///
/// Arrows, WASD and hjkl steer; Enter, Space and R restart; Q, Esc and
/// Ctrl-C quit. Key releases and repeats are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Command::SetDirection(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Command::SetDirection(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Command::SetDirection(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            Command::SetDirection(Direction::Right)
        }
        KeyCode::Enter | KeyCode::Char(' ' | 'r' | 'R') => Command::Restart,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };

    Some(command)
}

/// Reads terminal events on a background thread and forwards mapped keys.
///
/// The thread exits after forwarding `Quit`, when the session is gone, or
/// when reading from the terminal fails (a `Quit` is sent in that case).
pub fn spawn_input_reader(handle: SessionHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let command = match event::read() {
                Ok(Event::Key(key)) => map_key(key),
                Ok(_) => None,
                Err(error) => {
                    error!(%error, "failed to read terminal event");
                    Some(Command::Quit)
                }
            };

            let Some(command) = command else {
                continue;
            };

            if handle.send(command).is_err() || command == Command::Quit {
                debug!("input reader stopped");
                break;
            }
        }
    })
}
