//! Single-owner driver for a [`Game`].
//!
//! The ticker and the input reader run on their own threads and only ever
//! send [`Command`]s. [`GameSession::run`] applies them one at a time in
//! arrival order, so `set_direction` and `step` never interleave, and hands
//! the resulting board to every observer once each command has completed.

use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::game::Game;
use crate::geometry::Direction;

/// Requests accepted by a running session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    SetDirection(Direction),
    Step,
    /// Starts a new game, only once the current one has ended.
    Restart,
    Quit,
}

/// Cloneable sending side of a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    sender: Sender<Command>,
}

impl SessionHandle {
    /// Queues `command`; fails once the session has stopped.
    pub fn send(&self, command: Command) -> Result<(), SendError<Command>> {
        self.sender.send(command)
    }
}

type Observer = Box<dyn FnMut(&Board)>;

/// Owns the game and processes commands sequentially.
pub struct GameSession {
    game: Game,
    config: GameConfig,
    commands: Receiver<Command>,
    observers: Vec<Observer>,
}

impl GameSession {
    /// Wraps `game`; `config` is used to build the replacement on restart.
    #[must_use]
    pub fn new(game: Game, config: GameConfig) -> (SessionHandle, Self) {
        let (sender, commands) = mpsc::channel();
        let session = Self {
            game,
            config,
            commands,
            observers: Vec::new(),
        };

        (SessionHandle { sender }, session)
    }

    /// Registers a callback that receives the board after every command.
    pub fn subscribe(&mut self, observer: impl FnMut(&Board) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one command. Returns `false` when the session should stop.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::SetDirection(direction) => self.game.set_direction(direction),
            Command::Step => {
                let _ = self.game.step();
            }
            Command::Restart => {
                if !self.game.board().is_ended() {
                    return true;
                }
                match Game::new(&self.config) {
                    Ok(game) => self.game = game,
                    Err(error) => warn!(%error, "restart failed"),
                }
            }
            Command::Quit => return false,
        }

        true
    }

    /// Publishes the current board to every observer.
    pub fn publish(&mut self) {
        let board = self.game.board();
        for observer in &mut self.observers {
            observer(board);
        }
    }

    /// Processes commands until `Quit` arrives or every handle is dropped.
    pub fn run(mut self) -> Game {
        self.publish();

        while let Ok(command) = self.commands.recv() {
            if !self.apply(command) {
                debug!("quit requested");
                break;
            }
            self.publish();
        }

        info!(ticks = self.game.ticks(), "session finished");
        self.game
    }
}

/// Sends `Step` every `interval` until the session stops accepting commands.
pub fn spawn_ticker(handle: SessionHandle, interval: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if handle.send(Command::Step).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::board::{Board, GameStatus};
    use crate::config::GameConfig;
    use crate::game::Game;
    use crate::geometry::{Direction, GridSize, Position};
    use crate::snake::Snake;

    use super::{Command, GameSession, spawn_ticker};

    fn session_with(snake: Snake) -> (super::SessionHandle, GameSession) {
        let board = Board::playing(GridSize::new(10, 10), snake, Position::new(0, 0))
            .expect("valid board");
        GameSession::new(Game::from_board(board, 3), GameConfig::default())
    }

    #[test]
    fn commands_apply_in_arrival_order() {
        let (handle, session) = session_with(Snake::new(Position::new(5, 5), Direction::Right, 2));

        handle.send(Command::SetDirection(Direction::Down)).expect("open");
        handle.send(Command::Step).expect("open");
        handle.send(Command::SetDirection(Direction::Left)).expect("open");
        handle.send(Command::Step).expect("open");
        handle.send(Command::Quit).expect("open");

        let game = session.run();
        assert_eq!(
            game.board().snake().map(Snake::head),
            Some(Position::new(4, 6))
        );
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn observers_see_each_completed_command() {
        let (handle, mut session) =
            session_with(Snake::new(Position::new(5, 5), Direction::Right, 1));
        let heads = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&heads);
        session.subscribe(move |board| {
            seen.borrow_mut().push(board.snake().map(Snake::head));
        });

        handle.send(Command::Step).expect("open");
        handle.send(Command::Step).expect("open");
        drop(handle);

        let _ = session.run();
        assert_eq!(
            *heads.borrow(),
            vec![
                Some(Position::new(5, 5)),
                Some(Position::new(6, 5)),
                Some(Position::new(7, 5)),
            ]
        );
    }

    #[test]
    fn restart_only_applies_after_the_game_ended() {
        let (_handle, mut session) =
            session_with(Snake::new(Position::new(9, 5), Direction::Right, 1));

        assert!(session.apply(Command::Restart));
        assert_eq!(session.game().ticks(), 0);

        assert!(session.apply(Command::Step));
        assert!(matches!(
            session.game().board().status(),
            GameStatus::Lost(_)
        ));

        assert!(session.apply(Command::Restart));
        assert_eq!(session.game().board().status(), GameStatus::Playing);
        assert_eq!(
            session.game().board().size(),
            GameConfig::default().grid
        );
    }

    #[test]
    fn quit_stops_the_session() {
        let (_handle, mut session) =
            session_with(Snake::new(Position::new(5, 5), Direction::Right, 1));

        assert!(!session.apply(Command::Quit));
    }

    #[test]
    fn ticker_stops_when_session_is_gone() {
        let (handle, session) = session_with(Snake::new(Position::new(5, 5), Direction::Right, 1));
        let ticker = spawn_ticker(handle, Duration::from_millis(1));

        drop(session);
        ticker.join().expect("ticker thread should exit cleanly");
    }
}
