//! Tick-driven grid Snake.
//!
//! The engine ([`game::Game`]) owns the board and is advanced only through
//! [`game::Game::set_direction`] and [`game::Game::step`]; the remaining
//! modules drive it from a terminal.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use board::{Board, BoardState, Cell, DeathReason, GameStatus};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, StepOutcome};
pub use geometry::{Direction, GridSize, Position};
pub use snake::Snake;
