use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::board::{Board, BoardState, DeathReason};
use crate::config::GameConfig;
use crate::error::Result;
use crate::food::spawn_position;
use crate::geometry::{Direction, GridSize};

/// What a single [`Game::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game had already ended; nothing changed.
    Idle,
    Moved,
    /// The head landed on food and the snake grew by one.
    Ate,
    Died(DeathReason),
    /// The snake grew to cover every cell.
    Won,
}

/// Complete mutable game state for one session.
///
/// `set_direction` and `step` are the only mutators. Neither fails nor
/// panics for any input; once the board has ended both are no-ops.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    pending_direction: Option<Direction>,
    ticks: u64,
    rng: StdRng,
}

impl Game {
    /// Starts a fresh game: centred snake and one food on a free cell.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = config.initial_snake();
        // Validation guarantees a free cell; a full board would be a win.
        let board = match spawn_position(&mut rng, config.grid, &snake) {
            Some(food) => Board::from_state(config.grid, BoardState::Playing { snake, food }),
            None => Board::from_state(config.grid, BoardState::Won { snake }),
        };

        info!(
            width = config.grid.width,
            height = config.grid.height,
            length = board.snake_length(),
            "game started"
        );

        Ok(Self {
            board,
            pending_direction: None,
            ticks: 0,
            rng,
        })
    }

    /// Creates a deterministic game from an explicit board, for scenarios
    /// and reproducible simulations.
    #[must_use]
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            pending_direction: None,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Read-only snapshot of the playing field.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    /// Number of ticks applied while the game was running.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Direction that the next `step` will use, if one was requested.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Requests `direction` for the next tick.
    ///
    /// A reversal of the current travel direction is dropped silently; any
    /// other request replaces the previous one (last write wins).
    pub fn set_direction(&mut self, direction: Direction) {
        let BoardState::Playing { snake, .. } = self.board.state() else {
            return;
        };

        if direction.is_opposite(snake.direction()) {
            trace!(?direction, "reversal rejected");
            return;
        }

        self.pending_direction = Some(direction);
    }

    /// Advances the simulation by exactly one tick.
    pub fn step(&mut self) -> StepOutcome {
        let size = self.board.size();
        let BoardState::Playing { snake, food } = self.board.state_mut() else {
            return StepOutcome::Idle;
        };

        self.ticks += 1;
        let direction = self
            .pending_direction
            .take()
            .unwrap_or_else(|| snake.direction());
        let next_head = snake.head().moved(direction);
        let grows = next_head == *food;

        let collision = if !next_head.is_within_bounds(size) {
            Some(DeathReason::WallCollision)
        } else if snake.would_collide(next_head, grows) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = collision {
            let final_length = snake.len();
            info!(?reason, final_length, ticks = self.ticks, "game over");
            self.board.set_state(BoardState::Lost {
                reason,
                final_length,
            });
            return StepOutcome::Died(reason);
        }

        snake.advance(direction, grows);
        if !grows {
            return StepOutcome::Moved;
        }

        match spawn_position(&mut self.rng, size, snake) {
            Some(position) => {
                *food = position;
                debug!(length = snake.len(), ?position, "food eaten");
                StepOutcome::Ate
            }
            None => {
                let snake = snake.clone();
                info!(length = snake.len(), ticks = self.ticks, "board filled");
                self.board.set_state(BoardState::Won { snake });
                StepOutcome::Won
            }
        }
    }
}
