use crate::geometry::{GridSize, Position};
use crate::snake::Snake;

/// Why a game was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Coarse game status derived from [`BoardState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost(DeathReason),
}

/// Tagged board state. Ended states cannot carry food, and a lost game
/// cannot carry a snake.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BoardState {
    Playing { snake: Snake, food: Position },
    /// The snake filled every cell; no food remains.
    Won { snake: Snake },
    Lost {
        reason: DeathReason,
        final_length: usize,
    },
}

/// What a single cell shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Food,
    SnakeHead,
    SnakeBody,
}

/// Immutable-at-a-point-in-time view of the playing field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    size: GridSize,
    state: BoardState,
}

impl Board {
    /// Creates a running board.
    ///
    /// Returns `None` unless every snake segment and the food lie inside
    /// `size` and the food is off the snake.
    #[must_use]
    pub fn playing(size: GridSize, snake: Snake, food: Position) -> Option<Self> {
        let valid = food.is_within_bounds(size)
            && !snake.occupies(food)
            && snake.segments().all(|segment| segment.is_within_bounds(size));

        valid.then(|| Self::from_state(size, BoardState::Playing { snake, food }))
    }

    pub(crate) fn from_state(size: GridSize, state: BoardState) -> Self {
        Self { size, state }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    pub(crate) fn set_state(&mut self, state: BoardState) {
        self.state = state;
    }

    /// The snake, present while playing and after a win.
    #[must_use]
    pub fn snake(&self) -> Option<&Snake> {
        match &self.state {
            BoardState::Playing { snake, .. } | BoardState::Won { snake } => Some(snake),
            BoardState::Lost { .. } => None,
        }
    }

    /// The food, present only while playing.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        match self.state {
            BoardState::Playing { food, .. } => Some(food),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.state {
            BoardState::Playing { .. } => GameStatus::Playing,
            BoardState::Won { .. } => GameStatus::Won,
            BoardState::Lost { reason, .. } => GameStatus::Lost(reason),
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        !matches!(self.state, BoardState::Playing { .. })
    }

    /// Snake length, including the length reached before a loss.
    #[must_use]
    pub fn snake_length(&self) -> usize {
        match &self.state {
            BoardState::Playing { snake, .. } | BoardState::Won { snake } => snake.len(),
            BoardState::Lost { final_length, .. } => *final_length,
        }
    }

    /// Row-major `height x width` view of cell positions.
    pub fn grid(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        self.size.rows()
    }

    /// Classifies `position`; food wins over snake, head over body.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        if self.food() == Some(position) {
            return Cell::Food;
        }

        match self.snake() {
            Some(snake) if snake.head() == position => Cell::SnakeHead,
            Some(snake) if snake.occupies(position) => Cell::SnakeBody,
            _ => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Direction, GridSize, Position};
    use crate::snake::Snake;

    use super::{Board, BoardState, Cell, DeathReason, GameStatus};

    fn sample_board() -> Board {
        Board::playing(
            GridSize::new(4, 3),
            Snake::new(Position::new(2, 1), Direction::Right, 2),
            Position::new(0, 0),
        )
        .expect("valid board")
    }

    #[test]
    fn playing_rejects_misplaced_food_and_snake() {
        let size = GridSize::new(4, 3);
        let snake = Snake::new(Position::new(2, 1), Direction::Right, 2);

        assert!(Board::playing(size, snake.clone(), Position::new(1, 1)).is_none());
        assert!(Board::playing(size, snake.clone(), Position::new(4, 0)).is_none());
        assert!(
            Board::playing(
                size,
                Snake::new(Position::new(0, 1), Direction::Right, 2),
                Position::new(3, 2),
            )
            .is_none()
        );
        assert!(Board::playing(size, snake, Position::new(3, 2)).is_some());
    }

    #[test]
    fn cells_classify_food_head_and_body() {
        let board = sample_board();

        assert_eq!(board.cell(Position::new(0, 0)), Cell::Food);
        assert_eq!(board.cell(Position::new(2, 1)), Cell::SnakeHead);
        assert_eq!(board.cell(Position::new(1, 1)), Cell::SnakeBody);
        assert_eq!(board.cell(Position::new(3, 2)), Cell::Empty);
    }

    #[test]
    fn grid_view_matches_dimensions() {
        let board = sample_board();
        let rows: Vec<usize> = board.grid().map(Iterator::count).collect();

        assert_eq!(rows, vec![4, 4, 4]);
    }

    #[test]
    fn lost_board_has_neither_snake_nor_food() {
        let mut board = sample_board();
        board.set_state(BoardState::Lost {
            reason: DeathReason::WallCollision,
            final_length: 2,
        });

        assert!(board.snake().is_none());
        assert!(board.food().is_none());
        assert!(board.is_ended());
        assert_eq!(board.snake_length(), 2);
        assert_eq!(
            board.status(),
            GameStatus::Lost(DeathReason::WallCollision)
        );
        assert_eq!(board.cell(Position::new(2, 1)), Cell::Empty);
    }

    #[test]
    fn won_board_keeps_snake_without_food() {
        let snake = Snake::new(Position::new(1, 0), Direction::Right, 2);
        let board = Board::from_state(GridSize::new(2, 1), BoardState::Won { snake });

        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.is_ended());
        assert!(board.food().is_none());
        assert_eq!(board.snake().map(Snake::len), Some(2));
    }
}
