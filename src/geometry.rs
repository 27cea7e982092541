use serde::Deserialize;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a step past the edge of the board is
/// representable and can be rejected by [`Position::is_within_bounds`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by one cell in `direction`.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Canonical movement directions.
///
/// Screen convention: `Up` decreases y and `Left` decreases x.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for the Up/Down and Left/Right pairs.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Unit offset `(dx, dy)` for one step.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Direction of a single-cell step from `from` to `to`, if they are adjacent.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| from.moved(*direction) == to)
    }
}

/// Logical grid dimensions, fixed for a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Center cell, rounding towards the top-left on even dimensions.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Row-major view of the grid: `height` rows of `width` positions each.
    pub fn rows(self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        self.rows().flatten()
    }
}
