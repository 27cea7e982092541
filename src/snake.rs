use std::collections::{HashSet, VecDeque};

use crate::geometry::{Direction, Position};

/// The snake body and its direction of travel.
///
/// The body is never empty and never contains the same cell twice. The front
/// of the deque is the head.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` cells with its head at `head`,
    /// travelling in `direction`; the body trails behind the head.
    ///
    /// A `length` of zero is treated as one.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let body = std::iter::successors(Some(head), |segment| Some(segment.moved(behind)))
            .take(length.max(1))
            .collect();

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` unless the body is non-empty, free of repeated cells
    /// and every segment is adjacent to the next. For two or more segments
    /// the travel direction is derived from the second segment towards the
    /// head; `direction` only applies to a one-cell snake.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        let mut seen = HashSet::with_capacity(segments.len());
        if !segments.iter().all(|segment| seen.insert(*segment)) {
            return None;
        }

        let connected = segments
            .windows(2)
            .all(|pair| Direction::between(pair[1], pair[0]).is_some());
        if !connected {
            return None;
        }

        let direction = match segments.as_slice() {
            [head, neck, ..] => Direction::between(*neck, *head)?,
            _ => direction,
        };

        Some(Self {
            body: VecDeque::from(segments),
            direction,
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the direction the snake last moved in (or its initial one).
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if moving the head to `next_head` would hit the body.
    ///
    /// On a non-growth tick the tail cell is vacated in the same move and is
    /// therefore not an obstacle.
    #[must_use]
    pub fn would_collide(&self, next_head: Position, grows: bool) -> bool {
        let remaining = if grows {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        self.body
            .iter()
            .take(remaining)
            .any(|segment| *segment == next_head)
    }

    /// Moves one cell in `direction`, keeping the tail when `grow` is set.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let next_head = self.head().moved(direction);
        self.direction = direction;

        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
