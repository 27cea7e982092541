use rand::Rng;

use crate::geometry::{GridSize, Position};
use crate::snake::Snake;

/// Random guesses tried before enumerating free cells.
const MAX_REJECTION_ATTEMPTS: usize = 32;

/// Picks a cell not occupied by the snake, uniformly among all free cells.
///
/// Returns `None` when the snake covers the whole board. While the board is
/// mostly empty a few guess-and-reject draws are tried first; every accepted
/// guess is uniform over the free cells, and a dense board falls straight
/// through to enumeration.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let total = bounds.total_cells();
    if snake.len() >= total {
        return None;
    }

    if snake.len() * 2 < total {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let guess = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !snake.occupies(guess) {
                return Some(guess);
            }
        }
    }

    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|position| !snake.occupies(*position))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::geometry::{Direction, GridSize, Position};
    use crate::snake::Snake;

    use super::spawn_position;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position::new(2, 0), Direction::Right, 3);

        for _ in 0..100 {
            let food = spawn_position(&mut rng, GridSize::new(8, 6), &snake)
                .expect("board has free cells");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(GridSize::new(8, 6)));
        }
    }

    #[test]
    fn dense_board_still_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        // 3x2 board, snake covers everything except (0, 1).
        let snake = Snake::from_segments(
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
            ],
            Direction::Left,
        )
        .expect("valid body");

        for _ in 0..20 {
            assert_eq!(
                spawn_position(&mut rng, GridSize::new(3, 2), &snake),
                Some(Position::new(0, 1))
            );
        }
    }

    #[test]
    fn full_board_has_no_spawn_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::new(Position::new(1, 0), Direction::Right, 2);

        assert_eq!(spawn_position(&mut rng, GridSize::new(2, 1), &snake), None);
    }

    #[test]
    fn spawn_is_uniform_over_free_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = GridSize::new(4, 1);
        let snake = Snake::new(Position::new(0, 0), Direction::Left, 1);
        let draws = 6_000;

        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..draws {
            let food = spawn_position(&mut rng, bounds, &snake).expect("free cells");
            *counts.entry(food).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        for count in counts.values() {
            // Expected 2000 each; allow generous slack for a fixed seed.
            assert!((1_700..=2_300).contains(count), "skewed count {count}");
        }
    }

    #[test]
    fn dense_board_spawn_is_uniform_over_free_cells() {
        // 3x2 board with only the left column free.
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize::new(3, 2);
        let snake = Snake::from_segments(
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 0),
                Position::new(1, 0),
            ],
            Direction::Left,
        )
        .expect("valid body");
        let draws = 4_000;

        let mut counts: HashMap<Position, usize> = HashMap::new();
        for _ in 0..draws {
            let food = spawn_position(&mut rng, bounds, &snake).expect("free cells");
            *counts.entry(food).or_default() += 1;
        }

        assert_eq!(counts.len(), 2);
        for cell in [Position::new(0, 0), Position::new(0, 1)] {
            let count = counts.get(&cell).copied().unwrap_or_default();
            assert!((1_800..=2_200).contains(&count), "skewed count {count} at {cell:?}");
        }
    }
}
