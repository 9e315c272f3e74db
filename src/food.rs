use log::debug;
use rand::Rng;

use crate::board::{Board, Position};
use crate::config::MAX_FOOD_SAMPLES;
use crate::snake::Snake;

/// Picks a uniformly random free cell for the next food.
///
/// Draws up to [`MAX_FOOD_SAMPLES`] random cells first. When the board is so
/// crowded that every draw lands on the snake, it falls back to choosing among
/// the enumerated free cells. Returns `None` only when the snake fills the
/// whole board.
#[must_use]
pub fn generate_food<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Option<Position> {
    if snake.len() >= board.area() {
        return None;
    }

    for _ in 0..MAX_FOOD_SAMPLES {
        let candidate = Position {
            x: rng.gen_range(board.min_x()..=board.max_x()),
            y: rng.gen_range(board.min_y()..=board.max_y()),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    debug!(
        "food sampling exhausted after {MAX_FOOD_SAMPLES} draws, snake covers {}/{} cells",
        snake.len(),
        board.area()
    );
    free_cell(rng, board, snake)
}

fn free_cell<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Option<Position> {
    let candidates: Vec<Position> = board
        .cells()
        .filter(|position| !snake.occupies(*position))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
