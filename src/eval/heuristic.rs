//! Static evaluation of a whole board
//!
//! The board is cut into every five-cell window along the four line
//! directions (572 windows on 15x15). Each window is scored from its stone
//! counts (see [`Weights`]) and the scores are summed. Nothing is cached:
//! the result is a pure function of the board and the two stone colors.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::Weights;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

const WINDOW: i32 = 5;

/// Evaluate the board for `ai` against `human` with the default weights.
///
/// Positive values favor `ai`. A completed five for either side pushes the
/// score past `±PatternScore::FIVE`.
#[must_use]
pub fn evaluate(board: &Board, ai: Stone, human: Stone) -> i32 {
    evaluate_with(board, ai, human, &Weights::DEFAULT)
}

/// Evaluate the board for `ai` against `human` with explicit weights.
#[must_use]
pub fn evaluate_with(board: &Board, ai: Stone, human: Stone, weights: &Weights) -> i32 {
    debug_assert!(ai != human && ai != Stone::Empty && human != Stone::Empty);

    let n = BOARD_SIZE as i32;
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        for r in 0..n {
            for c in 0..n {
                // Window must end on the board
                if !Pos::is_valid(r + dr * (WINDOW - 1), c + dc * (WINDOW - 1)) {
                    continue;
                }
                score += window_at(board, r, c, dr, dc, ai, human, weights);
            }
        }
    }

    score
}

/// Score of the window starting at (r, c) and stepping by (dr, dc).
#[allow(clippy::too_many_arguments, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[inline]
fn window_at(
    board: &Board,
    r: i32,
    c: i32,
    dr: i32,
    dc: i32,
    ai: Stone,
    human: Stone,
    weights: &Weights,
) -> i32 {
    let mut ai_count = 0;
    let mut human_count = 0;

    for i in 0..WINDOW {
        let cell = board.get(Pos::new((r + dr * i) as u8, (c + dc * i) as u8));
        if cell == ai {
            ai_count += 1;
        } else if cell == human {
            human_count += 1;
        }
    }

    weights.window_score(ai_count, human_count)
}
