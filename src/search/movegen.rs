//! Candidate move generation with proximity filtering
//!
//! Only empty cells within Chebyshev distance 2 of an existing stone are
//! considered. Each candidate is pre-scored by placing the AI stone there and
//! evaluating the board once; the list is then sorted best-first so the
//! alpha-beta search tries promising moves early. These scores only order the
//! moves and are never returned as search results.

use crate::board::{Board, Pos, BOARD_SIZE, CENTER};
use crate::eval::evaluate_with;

use super::SearchParams;

/// Proximity radius around existing stones
const RADIUS: i32 = 2;

/// A board cell paired with a score from the AI's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub score: i32,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, score: i32) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            score,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

/// Empty cells near existing stones, row-major.
///
/// Returns an empty list for an empty board as well as for a full one.
#[must_use]
pub fn candidate_cells(board: &Board) -> Vec<Pos> {
    let mut mask = [[false; BOARD_SIZE]; BOARD_SIZE];

    for pos in board.occupied() {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                if let Some(p) = pos.offset(dr, dc) {
                    if board.is_empty(p) {
                        mask[p.row as usize][p.col as usize] = true;
                    }
                }
            }
        }
    }

    let mut cells = Vec::with_capacity(64);
    for (r, row) in mask.iter().enumerate() {
        for (c, &marked) in row.iter().enumerate() {
            if marked {
                cells.push(Pos::new(r as u8, c as u8));
            }
        }
    }
    cells
}

/// Generate candidate moves ordered by one-ply score, best first.
///
/// An empty board yields the single opening move at the center with score 0.
/// A full board yields no moves. Ties keep row-major order. The board is
/// borrowed mutably for the tentative placements and is left unchanged.
#[must_use]
pub fn generate_moves(board: &mut Board, params: &SearchParams) -> Vec<Move> {
    if board.is_board_empty() {
        return vec![Move::new(CENTER, 0)];
    }

    let mut moves: Vec<Move> = candidate_cells(board)
        .into_iter()
        .map(|pos| {
            let score = board.with_stone(pos, params.ai, |b| {
                evaluate_with(b, params.ai, params.human, &params.weights)
            });
            Move::new(pos, score)
        })
        .collect();

    // Stable sort: equal scores stay in scan order
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}
