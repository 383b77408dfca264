//! Five-in-a-row detection around a just-played stone
//!
//! Both functions look only at the four lines through the given cell, so they
//! must be called right after `stone` was placed there. Six or more in a row
//! also wins.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// No line needs more than four stones on either side of the origin.
const MAX_REACH: i32 = 4;

/// Count contiguous `stone` cells stepping away from `pos` (origin excluded).
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i32 {
    let mut count = 0;
    for i in 1..=MAX_REACH {
        match pos.offset(dr * i, dc * i) {
            Some(p) if board.get(p) == stone => count += 1,
            _ => break,
        }
    }
    count
}

/// Check whether the stone just placed at `pos` completes five in a row.
#[inline]
pub fn check_win(board: &Board, pos: Pos, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, stone) + run_length(board, pos, -dr, -dc, stone) >= 5
    })
}

/// Five cells of the winning line through `pos`, if there is one.
///
/// Returns the first five cells of the run, ordered along the line.
pub fn find_winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    if stone == Stone::Empty || board.get(pos) != stone {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, stone);
        let forward = run_length(board, pos, dr, dc, stone);
        if 1 + back + forward < 5 {
            continue;
        }

        let mut line = [pos; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = pos.offset(dr * (i as i32 - back), dc * (i as i32 - back))?;
        }
        return Some(line);
    }
    None
}
