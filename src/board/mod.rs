//! 15x15 free-style Gomoku board
//!
//! Cells are addressed by (row, col) from the top-left corner and flattened
//! row-major into 0..225. That flat index is also the bit index used by
//! [`Bitboard`], so iterating a bitboard visits cells in row-major order.

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

pub use bitboard::Bitboard;
pub use board::Board;

/// Cells per side
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Opening move on an empty board
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Content of a cell. `Empty` doubles as "no player".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// The other player; `Empty` maps to itself.
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// On-board cell coordinate.
///
/// Construct with [`Pos::new`] for known-good coordinates, or go through
/// [`Pos::is_valid`] / [`Pos::offset`] when the input may be off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(usize::from(row) < BOARD_SIZE && usize::from(col) < BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major cell number in `0..TOTAL_CELLS`
    #[inline]
    pub fn to_index(self) -> usize {
        usize::from(self.row) * BOARD_SIZE + usize::from(self.col)
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8)
    }

    /// Whether signed (row, col) lies on the board.
    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Step by (dr, dc); `None` once the step leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }
}
