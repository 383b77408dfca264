//! Game rules for standard Gomoku
//!
//! Five or more in a row along any line wins; there are no captures or
//! forbidden moves.

pub mod win;

pub use win::{check_win, find_winning_line};
