//! Evaluation module for Gomoku positions
//!
//! Positions are scored by summing fixed per-window scores over every
//! five-cell window on the board.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_with};
pub use patterns::{PatternScore, Weights};
