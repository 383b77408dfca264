//! Gomoku AI Engine
//!
//! A minimax Gomoku engine for the standard free-style game:
//! - 15x15 board
//! - 5-in-a-row to win (overlines allowed)
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Five-in-a-row detection
//! - [`eval`]: Window-based static evaluation
//! - [`search`]: Move generation, alpha-beta and the parallel root search
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Turn sequencing for a human-vs-engine match
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! // Shallow search keeps the doc test fast
//! let mut board = Board::new();
//! let engine = AIEngine::with_config(EngineConfig::new(Difficulty::Easy)).unwrap();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(mv) = engine.get_move(&board, Stone::White, Stone::Black).unwrap() {
//!     board.place_stone(mv.pos(), Stone::White);
//!     println!("AI plays at ({}, {})", mv.row, mv.col);
//! }
//! ```
//!
//! # Search
//!
//! 1. Empty board: play the center without searching
//! 2. Root candidates (empty cells within two of a stone) ordered by static score
//! 3. One alpha-beta search per root candidate, run in parallel
//! 4. Highest score wins; ties go to the earliest candidate

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{AIEngine, Difficulty, EngineConfig, EngineError, MoveResult};
pub use game::{GameError, GameOutcome, GameState};
pub use rules::check_win;
pub use search::{find_best_move, Move};
