//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation with proximity filtering and one-ply ordering
//! - Fixed-depth minimax with alpha-beta pruning
//! - Root fan-out running one independent search per candidate

pub mod alphabeta;
pub mod movegen;
pub mod root;

pub use alphabeta::{SearchParams, SearchStats, Searcher, INF};
pub use movegen::{candidate_cells, generate_moves, Move};
pub use root::{find_best_move, search_root, RootResult, Schedule};
