//! Root move selection with one search task per candidate
//!
//! Each root candidate gets its own copy of the board, its own [`Searcher`]
//! and a full (-INF, INF) window; branches share nothing and do not prune
//! each other. Results are gathered once every branch has finished and the
//! highest score wins.

use log::{debug, trace};
use rayon::prelude::*;

use crate::board::{Board, Stone, CENTER};

use super::alphabeta::{SearchParams, SearchStats, Searcher, INF};
use super::movegen::{generate_moves, Move};

/// How root branches are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One rayon task per candidate on the current thread pool
    #[default]
    Parallel,
    /// Same branches, one after another on the calling thread
    Sequential,
}

/// Outcome of a root search.
#[derive(Debug, Clone, Default)]
pub struct RootResult {
    /// Highest-scoring move, `None` when no empty cell is left
    pub best_move: Option<Move>,
    /// Every root branch with its search score, in candidate order
    pub branches: Vec<Move>,
    /// Statistics summed over all branches
    pub stats: SearchStats,
}

/// Search every root candidate and pick the best.
///
/// An empty board returns the center with score 0 without searching. With
/// equal scores the earliest candidate in move-ordering order is chosen.
#[must_use]
pub fn search_root(board: &Board, params: &SearchParams, schedule: Schedule) -> RootResult {
    if board.is_board_empty() {
        let opening = Move::new(CENTER, 0);
        return RootResult {
            best_move: Some(opening),
            branches: vec![opening],
            stats: SearchStats::default(),
        };
    }

    let mut scratch = board.clone();
    let candidates = generate_moves(&mut scratch, params);
    let child_depth = params.depth.saturating_sub(1);

    let run_branch = |candidate: &Move| -> (Move, SearchStats) {
        let mut branch_board = board.clone();
        branch_board.place_stone(candidate.pos(), params.ai);

        let mut searcher = Searcher::new(*params);
        let score = searcher.minimax(&mut branch_board, child_depth, false, -INF, INF);
        trace!(
            "branch ({}, {}) score {} nodes {}",
            candidate.row,
            candidate.col,
            score,
            searcher.stats().nodes
        );
        (Move::new(candidate.pos(), score), searcher.stats())
    };

    let results: Vec<(Move, SearchStats)> = match schedule {
        Schedule::Parallel => candidates.par_iter().map(run_branch).collect(),
        Schedule::Sequential => candidates.iter().map(run_branch).collect(),
    };

    let mut stats = SearchStats::default();
    let mut best_move: Option<Move> = None;
    for (mv, branch_stats) in &results {
        stats.merge(branch_stats);
        if best_move.map_or(true, |best| mv.score > best.score) {
            best_move = Some(*mv);
        }
    }

    debug!(
        "root: {} branches, depth {}, best {:?}, nodes {}",
        results.len(),
        params.depth,
        best_move,
        stats.nodes
    );

    RootResult {
        best_move,
        branches: results.into_iter().map(|(mv, _)| mv).collect(),
        stats,
    }
}

/// Best move for `ai` against `human`, searching `depth` plies in parallel.
///
/// Returns `None` when the board is full. The board is only read; applying
/// the returned move is up to the caller.
///
/// # Panics
///
/// Panics if `depth` is 0, or if `ai` and `human` are equal or `Empty`.
#[must_use]
pub fn find_best_move(board: &Board, ai: Stone, human: Stone, depth: u8) -> Option<Move> {
    assert!(depth >= 1, "search depth must be at least 1");
    assert!(
        ai != human && ai != Stone::Empty && human != Stone::Empty,
        "ai and human must be distinct stones"
    );
    search_root(board, &SearchParams::new(depth, ai, human), Schedule::Parallel).best_move
}
