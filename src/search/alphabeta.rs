//! Fixed-depth minimax with alpha-beta pruning
//!
//! The search walks a single board buffer: every candidate is placed, the
//! subtree is searched, and the cell is cleared again before the next
//! candidate is tried (see [`Board::with_stone`]). No positions are cached, so
//! a position reached through different move orders is searched again.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{SearchParams, Searcher, INF};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(SearchParams::new(2, Stone::White, Stone::Black));
//! let score = searcher.minimax(&mut board, 1, true, -INF, INF);
//! assert_eq!(board.stone_count(), 1);
//! println!("score {score}, nodes {}", searcher.stats().nodes);
//! ```

use crate::board::{Board, Stone};
use crate::eval::{evaluate_with, PatternScore, Weights};

use super::movegen::generate_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Per-call search settings: how deep to look and which side is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched from the root (root move included)
    pub depth: u8,
    /// Side being maximized
    pub ai: Stone,
    /// Side modeled as the minimizing opponent
    pub human: Stone,
    /// Window score table
    pub weights: Weights,
}

impl SearchParams {
    #[must_use]
    pub fn new(depth: u8, ai: Stone, human: Stone) -> Self {
        debug_assert!(ai != human && ai != Stone::Empty && human != Stone::Empty);
        Self {
            depth,
            ai,
            human,
            weights: Weights::DEFAULT,
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (each one evaluates the board once)
    pub nodes: u64,
    /// Candidate loops cut short by beta <= alpha
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining branch stats)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Alpha-beta searcher for one branch of the tree.
///
/// A searcher holds no board; it borrows one per call. Separate branches
/// use separate searchers and separate boards.
#[derive(Debug, Clone)]
pub struct Searcher {
    params: SearchParams,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `board` searched `depth` plies deep, AI perspective.
    ///
    /// Every node evaluates the board first. A score of magnitude
    /// `PatternScore::DECISIVE` or more is returned at once, as is the score
    /// at depth 0 or when no empty cell is left. Otherwise the side to move
    /// (`maximizing` = AI) tries each generated candidate in order, and the
    /// loop stops as soon as beta <= alpha.
    ///
    /// A node with no empty cell is scored by its static evaluation, not by
    /// an `INF` sentinel, so a filled board still ranks by its shapes.
    ///
    /// `board` is returned with the same contents it was passed in with.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let score = evaluate_with(board, self.params.ai, self.params.human, &self.params.weights);
        if score.abs() >= PatternScore::DECISIVE {
            return score;
        }
        if depth == 0 {
            return score;
        }

        let moves = generate_moves(board, &self.params);
        if moves.is_empty() {
            return score;
        }

        if maximizing {
            let stone = self.params.ai;
            let mut best = -INF;
            for mv in &moves {
                let eval = board.with_stone(mv.pos(), stone, |b| {
                    self.minimax(b, depth - 1, false, alpha, beta)
                });
                best = best.max(eval);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let stone = self.params.human;
            let mut best = INF;
            for mv in &moves {
                let eval = board.with_stone(mv.pos(), stone, |b| {
                    self.minimax(b, depth - 1, true, alpha, beta)
                });
                best = best.min(eval);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Plain minimax over the same candidates, no pruning. Reference for tests.
    #[cfg(test)]
    pub(crate) fn minimax_exhaustive(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        let score = evaluate_with(board, self.params.ai, self.params.human, &self.params.weights);
        if score.abs() >= PatternScore::DECISIVE || depth == 0 {
            return score;
        }

        let moves = generate_moves(board, &self.params);
        if moves.is_empty() {
            return score;
        }

        let stone = if maximizing { self.params.ai } else { self.params.human };
        let values: Vec<i32> = moves
            .iter()
            .map(|mv| {
                board.with_stone(mv.pos(), stone, |b| {
                    self.minimax_exhaustive(b, depth - 1, !maximizing)
                })
            })
            .collect();
        if maximizing {
            values.into_iter().max().unwrap_or(score)
        } else {
            values.into_iter().min().unwrap_or(score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, TOTAL_CELLS};
    use crate::eval::evaluate;

    fn searcher(depth: u8) -> Searcher {
        Searcher::new(SearchParams::new(depth, Stone::White, Stone::Black))
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);

        let mut s = searcher(0);
        let score = s.minimax(&mut board, 0, true, -INF, INF);
        assert_eq!(score, evaluate(&board, Stone::White, Stone::Black));
        assert_eq!(s.stats().nodes, 1);
    }

    #[test]
    fn test_decisive_score_short_circuits() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(3, c), Stone::White);
        }
        board.place_stone(Pos::new(10, 10), Stone::Black);

        let mut s = searcher(3);
        let score = s.minimax(&mut board, 3, false, -INF, INF);
        assert!(score >= PatternScore::FIVE);
        assert_eq!(s.stats().nodes, 1, "no child should be visited");
    }

    #[test]
    fn test_minimizer_completes_five() {
        // Black (human) has four on row 7 with one open end
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(0, 14), Stone::White);

        let mut s = searcher(1);
        let score = s.minimax(&mut board, 1, false, -INF, INF);
        assert!(score <= -PatternScore::FIVE, "human should win, got {score}");
    }

    #[test]
    fn test_maximizer_completes_five() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(2, c), Stone::White);
        }
        board.place_stone(Pos::new(2, 4), Stone::Black);

        let mut s = searcher(1);
        let score = s.minimax(&mut board, 1, true, -INF, INF);
        assert!(score >= PatternScore::FIVE, "ai should win, got {score}");
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(6, 8), Stone::Black);
        let before = board.clone();

        let mut s = searcher(3);
        let _ = s.minimax(&mut board, 2, true, -INF, INF);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_preserves_value() {
        let positions: [&[(u8, u8, Stone)]; 3] = [
            &[(0, 0, Stone::Black), (1, 1, Stone::White)],
            &[(14, 14, Stone::Black), (13, 13, Stone::White), (14, 12, Stone::Black)],
            &[(0, 7, Stone::Black), (0, 8, Stone::Black), (1, 8, Stone::White)],
        ];

        for stones in positions {
            let mut board = Board::new();
            for &(r, c, stone) in stones {
                board.place_stone(Pos::new(r, c), stone);
            }
            for maximizing in [true, false] {
                let mut pruned = searcher(2);
                let mut full = searcher(2);
                let a = pruned.minimax(&mut board, 2, maximizing, -INF, INF);
                let b = full.minimax_exhaustive(&mut board, 2, maximizing);
                assert_eq!(a, b, "pruning changed the value for {:?}", stones);
                assert!(pruned.stats().nodes <= full.stats().nodes);
            }
        }
    }

    #[test]
    fn test_pruning_preserves_value_depth_three() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);

        let mut pruned = searcher(3);
        let mut full = searcher(3);
        let a = pruned.minimax(&mut board, 3, false, -INF, INF);
        let b = full.minimax_exhaustive(&mut board, 3, false);
        assert_eq!(a, b);
        assert!(pruned.stats().cutoffs > 0);
        assert!(pruned.stats().nodes < full.stats().nodes);
    }

    #[test]
    fn test_full_board_returns_static_eval() {
        let mut board = Board::new();
        // Column-paired pattern so no five appears anywhere
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            let stone = if (pos.row / 2 + pos.col) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.place_stone(pos, stone);
        }
        let mut s = searcher(2);
        let score = s.minimax(&mut board, 2, true, -INF, INF);
        assert_eq!(score, evaluate(&board, Stone::White, Stone::Black));
        assert!(score > -INF && score < INF, "no sentinel at a filled board");
        assert_eq!(s.stats().nodes, 1);

        let score = s.minimax(&mut board, 2, false, -INF, INF);
        assert!(score > -INF && score < INF);
    }

    #[test]
    fn test_stats_merge() {
        let mut a = SearchStats { nodes: 10, cutoffs: 2 };
        a.merge(&SearchStats { nodes: 5, cutoffs: 1 });
        assert_eq!(a, SearchStats { nodes: 15, cutoffs: 3 });
    }
}
