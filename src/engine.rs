//! Main AI engine
//!
//! Wraps the root search with a validated configuration and a fixed-size
//! rayon thread pool that runs the root branches.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, EngineConfig, Pos, Stone};
//!
//! let engine = AIEngine::with_config(EngineConfig::new(Difficulty::Easy)).unwrap();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White, Stone::Black).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::info;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

use crate::board::{Board, Stone};
use crate::eval::Weights;
use crate::search::{search_root, Move, Schedule, SearchParams};

/// Difficulty levels, each a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// 2 plies
    Easy,
    /// 3 plies
    Medium,
    /// 4 plies
    #[default]
    Hard,
}

impl Difficulty {
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Errors raised while configuring or calling the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("ai and human must be two different non-empty stones (got {ai:?} and {human:?})")]
    InvalidPlayers { ai: Stone, human: Stone },

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched, root move included
    pub depth: u8,
    /// Worker threads for root branches (0 = one per logical CPU)
    pub threads: usize,
    /// Window score table
    pub weights: Weights,
    /// Parallel or sequential root
    pub schedule: Schedule,
}

impl EngineConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            threads: 0,
            weights: Weights::DEFAULT,
            schedule: Schedule::Parallel,
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the board is full
    pub best_move: Option<Move>,
    /// Depth searched
    pub depth: u8,
    /// Root candidates searched
    pub branches: usize,
    /// Nodes visited over all branches
    pub nodes: u64,
    /// Alpha-beta cutoffs over all branches
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Whole milliseconds, saturating at `u64::MAX`.
#[inline]
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Gomoku move-search engine.
pub struct AIEngine {
    config: EngineConfig,
    pool: ThreadPool,
}

impl AIEngine {
    /// Engine with the default configuration (`Difficulty::Hard`).
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("gomoku-search-{i}"))
            .build()?;
        Ok(Self { config, pool })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Worker threads actually running root branches
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Best move for `ai` against `human`, or `None` if the board is full.
    pub fn get_move(&self, board: &Board, ai: Stone, human: Stone) -> Result<Option<Move>, EngineError> {
        Ok(self.get_move_with_stats(board, ai, human)?.best_move)
    }

    /// Best move plus search statistics.
    ///
    /// The board is only read. Blocks until every root branch has finished.
    pub fn get_move_with_stats(
        &self,
        board: &Board,
        ai: Stone,
        human: Stone,
    ) -> Result<MoveResult, EngineError> {
        if ai == human || ai == Stone::Empty || human == Stone::Empty {
            return Err(EngineError::InvalidPlayers { ai, human });
        }

        let start = Instant::now();
        let params = SearchParams::new(self.config.depth, ai, human).with_weights(self.config.weights);
        let root = self
            .pool
            .install(|| search_root(board, &params, self.config.schedule));
        let time_ms = millis(start.elapsed());

        match root.best_move {
            Some(mv) => info!(
                "{:?} plays ({}, {}) score {} [depth {}, {} branches, {} nodes, {}ms]",
                ai,
                mv.row,
                mv.col,
                mv.score,
                self.config.depth,
                root.branches.len(),
                root.stats.nodes,
                time_ms
            ),
            None => info!("{:?} has no move: board is full", ai),
        }

        Ok(MoveResult {
            best_move: root.best_move,
            depth: self.config.depth,
            branches: root.branches.len(),
            nodes: root.stats.nodes,
            cutoffs: root.stats.cutoffs,
            time_ms,
        })
    }
}
