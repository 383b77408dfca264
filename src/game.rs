//! Game state for a human-vs-engine match
//!
//! Holds the canonical board across turns and drives the move sequence:
//! place, check for five, then let the other side move. Black always moves
//! first; the human may take either color.

use log::debug;
use thiserror::Error;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, EngineError, MoveResult};
use crate::rules::{check_win, find_winning_line};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: [Pos; 5] },
    /// Board filled with no five
    Draw,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("({}, {}) is already occupied", .0.row, .0.col)]
    Occupied(Pos),

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("no moves to undo")]
    NothingToUndo,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    human: Stone,
    current_turn: Stone,
    outcome: Option<GameOutcome>,
    move_history: Vec<(Pos, Stone)>,
    last_ai_result: Option<MoveResult>,
}

impl GameState {
    /// New game with the human playing `human` (Black or White).
    pub fn new(human: Stone) -> Self {
        debug_assert!(human != Stone::Empty);
        Self {
            board: Board::new(),
            human,
            current_turn: Stone::Black,
            outcome: None,
            move_history: Vec::new(),
            last_ai_result: None,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.move_history.clear();
        self.last_ai_result = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn human(&self) -> Stone {
        self.human
    }

    #[inline]
    pub fn ai(&self) -> Stone {
        self.human.opponent()
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    /// Statistics of the engine's most recent move
    #[inline]
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == self.human
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.current_turn == self.ai()
    }

    /// Place the human's stone at (row, col).
    ///
    /// Returns the outcome if this move ended the game.
    pub fn try_place_stone(&mut self, row: i32, col: i32) -> Result<Option<GameOutcome>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        if !Pos::is_valid(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }

        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        Ok(self.execute_move(pos))
    }

    /// Ask the engine for its move and play it.
    ///
    /// A full board with no move available ends the game as a draw.
    pub fn play_ai_move(&mut self, engine: &AIEngine) -> Result<Option<GameOutcome>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }

        let result = engine.get_move_with_stats(&self.board, self.ai(), self.human)?;
        let best = result.best_move;
        self.last_ai_result = Some(result);

        match best {
            Some(mv) => Ok(self.execute_move(mv.pos())),
            None => {
                self.outcome = Some(GameOutcome::Draw);
                Ok(self.outcome)
            }
        }
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Option<GameOutcome> {
        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        debug!("{:?} played ({}, {})", color, pos.row, pos.col);

        if check_win(&self.board, pos, color) {
            // check_win and find_winning_line scan the same lines
            if let Some(line) = find_winning_line(&self.board, pos, color) {
                self.outcome = Some(GameOutcome::Win { winner: color, line });
                return self.outcome;
            }
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            return self.outcome;
        }

        self.current_turn = color.opponent();
        None
    }

    /// Take back moves until it is the human's turn again.
    ///
    /// Normally removes the engine's reply and the human move before it.
    /// Returns how many stones were removed.
    pub fn undo(&mut self) -> Result<usize, GameError> {
        if self.move_history.is_empty() {
            return Err(GameError::NothingToUndo);
        }

        let mut undone = 0;
        while let Some((pos, stone)) = self.move_history.pop() {
            self.board.remove_stone(pos);
            self.current_turn = stone;
            undone += 1;
            if stone == self.human {
                break;
            }
        }

        self.outcome = None;
        self.last_ai_result = None;
        Ok(undone)
    }
}
