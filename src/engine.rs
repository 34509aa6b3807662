//! Machine move selection
//!
//! The engine scores every empty cell with the window heuristic from
//! [`crate::eval`] and plays the highest-scoring one. There is no search
//! and no randomness: the same board always yields the same move.
//!
//! # Example
//!
//! ```
//! use gobang::{Board, Pos, ScoringEngine, Side};
//!
//! let mut board = Board::new();
//! for col in 5..=8 {
//!     board.place(Pos::new(5, col), Side::Human);
//! }
//!
//! // The machine must contest the open four
//! let engine = ScoringEngine::new();
//! assert_eq!(engine.select_move(&board), Some(Pos::new(5, 4)));
//! ```

use crate::board::{Board, Pos};
use crate::eval::score_board;
use std::time::Instant;
use tracing::{debug, trace};

/// Where a machine move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Scripted centre opening, played without scoring
    Opening,
    /// Arg-max of the window heuristic
    Heuristic,
}

/// A selected machine move with statistics for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Accumulated score of the chosen cell
    pub score: i64,
    /// How the move was chosen
    pub source: MoveSource,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    /// Result for the scripted opening move
    #[inline]
    pub fn opening(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            source: MoveSource::Opening,
            time_us: 0,
        }
    }
}

/// Heuristic move selector for the machine side.
///
/// Holds no state between turns; each call builds its own score grid and
/// drops it before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Best empty cell for the machine, or `None` if the board is full.
    #[must_use]
    pub fn select_move(&self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best empty cell along with its score and timing.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let grid = score_board(board);
        let best = grid.best(board);
        let time_us = start.elapsed().as_micros() as u64;

        match best {
            Some((pos, score)) => {
                trace!(row = pos.row, col = pos.col, score, time_us, "heuristic selection");
                MoveResult {
                    best_move: Some(pos),
                    score,
                    source: MoveSource::Heuristic,
                    time_us,
                }
            }
            None => {
                debug!("no empty cell left to score");
                MoveResult {
                    best_move: None,
                    score: 0,
                    source: MoveSource::Heuristic,
                    time_us,
                }
            }
        }
    }
}
