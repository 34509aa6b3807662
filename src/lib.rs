//! Gobang: five-in-a-row against a heuristic machine opponent
//!
//! A 15x15 Gomoku game for one human and the computer:
//! - Five or more stones in an unbroken line wins (overlines count)
//! - The machine scores every empty cell from overlapping five-cell windows
//!   and plays the best one
//! - A full round (human move plus machine reply) can be taken back
//!
//! # Architecture
//!
//! - [`board`]: 15x15 board with checked placement
//! - [`rules`]: five-in-a-row detection through the last stone
//! - [`eval`]: window scores and per-cell accumulation
//! - [`engine`]: machine move selection
//! - [`game`]: turn state machine and round history
//! - [`notation`]: `a`-`o` letter coordinates
//! - [`cli`]: terminal frontend
//! - [`ui`]: egui frontend
//!
//! # Quick Start
//!
//! ```
//! use gobang::game::{GameConfig, GameController, GameState};
//! use gobang::{Pos, Side};
//!
//! let mut game = GameController::new(GameConfig::machine_first());
//!
//! // The machine always opens at the centre
//! game.advance();
//! assert_eq!(game.last_move(), Some((Side::Machine, Pos::CENTER)));
//!
//! // Human replies, then the machine answers
//! game.play_human(Pos::new(6, 7)).unwrap();
//! assert_eq!(game.advance(), GameState::HumanTurn);
//! assert_eq!(game.board().stone_count(), 3);
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod eval;
pub mod game;
pub mod notation;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side, Stone, BOARD_SIZE};
pub use engine::{MoveResult, MoveSource, ScoringEngine};
pub use game::{Command, GameConfig, GameController, GameState, RoundHistory, TurnError};
