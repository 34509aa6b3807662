//! Turn sequencing, undo and game results
//!
//! - [`GameController`]: the turn state machine
//! - [`RoundHistory`]: paired move stacks for undo
//! - [`GameConfig`]: who opens

mod config;
mod controller;
mod history;

pub use config::GameConfig;
pub use controller::{Command, GameController, GameState, TurnError};
pub use history::RoundHistory;
