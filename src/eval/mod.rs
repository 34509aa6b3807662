//! Evaluation module for Gobang positions
//!
//! This module scores empty cells for the machine:
//! - Window scores by stone count (`patterns`)
//! - Four overlapping window scans accumulated per cell (`heuristic`)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_board, scan, Orientation, ScoreGrid, WINDOW_LEN};
pub use patterns::{window_score, WindowScore};
